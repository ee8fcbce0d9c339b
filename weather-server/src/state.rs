//! Application state shared by all handlers.

use std::sync::Arc;

use anyhow::Result;
use weather_core::{Config, WeatherProvider, provider_from_config};

/// Read-only state; nothing in here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Build the state from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?))
    }
}
