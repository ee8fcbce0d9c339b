use crate::{
    Config,
    error::ProviderError,
    model::{Coordinates, WeatherReport},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// A source of current weather for a coordinate pair.
///
/// Implementations make a single attempt per call. Dropping the returned
/// future aborts any request still in flight.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, coords: &Coordinates) -> Result<WeatherReport, ProviderError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    if config.provider_api_key().is_empty() {
        anyhow::bail!(
            "No API key configured for OpenWeatherMap.\n\
             Hint: pass --openweathermap-key or set WEATHER_OPENWEATHERMAP_KEY."
        );
    }

    let provider = OpenWeatherProvider::new(&config.openweathermap)?;
    Ok(Arc::new(provider))
}
