//! Core library for the weather proxy service.
//!
//! This crate defines:
//! - Configuration handling
//! - Input validation for `lat`/`lon`
//! - The OpenWeatherMap client behind the `WeatherProvider` abstraction
//! - Consolidation of provider data into the consumer-facing shape
//!
//! It is used by `weather-server`, but carries no HTTP server code itself.

pub mod config;
pub mod consolidate;
pub mod error;
pub mod model;
pub mod provider;
pub mod validate;

pub use config::Config;
pub use consolidate::consolidate;
pub use error::{ProviderError, ValidationError};
pub use model::{
    ConsolidatedWeather, Coordinates, ErrorResponse, TemperatureCategory, WeatherReport,
};
pub use provider::{WeatherProvider, provider_from_config};
pub use validate::validate;
