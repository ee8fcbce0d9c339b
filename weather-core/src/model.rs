use serde::{Deserialize, Serialize};

/// Validated coordinates. The raw strings are kept so they can be forwarded
/// to the provider exactly as the caller sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

/// What a provider reports for a location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherReport {
    /// Apparent temperature in Fahrenheit.
    pub feels_like: f32,
    /// Condition labels, most significant first.
    pub conditions: Vec<String>,
}

/// Temperature bucket returned to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Hot,
    Moderate,
    Cold,
}

/// Body of a successful `/weather` response.
///
/// `ExtraConditions` is `null` on the wire when the provider reported fewer
/// than two conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsolidatedWeather {
    pub temperature: TemperatureCategory,
    pub primary_condition: String,
    pub extra_conditions: Option<Vec<String>>,
}

/// Body of every failed `/weather` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
