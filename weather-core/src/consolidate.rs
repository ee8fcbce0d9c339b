use crate::model::{ConsolidatedWeather, TemperatureCategory, WeatherReport};

/// Feels-like temperature (F) at or above which it is "hot".
pub const HOT_THRESHOLD: f32 = 85.0;
/// Feels-like temperature (F) at or below which it is "cold".
pub const COLD_THRESHOLD: f32 = 65.0;

/// Reduce a provider report to the consumer-facing shape.
pub fn consolidate(report: &WeatherReport) -> ConsolidatedWeather {
    let temperature = if report.feels_like >= HOT_THRESHOLD {
        TemperatureCategory::Hot
    } else if report.feels_like <= COLD_THRESHOLD {
        TemperatureCategory::Cold
    } else {
        TemperatureCategory::Moderate
    };

    let primary_condition = report.conditions.first().cloned().unwrap_or_default();

    let extra_conditions = match report.conditions.as_slice() {
        [_, rest @ ..] if !rest.is_empty() => Some(rest.to_vec()),
        _ => None,
    };

    ConsolidatedWeather {
        temperature,
        primary_condition,
        extra_conditions,
    }
}
