//! HTTP handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};
use weather_core::{consolidate, validate};

use crate::{error::ApiError, state::AppState};

/// GET /weather?lat=<float>&lon=<float>
///
/// Query pairs are taken as a list so a repeated key resolves to its first
/// value instead of failing extraction.
pub async fn weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let lat = form_value(&params, "lat");
    let lon = form_value(&params, "lon");

    let coords = validate(lat, lon)?;
    debug!(lat = %coords.lat, lon = %coords.lon, "Weather request");

    let report = state.provider.get_weather(&coords).await?;
    let out = consolidate(&report);

    Ok(match serde_json::to_vec(&out) {
        Ok(mut body) => {
            body.push(b'\n');
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            // Nothing useful can be told to the client at this point.
            error!(error = %e, "Error encoding weather response");
            StatusCode::OK.into_response()
        }
    })
}

/// First value for `key`, or "" when absent.
fn form_value<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
