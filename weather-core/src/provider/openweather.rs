use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    config::OpenWeatherMapConfig,
    error::ProviderError,
    model::{Coordinates, WeatherReport},
};

use super::WeatherProvider;

/// Unit system requested from OpenWeatherMap. Temperature thresholds are in F.
const UNITS: &str = "imperial";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &OpenWeatherMapConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::Build(e.without_url()))?;

        Ok(Self {
            api_key: config.key.clone(),
            url: config.url.clone(),
            http,
        })
    }

    async fn fetch_current(
        &self,
        coords: &Coordinates,
    ) -> Result<OwCurrentResponse, ProviderError> {
        // The request URL carries `appid`, so reqwest errors are stripped of
        // it before they can reach a response body or a log line.
        let request = self
            .http
            .get(&self.url)
            .query(&[
                ("lat", coords.lat.as_str()),
                ("lon", coords.lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .build()
            .map_err(|e| ProviderError::Build(e.without_url()))?;

        debug!(
            lat = %coords.lat,
            lon = %coords.lon,
            "Requesting current weather from OpenWeatherMap"
        );

        let res = self
            .http
            .execute(request)
            .await
            .map_err(|e| ProviderError::Transport(e.without_url()))?;
        let status = res.status();

        if status != StatusCode::OK {
            // Neither the raw body nor the decode error is surfaced.
            let parsed = match res.bytes().await {
                Ok(body) => decode_first::<OwError>(&body).ok(),
                Err(_) => None,
            };

            return match parsed {
                Some(err) => {
                    warn!(
                        %status,
                        code = %err.cod,
                        message = %err.message,
                        "OpenWeatherMap returned an error"
                    );
                    Err(ProviderError::Upstream(err.message))
                }
                None => {
                    warn!(%status, "OpenWeatherMap returned an undecodable error body");
                    Err(ProviderError::UndecodableError)
                }
            };
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| ProviderError::ReadBody(e.without_url()))?;

        decode_first(&body).map_err(ProviderError::Decode)
    }
}

/// Decode the first JSON value in `body`. Anything after it is ignored.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
    {
        Some(res) => res,
        // Empty or whitespace-only body; let serde_json report the EOF.
        None => serde_json::from_slice(body),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwMain {
    feels_like: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl From<OwCurrentResponse> for WeatherReport {
    fn from(res: OwCurrentResponse) -> Self {
        WeatherReport {
            feels_like: res.main.feels_like,
            conditions: res.weather.into_iter().map(|w| w.main).collect(),
        }
    }
}

/// Error body. A non-string `cod` makes the whole body undecodable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwError {
    cod: String,
    message: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, coords: &Coordinates) -> Result<WeatherReport, ProviderError> {
        self.fetch_current(coords).await.map(WeatherReport::from)
    }
}
