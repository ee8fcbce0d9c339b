use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, builder::BoolishValueParser};
use weather_core::Config;

/// Command-line flags. Each one can also be set through the environment
/// variable named next to it; a flag on the command line wins over the
/// variable, and both win over the config file.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy HTTP service")]
pub struct Cli {
    /// Listen address for the server, e.g. ":8080" or "127.0.0.1:8080".
    #[arg(long, env = "WEATHER_LISTEN")]
    pub listen: Option<String>,

    /// Enable debug logging.
    #[arg(
        long,
        env = "WEATHER_DEBUG",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub debug: Option<bool>,

    /// API key for Open Weather Map.
    #[arg(long, env = "WEATHER_OPENWEATHERMAP_KEY", hide_env_values = true)]
    pub openweathermap_key: Option<String>,

    /// Override the Open Weather Map current weather endpoint.
    #[arg(long, env = "WEATHER_OPENWEATHERMAP_URL")]
    pub openweathermap_url: Option<String>,

    /// Timeout for a single call to the weather provider, in seconds.
    #[arg(long, env = "WEATHER_PROVIDER_TIMEOUT_SECS")]
    pub provider_timeout_secs: Option<u64>,

    /// TOML config file. Defaults to the platform config directory.
    #[arg(long, env = "WEATHER_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the effective configuration: file (or defaults), then flags/env.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_file(path)?,
            None => Config::load()?,
        };

        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(listen) = &self.listen {
            config.server.listen = listen.clone();
        }
        if let Some(debug) = self.debug {
            config.server.debug = debug;
        }
        if let Some(key) = &self.openweathermap_key {
            config.openweathermap.key = key.clone();
        }
        if let Some(url) = &self.openweathermap_url {
            config.openweathermap.url = url.clone();
        }
        if let Some(secs) = self.provider_timeout_secs {
            config.openweathermap.timeout_secs = secs;
        }
    }
}
