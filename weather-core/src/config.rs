use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    net::{SocketAddr, ToSocketAddrs},
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_LISTEN: &str = ":8080";
pub const DEFAULT_OPENWEATHERMAP_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port`, or `:port` for all interfaces.
    pub listen: String,
    /// Enables debug level logging.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            debug: false,
        }
    }
}

/// OpenWeatherMap credentials and endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWeatherMapConfig {
    pub key: String,
    pub url: String,
    /// Upper bound for a single outbound call, in seconds.
    pub timeout_secs: u64,
}

impl Default for OpenWeatherMapConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            url: DEFAULT_OPENWEATHERMAP_URL.to_string(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl OpenWeatherMapConfig {
    /// Upper bound for a single outbound call.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// The key must never end up in logs.
impl fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field(
                "key",
                &if self.key.is_empty() {
                    "<unset>"
                } else {
                    "<redacted>"
                },
            )
            .field("url", &self.url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Service configuration. Built once at startup and only read afterwards.
///
/// Example TOML:
/// ```toml
/// [server]
/// listen = ":8080"
///
/// [openweathermap]
/// key = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub openweathermap: OpenWeatherMapConfig,
}

impl Config {
    /// Load config from an explicit path. The file must exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Load config from the platform config directory, or return the defaults
    /// if no file is there.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(&path)
    }

    /// Path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn provider_api_key(&self) -> &str {
        &self.openweathermap.key
    }

    /// Everything that would stop the service from answering requests.
    /// An empty list means the config is usable.
    pub fn faults(&self) -> Vec<&'static str> {
        let mut faults = Vec::new();

        if self.server.listen.trim().is_empty() {
            faults.push("empty listen address provided");
        }

        if self.openweathermap.key.is_empty() {
            faults.push("no Open Weather Map key provided");
        }

        if self.openweathermap.url.is_empty() {
            faults.push("no Open Weather Map URL provided");
        }

        faults
    }

    /// Resolve the listen address. `:8080` binds every interface.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let listen = self.server.listen.trim();
        let normalized = match listen.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => listen.to_string(),
        };

        normalized
            .to_socket_addrs()
            .with_context(|| format!("Invalid listen address: {listen}"))?
            .next()
            .ok_or_else(|| anyhow!("Listen address resolved to nothing: {listen}"))
    }
}
