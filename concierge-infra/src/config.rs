use concierge_reservations::adapter::{AdapterDefaults, DEFAULT_CHANNEL_CODE, DEFAULT_LANGUAGE};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub itinerary: RemoteServiceConfig,
    pub profiles: RemoteServiceConfig,
    #[serde(default)]
    pub defaults: RequestDefaults,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteServiceConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl RemoteServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Values sent to the itinerary manager when a request does not carry them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_channel_code")]
    pub channel_code: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            channel_code: default_channel_code(),
        }
    }
}

impl From<RequestDefaults> for AdapterDefaults {
    fn from(defaults: RequestDefaults) -> Self {
        Self {
            language: defaults.language,
            channel_code: defaults.channel_code,
        }
    }
}

fn default_timeout_seconds() -> u64 { 30 }
fn default_language() -> String { DEFAULT_LANGUAGE.to_string() }
fn default_channel_code() -> String { DEFAULT_CHANNEL_CODE.to_string() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `CONCIERGE__ITINERARY__BASE_URL=http://...`
            .add_source(config::Environment::with_prefix("CONCIERGE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
