use serde::Deserialize;
use std::env;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;
const DEFAULT_OTEL_ENDPOINT: &str = "http://localhost:4318";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub session_ttl_secs: u64,
    pub sweep_interval_secs: u64,
    pub event_channel_capacity: usize,
    pub log_format: LogFormat,
    pub otel_enabled: bool,
    pub otel_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            log_format: LogFormat::Pretty,
            otel_enabled: false,
            otel_endpoint: DEFAULT_OTEL_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Root .env first, then the crate-local one
        let skip_root_env = env::var("SKIP_ROOT_ENV").is_ok();
        if skip_root_env {
            dotenvy::dotenv().ok();
        } else if dotenvy::from_path("../../.env").is_err() {
            dotenvy::dotenv().ok();
        }

        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Legacy knob shared with the other platform services
        let session_ttl_default = env::var("SESSION_DURATION_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        let otel_endpoint_default = env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_OTEL_ENDPOINT.to_string());

        // config/*.toml + ENV overrides (prefix: APP__)
        let settings = config::Config::builder()
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("session_ttl_secs", session_ttl_default)?
            .set_default("sweep_interval_secs", DEFAULT_SWEEP_INTERVAL_SECS)?
            .set_default("event_channel_capacity", DEFAULT_EVENT_CHANNEL_CAPACITY as u64)?
            .set_default("log_format", "pretty")?
            .set_default("otel_enabled", false)?
            .set_default("otel_endpoint", otel_endpoint_default)?
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.apply_fallbacks();
        Ok(config)
    }

    fn apply_fallbacks(&mut self) {
        if self.session_ttl_secs == 0 {
            self.session_ttl_secs = DEFAULT_SESSION_TTL_SECS;
        }
        if self.sweep_interval_secs == 0 {
            self.sweep_interval_secs = DEFAULT_SWEEP_INTERVAL_SECS;
        }
        if self.event_channel_capacity == 0 {
            self.event_channel_capacity = DEFAULT_EVENT_CHANNEL_CAPACITY;
        }
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl_secs.min(i64::MAX as u64) as i64)
    }

    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }
}
