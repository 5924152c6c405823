// Runtime configuration read from the environment.
//
// `.env` is loaded by the binary before `AppConfig::from_env` runs. Every variable has a default,
// an invalid value fails startup with the variable name.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_dir: PathBuf,
    pub source_time_zone: Tz,
    pub display_time_zone: Tz,
    pub report_concurrency: usize,
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            catalog_dir: PathBuf::from("data"),
            source_time_zone: chrono_tz::Europe::Berlin,
            display_time_zone: chrono_tz::Europe::Berlin,
            report_concurrency: 1,
            cors_origin: None,
        }
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse("PORT", port)?;
        }
        if let Some(dir) = lookup("CATALOG_DIR") {
            config.catalog_dir = PathBuf::from(dir);
        }
        if let Some(zone) = lookup("SOURCE_TIME_ZONE") {
            config.source_time_zone = parse("SOURCE_TIME_ZONE", zone)?;
        }
        if let Some(zone) = lookup("DISPLAY_TIME_ZONE") {
            config.display_time_zone = parse("DISPLAY_TIME_ZONE", zone)?;
        }
        if let Some(concurrency) = lookup("REPORT_CONCURRENCY") {
            let parsed: usize = parse("REPORT_CONCURRENCY", concurrency.clone())?;
            if parsed == 0 {
                return Err(ConfigError::Invalid {
                    key: "REPORT_CONCURRENCY",
                    value: concurrency,
                });
            }
            config.report_concurrency = parsed;
        }
        config.cors_origin = lookup("CORS_ORIGIN").filter(|origin| !origin.is_empty());
        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = format!("{}:{}", self.host, self.port);
        value
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "HOST", value })
    }
}
