//! Process configuration, read from the environment at startup.

use std::net::SocketAddr;

use stockroom_observability::LogFormat;
use thiserror::Error;

pub const BIND_VAR: &str = "STOCKROOM_BIND";
pub const CURRENCY_VAR: &str = "STOCKROOM_CURRENCY";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_CURRENCY: &str = "PLN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not a socket address")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var}: currency label cannot be empty")]
    EmptyCurrency { var: &'static str },

    #[error("{var}: {reason}")]
    InvalidLogFormat { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    /// Label printed next to prices and the total value (display only).
    pub currency: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            currency: DEFAULT_CURRENCY.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.trim().parse().map_err(|_| ConfigError::InvalidBind {
            var: BIND_VAR,
            value: bind_raw.clone(),
        })?;

        let currency = match lookup(CURRENCY_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::EmptyCurrency { var: CURRENCY_VAR });
            }
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_CURRENCY.to_string(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                reason,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind,
            currency,
            log_format,
        })
    }
}
