//! Configuration handling for the service.
//!
//! Everything has a development default so the binary starts without any
//! environment set. `Config::from_env` validates the values it parses and
//! reports the first offending variable.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::analyzer::AnalysisPolicy;

/// Environment variable names. Public so tests and deployment tooling can
/// refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_ANALYSIS_POLICY: &str = "ANALYSIS_POLICY";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Named analysis presets selectable from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyPreset {
    #[default]
    Standard,
    Quick,
}

impl PolicyPreset {
    pub fn policy(self) -> AnalysisPolicy {
        match self {
            Self::Standard => AnalysisPolicy::standard(),
            Self::Quick => AnalysisPolicy::quick(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Service runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    fetch_timeout: Duration,
    policy: PolicyPreset,
    log_format: LogFormat,
}

impl Config {
    pub fn new(
        bind_addr: impl Into<String>,
        fetch_timeout: Duration,
        policy: PolicyPreset,
        log_format: LogFormat,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            fetch_timeout,
            policy,
            log_format,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let fetch_timeout = match env::var(ENV_FETCH_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let policy = match env::var(ENV_ANALYSIS_POLICY) {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "standard" => PolicyPreset::Standard,
                "quick" => PolicyPreset::Quick,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_ANALYSIS_POLICY,
                        reason: format!("unknown policy '{other}', expected 'standard' or 'quick'"),
                    });
                }
            },
            Err(_) => PolicyPreset::default(),
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Ok(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Ok(raw) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("unknown log format '{raw}'"),
                });
            }
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            fetch_timeout,
            policy,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Upper bound on a single page fetch, connect included.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    pub fn policy(&self) -> PolicyPreset {
        self.policy
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            PolicyPreset::default(),
            LogFormat::default(),
        )
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: ENV_FETCH_TIMEOUT_SECS,
        reason: format!("'{raw}' is not a whole number of seconds"),
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: ENV_FETCH_TIMEOUT_SECS,
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
