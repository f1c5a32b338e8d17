use std::{env, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got '{0}'")]
    InvalidPort(String),
    #[error("CALC_API_BASE must be an http(s) URL, got '{0}'")]
    InvalidApiBase(String),
    #[error("CALC_API_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base = match lookup("CALC_API_BASE") {
            Some(raw) => {
                let trimmed = raw.trim();
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ConfigError::InvalidApiBase(raw));
                }
                trimmed.trim_end_matches('/').to_string()
            }
            None => DEFAULT_API_BASE.to_string(),
        };

        let request_timeout = match lookup("CALC_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            port,
            api_base,
            request_timeout,
        })
    }
}
