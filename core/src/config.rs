//! Environment-driven configuration for the HTTP transport.

use std::time::Duration;

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const ENV_BASE_URL: &str = "TODO_API_URL";
const ENV_TIMEOUT_MS: &str = "TODO_API_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {key}='{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Transport settings resolved from the environment.
///
/// `TODO_API_URL` overrides the base URL; `TODO_API_TIMEOUT_MS`, when set,
/// bounds each request. Unset variables fall back to defaults, so a bare
/// environment always yields a usable config.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = optional_trimmed(lookup(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match parse_optional_u64(ENV_TIMEOUT_MS, lookup(ENV_TIMEOUT_MS))? {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_MS,
                    value: "0".to_string(),
                    reason: "timeout must be positive".to_string(),
                });
            }
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}

fn optional_trimmed(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_optional_u64(key: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    match optional_trimmed(value) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key,
                value: raw,
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from_pairs(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from_pairs(&[]).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn base_url_override_is_applied() {
        let config = config_from_pairs(&[("TODO_API_URL", "http://api.example.com:8080")]).unwrap();
        assert_eq!(config.base_url, "http://api.example.com:8080");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let config = config_from_pairs(&[("TODO_API_URL", "   ")]).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn timeout_is_parsed_as_milliseconds() {
        let config = config_from_pairs(&[("TODO_API_TIMEOUT_MS", "1500")]).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = config_from_pairs(&[("TODO_API_TIMEOUT_MS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "TODO_API_TIMEOUT_MS",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let err = config_from_pairs(&[("TODO_API_TIMEOUT_MS", "fast")]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("TODO_API_TIMEOUT_MS"));
        assert!(message.contains("fast"));
    }
}
