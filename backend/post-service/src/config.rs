/// Configuration management for Post Service
///
/// Settings come from environment variables, optionally seeded from a `.env`
/// file. Every setting has a default, so an empty environment is valid.
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {key}='{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// HTTP worker count; actix picks one per core when unset
    pub workers: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or(defaults.env),
                host: lookup("POST_SERVICE_HOST").unwrap_or(defaults.host),
                port: parse_or(&lookup, "POST_SERVICE_PORT")?.unwrap_or(defaults.port),
                workers: parse_or(&lookup, "POST_SERVICE_WORKERS")?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.app.workers, None);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("APP_ENV", "production"),
            ("POST_SERVICE_HOST", "127.0.0.1"),
            ("POST_SERVICE_PORT", "9090"),
            ("POST_SERVICE_WORKERS", "2"),
        ])
        .unwrap();

        assert_eq!(config.app.env, "production");
        assert_eq!(config.app.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.app.workers, Some(2));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("POST_SERVICE_PORT", "http")]).unwrap_err();
        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "POST_SERVICE_PORT");
                assert_eq!(value, "http");
            }
        }
    }
}
