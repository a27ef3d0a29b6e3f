//! Configuration for the Items API

use axum_helpers::RateLimitConfig;
use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Path prefix for the item routes (health endpoints live outside it)
    pub api_prefix: String,
    /// Allowed CORS origins; None means permissive (local development)
    pub cors_allowed_origins: Option<Vec<String>>,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mut api_prefix = env_or_default("API_PREFIX", "/api");
        if !api_prefix.starts_with('/') {
            api_prefix.insert(0, '/');
        }

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let max_requests = env_or_default("RATE_LIMIT_MAX_REQUESTS", "100")
            .parse()
            .unwrap_or(100);
        let window_secs = env_or_default("RATE_LIMIT_WINDOW_SECS", "900")
            .parse()
            .unwrap_or(900);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            api_prefix,
            cors_allowed_origins,
            rate_limit: RateLimitConfig {
                max_requests,
                window: Duration::from_secs(window_secs),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("API_PREFIX", None::<&str>),
                ("CORS_ALLOWED_ORIGIN", None),
                ("RATE_LIMIT_MAX_REQUESTS", None),
                ("RATE_LIMIT_WINDOW_SECS", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.api_prefix, "/api");
                assert!(config.cors_allowed_origins.is_none());
                assert_eq!(config.rate_limit.max_requests, 100);
                assert_eq!(config.rate_limit.window, Duration::from_secs(900));
            },
        );
    }

    #[test]
    fn test_api_prefix_gains_leading_slash() {
        temp_env::with_var("API_PREFIX", Some("v1"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_prefix, "/v1");
        });
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:5173 , https://example.com"),
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    Some(vec![
                        "http://localhost:5173".to_string(),
                        "https://example.com".to_string()
                    ])
                );
            },
        );
    }

    #[test]
    fn test_blank_cors_origins_treated_as_unset() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            let config = Config::from_env().unwrap();
            assert!(config.cors_allowed_origins.is_none());
        });
    }
}
