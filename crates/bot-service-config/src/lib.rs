//! Runtime configuration for the bot service.
//!
//! Everything is read from environment variables once at startup:
//!
//! | Variable                 | Default                       |
//! |--------------------------|-------------------------------|
//! | `SERVICE_NAME`           | `ChatAppointment Bot Service` |
//! | `SERVICE_VERSION`        | `1.0.0`                       |
//! | `SERVICE_ID`             | `bot-service`                 |
//! | `HOST`                   | `0.0.0.0`                     |
//! | `PORT`                   | `8000`                        |
//! | `CORS_ALLOW_CREDENTIALS` | `true`                        |
//!
//! # Example
//!
//! ```rust
//! use bot_service_config::ServiceConfig;
//!
//! let config = ServiceConfig::from_lookup(|key| match key {
//!     "PORT" => Some("9000".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.bind_addr(), "0.0.0.0:9000");
//! assert_eq!(config.service_id, "bot-service");
//! ```

use std::num::ParseIntError;

pub const DEFAULT_SERVICE_NAME: &str = "ChatAppointment Bot Service";
pub const DEFAULT_SERVICE_VERSION: &str = "1.0.0";
pub const DEFAULT_SERVICE_ID: &str = "bot-service";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ALLOW_CREDENTIALS: bool = true;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid boolean for {var}: {value:?}")]
    InvalidBool { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Structs
// ─────────────────────────────────────────────────────────────────────────────

/// Cross-origin policy settings.
///
/// Origins, methods and headers are always unrestricted. `allow_credentials`
/// adds `Access-Control-Allow-Credentials: true` on top of the wildcard origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_credentials: DEFAULT_CORS_ALLOW_CREDENTIALS,
        }
    }
}

/// Service identity and listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Human-readable name reported by `GET /`.
    pub service_name: String,
    pub service_version: String,
    /// Short identifier reported by `GET /health`.
    pub service_id: String,
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.into(),
            service_version: DEFAULT_SERVICE_VERSION.into(),
            service_id: DEFAULT_SERVICE_ID.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Unset or empty values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => defaults.port,
        };

        let allow_credentials = match get("CORS_ALLOW_CREDENTIALS") {
            Some(raw) => parse_bool("CORS_ALLOW_CREDENTIALS", &raw)?,
            None => defaults.cors.allow_credentials,
        };

        Ok(Self {
            service_name: get("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: get("SERVICE_VERSION").unwrap_or(defaults.service_version),
            service_id: get("SERVICE_ID").unwrap_or(defaults.service_id),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            cors: CorsConfig { allow_credentials },
        })
    }

    /// Socket address string for the listener, e.g. `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}
