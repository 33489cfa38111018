//! Application configuration structs
//!
//! Loads configuration from environment variables. The struct is built once
//! at process start and injected everywhere; there is no process-wide
//! mutable configuration.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub push: PushConfig,
    pub moderation: ModerationConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// Push gateway configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PushConfig {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_channel_id")]
    pub channel_id: String,
    #[serde(default = "default_push_timeout")]
    pub timeout_secs: u64,
}

/// Moderation defaults and admin identity allowlist
#[derive(Debug, Clone, Deserialize)]
pub struct ModerationConfig {
    /// Emails granted admin authority when the stored role is unreadable.
    #[serde(default)]
    pub admin_emails: Vec<String>,
    #[serde(default = "default_mute_minutes")]
    pub default_mute_minutes: i64,
    #[serde(default = "default_ban_minutes")]
    pub default_ban_minutes: i64,
    #[serde(default = "default_clear_limit")]
    pub default_clear_limit: usize,
    /// Page size for bulk structural deletes; bounded by the store's
    /// per-write-batch limit.
    #[serde(default = "default_delete_batch")]
    pub delete_batch_size: usize,
}

impl ModerationConfig {
    #[must_use]
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|e| e == email)
    }
}

// Default value functions
fn default_app_name() -> String {
    "herald".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_channel_id() -> String {
    "chat_channel".to_string()
}

fn default_push_timeout() -> u64 {
    10
}

fn default_mute_minutes() -> i64 {
    30
}

fn default_ban_minutes() -> i64 {
    1440 // 24 hours
}

fn default_clear_limit() -> usize {
    50
}

fn default_delete_batch() -> usize {
    300
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SERVER_PORT"))?,
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                token_expiry: env::var("JWT_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_token_expiry),
            },
            push: PushConfig {
                endpoint: env::var("PUSH_ENDPOINT")
                    .map_err(|_| ConfigError::MissingVar("PUSH_ENDPOINT"))?,
                api_key: env::var("PUSH_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("PUSH_API_KEY"))?,
                channel_id: env::var("PUSH_CHANNEL_ID").unwrap_or_else(|_| default_channel_id()),
                timeout_secs: env::var("PUSH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_push_timeout),
            },
            moderation: ModerationConfig {
                admin_emails: env::var("ADMIN_EMAILS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
                default_mute_minutes: env::var("DEFAULT_MUTE_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_mute_minutes),
                default_ban_minutes: env::var("DEFAULT_BAN_MINUTES")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_ban_minutes),
                default_clear_limit: env::var("DEFAULT_CLEAR_LIMIT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_clear_limit),
                delete_batch_size: env::var("DELETE_BATCH_SIZE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_delete_batch),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_flags() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_admin_email_allowlist() {
        let config = ModerationConfig {
            admin_emails: vec!["root@example.com".to_string()],
            default_mute_minutes: default_mute_minutes(),
            default_ban_minutes: default_ban_minutes(),
            default_clear_limit: default_clear_limit(),
            delete_batch_size: default_delete_batch(),
        };
        assert!(config.is_admin_email("root@example.com"));
        assert!(!config.is_admin_email("user@example.com"));
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "herald");
        assert_eq!(default_channel_id(), "chat_channel");
        assert_eq!(default_mute_minutes(), 30);
        assert_eq!(default_ban_minutes(), 1440);
        assert_eq!(default_clear_limit(), 50);
        assert_eq!(default_delete_batch(), 300);
    }
}
