//! Configuration management for the cardapio dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Web server configuration
    #[serde(default)]
    pub webserver: WebServerConfig,

    /// Backend API configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend REST API
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the bearer token
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_backend_base_url() -> String {
    std::env::var("CARDAPIO_BACKEND_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3333".to_string())
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webserver: WebServerConfig::default(),
            backend: BackendConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CARDAPIO").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.webserver.host, "0.0.0.0");
        assert_eq!(config.webserver.port, 8080);

        assert!(config.backend.base_url.starts_with("http"));

        assert_eq!(config.session.cookie_name, "session");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_webserver_config() {
        let webserver_config = WebServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };

        assert_eq!(webserver_config.host, "127.0.0.1");
        assert_eq!(webserver_config.port, 3000);
    }

    #[test]
    fn test_backend_config() {
        let backend_config = BackendConfig {
            base_url: "https://api.example.com".to_string(),
        };

        assert_eq!(backend_config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_session_config() {
        let session_config = SessionConfig {
            cookie_name: "auth_token".to_string(),
        };

        assert_eq!(session_config.cookie_name, "auth_token");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.webserver.host, config.webserver.host);
        assert_eq!(deserialized.webserver.port, config.webserver.port);
        assert_eq!(deserialized.backend.base_url, config.backend.base_url);
        assert_eq!(deserialized.session.cookie_name, config.session.cookie_name);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "webserver": {"host": "localhost"},
            "backend": {"base_url": "http://backend:3333"}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.webserver.host, "localhost");
        assert_eq!(config.webserver.port, 8080); // Uses default
        assert_eq!(config.backend.base_url, "http://backend:3333");
        assert_eq!(config.session.cookie_name, "session"); // Uses default
        assert_eq!(config.logging.level, "info"); // Uses default
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.webserver.port, 8080);
        assert_eq!(config.session.cookie_name, "session");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_bounds_validation() {
        let config = Config::default();

        assert!(config.webserver.port > 0);
        assert!(!config.backend.base_url.is_empty());
        assert!(!config.session.cookie_name.is_empty());
        assert!(!config.logging.level.is_empty());
        assert!(!config.logging.format.is_empty());
    }
}
