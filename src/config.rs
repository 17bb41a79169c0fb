//! Configuration module for Agora.

use serde::Deserialize;
use std::path::Path;

use crate::{AgoraError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin, no credentials.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/agora.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Web server settings.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(AgoraError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AgoraError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FRONTEND_ORIGIN`: Override the allowed CORS origin. The literal
    ///   `*` selects the allow-any mode (no credentials).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(origin) = std::env::var("FRONTEND_ORIGIN") {
            if origin.is_empty() || origin == "*" {
                self.web.cors_origins.clear();
            } else {
                self.web.cors_origins = vec![origin];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8080);
        assert!(config.web.cors_origins.is_empty());

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/agora.log");
    }

    #[test]
    fn test_parse_full() {
        let toml = r#"
            [web]
            host = "127.0.0.1"
            port = 3000
            cors_origins = ["https://agents.example.org"]

            [logging]
            level = "debug"
            file = "logs/dev.log"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 3000);
        assert_eq!(
            config.web.cors_origins,
            vec!["https://agents.example.org".to_string()]
        );
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "logs/dev.log");
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let toml = r#"
            [web]
            port = 9090
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 9090);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty_string() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.web.port, 8080);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::parse("not [valid");
        assert!(matches!(result, Err(AgoraError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[web]\nport = 4000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.web.port, 4000);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(matches!(result, Err(AgoraError::Io(_))));
    }

    // Single test for the env override so parallel tests never race on the
    // process-wide FRONTEND_ORIGIN variable.
    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        std::env::set_var("FRONTEND_ORIGIN", "https://pages.example.net");
        config.apply_env_overrides();
        assert_eq!(
            config.web.cors_origins,
            vec!["https://pages.example.net".to_string()]
        );

        // The wildcard clears any configured origins back to allow-any.
        let mut config = Config::parse("[web]\ncors_origins = [\"https://a.example\"]").unwrap();
        std::env::set_var("FRONTEND_ORIGIN", "*");
        config.apply_env_overrides();
        assert!(config.web.cors_origins.is_empty());

        std::env::remove_var("FRONTEND_ORIGIN");
    }
}
