//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the JSON documents come from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// `http(s)://` base URL or a local directory
    #[serde(default = "default_source")]
    pub source: String,

    /// Path below an HTTP base URL holding the documents
    #[serde(default = "default_data_path")]
    pub path: String,

    /// Optional request timeout for HTTP sources
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,

    /// Directory the server exposes at `/data`, if any
    #[serde(default)]
    pub serve_dir: Option<String>,
}

fn default_source() -> String {
    "./data".to_string()
}

fn default_data_path() -> String {
    "/data".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: default_data_path(),
            request_timeout_ms: None,
            serve_dir: None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("course-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load the explicit path if given, else the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(source) = var("DASHBOARD_DATA_SOURCE") {
            self.data.source = source;
        }
        if let Some(path) = var("DASHBOARD_DATA_PATH") {
            self.data.path = path;
        }
        if let Some(dir) = var("DASHBOARD_DATA_DIR") {
            self.data.serve_dir = Some(dir);
        }

        // API overrides
        if let Some(host) = var("DASHBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("DASHBOARD_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = var("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Course Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_DATA_SOURCE
# - DASHBOARD_DATA_PATH
# - DASHBOARD_DATA_DIR
# - DASHBOARD_API_HOST
# - DASHBOARD_API_PORT
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[data]
# Where courses.json and students.json are read from:
# an http(s) base URL or a local directory
source = "./data"

# Path below an HTTP base URL holding the documents
path = "/data"

# Request timeout for HTTP sources (ms); unset means no timeout
# request_timeout_ms = 10000

# Directory served at /data by the dashboard server
# serve_dir = "./data"

[api]
# Server host
host = "0.0.0.0"

# Server port
port = 8083

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.data.source, "./data");
        assert_eq!(config.data.path, "/data");
        assert_eq!(config.data.request_timeout_ms, None);
        assert_eq!(config.api.port, 8083);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [data]
            source = "https://cdn.example.com"
            request_timeout_ms = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.data.source, "https://cdn.example.com");
        assert_eq!(config.data.path, "/data");
        assert_eq!(config.data.request_timeout_ms, Some(5000));
        assert_eq!(config.api.addr(), "0.0.0.0:8083");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DASHBOARD_DATA_SOURCE", "http://localhost:9000"),
            ("DASHBOARD_API_PORT", "9999"),
            ("DASHBOARD_LOG_FORMAT", "json"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.source, "http://localhost:9000");
        assert_eq!(config.api.port, 9999);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "DASHBOARD_API_PORT").then(|| "nope".to_string()));

        assert_eq!(config.api.port, 8083);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[api\nport = ").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }
}
