//! Configuration module for boardview.

use serde::Deserialize;
use std::path::Path;

use crate::table::DEFAULT_PAGE_WINDOW;
use crate::{BoardviewError, Result};

/// Web API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number for the API.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8080
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
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
    "logs/boardview.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Listing configuration: page sizes of the four table views.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    /// Posts per page on a public board.
    #[serde(default = "default_narrow_page_size")]
    pub board_posts_page_size: usize,
    /// Posts per page in the admin post list.
    #[serde(default = "default_narrow_page_size")]
    pub admin_posts_page_size: usize,
    /// Users per page in the admin user list.
    #[serde(default = "default_wide_page_size")]
    pub users_page_size: usize,
    /// Boards per page in the admin board list.
    #[serde(default = "default_wide_page_size")]
    pub admin_boards_page_size: usize,
    /// Maximum number of page links shown around the current page.
    #[serde(default = "default_page_window")]
    pub page_window: usize,
}

fn default_narrow_page_size() -> usize {
    20
}

fn default_wide_page_size() -> usize {
    30
}

fn default_page_window() -> usize {
    DEFAULT_PAGE_WINDOW
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            board_posts_page_size: default_narrow_page_size(),
            admin_posts_page_size: default_narrow_page_size(),
            users_page_size: default_wide_page_size(),
            admin_boards_page_size: default_wide_page_size(),
            page_window: default_page_window(),
        }
    }
}

/// Seed data configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Path to a JSON file with initial boards, posts and users.
    #[serde(default)]
    pub path: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web API configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Listing configuration.
    #[serde(default)]
    pub listing: ListingConfig,
    /// Seed data configuration.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardviewError::Io)?;
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
        toml::from_str(s).map_err(|e| BoardviewError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BOARDVIEW_SEED`: Override the seed file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(seed) = std::env::var("BOARDVIEW_SEED") {
            if !seed.is_empty() {
                self.seed.path = Some(seed);
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if any page size is zero or the page window is zero.
    pub fn validate(&self) -> Result<()> {
        let listing = &self.listing;
        let sizes = [
            ("board_posts_page_size", listing.board_posts_page_size),
            ("admin_posts_page_size", listing.admin_posts_page_size),
            ("users_page_size", listing.users_page_size),
            ("admin_boards_page_size", listing.admin_boards_page_size),
            ("page_window", listing.page_window),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(BoardviewError::Config(format!(
                    "listing.{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8080);
        assert!(config.web.cors_origins.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, "logs/boardview.log");
        assert_eq!(config.listing.board_posts_page_size, 20);
        assert_eq!(config.listing.admin_posts_page_size, 20);
        assert_eq!(config.listing.users_page_size, 30);
        assert_eq!(config.listing.admin_boards_page_size, 30);
        assert_eq!(config.listing.page_window, 5);
        assert!(config.seed.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[web]
host = "127.0.0.1"
port = 3000
cors_origins = ["http://localhost:3000"]

[logging]
level = "debug"
file = "custom/logs/app.log"

[listing]
board_posts_page_size = 10
admin_posts_page_size = 15
users_page_size = 25
admin_boards_page_size = 50
page_window = 7

[seed]
path = "data/seed.json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.web.host, "127.0.0.1");
        assert_eq!(config.web.port, 3000);
        assert_eq!(config.web.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "custom/logs/app.log");
        assert_eq!(config.listing.board_posts_page_size, 10);
        assert_eq!(config.listing.admin_posts_page_size, 15);
        assert_eq!(config.listing.users_page_size, 25);
        assert_eq!(config.listing.admin_boards_page_size, 50);
        assert_eq!(config.listing.page_window, 7);
        assert_eq!(config.seed.path.as_deref(), Some("data/seed.json"));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[listing]
users_page_size = 50
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.listing.users_page_size, 50);
        assert_eq!(config.listing.board_posts_page_size, 20);
        assert_eq!(config.web.port, 8080);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.listing.admin_boards_page_size, 30);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("[listing]\nusers_page_size = \"many\"");
        assert!(matches!(result, Err(BoardviewError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.listing.users_page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("users_page_size"));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = Config::default();
        config.listing.page_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[web]\nport = 9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.web.port, 9000);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/config.toml");
        assert!(matches!(result, Err(BoardviewError::Io(_))));
    }
}
