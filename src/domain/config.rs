//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the chat service, the recommendation backend and the schedule defaults.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";
pub const DEFAULT_TOKEN_ENV: &str = "JUKEBOX_BOT_TOKEN";
pub const WEBHOOK_URL_ENV: &str = "JUKEBOX_WEBHOOK_URL";

/// Longest accepted schedule interval, from the config file or `!setinterval`.
pub const MAX_INTERVAL: Duration = Duration::from_secs(365 * 24 * 3600);

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub system: SystemConfig,
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub homeserver: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Where the recommendation backend lives and how long a single call may take.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_env: Option<String>, // e.g. "JUKEBOX_BACKEND_TOKEN"
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            token: None,
            token_env: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}
fn default_timeout() -> u64 {
    10
}

/// Initial values of the periodic recommendation. Both can be changed at runtime by chat commands.
#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            interval_minutes: default_interval_minutes(),
        }
    }
}

fn default_keyword() -> String {
    "おすすめソング".to_string()
}
fn default_interval_minutes() -> u64 {
    1
}

impl ScheduleConfig {
    /// `None` when `interval_minutes` does not fit in a `Duration` of seconds.
    pub fn checked_interval(&self) -> Option<Duration> {
        self.interval_minutes
            .checked_mul(60)
            .map(Duration::from_secs)
    }

    /// The validated interval. Values outside `1..=MAX_INTERVAL` are rejected by `AppConfig::load`.
    pub fn interval(&self) -> Duration {
        self.checked_interval()
            .unwrap_or(MAX_INTERVAL)
            .min(MAX_INTERVAL)
    }
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl AppConfig {
    /// Reads and validates the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.schedule.interval_minutes == 0 {
            bail!("schedule.interval_minutes must be at least 1");
        }
        match self.schedule.checked_interval() {
            Some(interval) if interval <= MAX_INTERVAL => {}
            _ => bail!(
                "schedule.interval_minutes must be at most {}",
                MAX_INTERVAL.as_secs() / 60
            ),
        }
        if self.backend.timeout_secs == 0 {
            bail!("backend.timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// The bot login secret. Missing token is fatal at startup.
    pub fn bot_token(&self) -> Result<String> {
        let matrix = &self.services.matrix;
        if let Some(token) = matrix.token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(token.clone());
        }
        match std::env::var(&matrix.token_env) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => bail!(
                "No bot token provided - set services.matrix.token or the {} environment variable",
                matrix.token_env
            ),
        }
    }

    /// Optional bearer token for the recommendation backend.
    pub fn backend_token(&self) -> Option<String> {
        self.backend.token.clone().or_else(|| {
            self.backend
                .token_env
                .as_ref()
                .and_then(|var| std::env::var(var).ok())
        })
    }

    pub fn webhook_url(&self) -> Option<String> {
        self.webhook_url
            .clone()
            .or_else(|| std::env::var(WEBHOOK_URL_ENV).ok())
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
services:
  matrix:
    username: jukebox
    homeserver: https://matrix.example.org
"#;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let file = write_config(MINIMAL);
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.backend.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.schedule.keyword, "おすすめソング");
        assert_eq!(config.schedule.interval(), Duration::from_secs(60));
        assert_eq!(config.services.matrix.token_env, DEFAULT_TOKEN_ENV);
        assert_eq!(config.system.data_dir, "data");
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
services:
  matrix:
    username: jukebox
    homeserver: https://matrix.example.org
    token: secret
backend:
  base_url: http://backend:8080
  timeout_secs: 3
schedule:
  keyword: J-Pop
  interval_minutes: 30
webhook_url: https://hooks.example.org/abc
"#,
        );
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.backend.base_url, "http://backend:8080");
        assert_eq!(config.backend.timeout_secs, 3);
        assert_eq!(config.schedule.keyword, "J-Pop");
        assert_eq!(config.schedule.interval(), Duration::from_secs(30 * 60));
        assert_eq!(config.bot_token().unwrap(), "secret");
        assert_eq!(
            config.webhook_url().as_deref(),
            Some("https://hooks.example.org/abc")
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = write_config(&format!("{MINIMAL}schedule:\n  interval_minutes: 0\n"));
        assert!(AppConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_oversized_interval_rejected() {
        let max_minutes = MAX_INTERVAL.as_secs() / 60;

        let at_limit = write_config(&format!(
            "{MINIMAL}schedule:\n  interval_minutes: {max_minutes}\n"
        ));
        let config = AppConfig::load(at_limit.path()).unwrap();
        assert_eq!(config.schedule.interval(), MAX_INTERVAL);

        for minutes in [max_minutes + 1, u64::MAX / 120, u64::MAX / 30, u64::MAX] {
            let file = write_config(&format!(
                "{MINIMAL}schedule:\n  interval_minutes: {minutes}\n"
            ));
            let err = AppConfig::load(file.path()).unwrap_err();
            assert!(err.to_string().contains("at most"), "{minutes}: {err}");
        }
    }

    #[test]
    fn test_interval_never_overflows() {
        let schedule = ScheduleConfig {
            keyword: default_keyword(),
            interval_minutes: u64::MAX / 30,
        };
        assert_eq!(schedule.checked_interval(), None);
        assert_eq!(schedule.interval(), MAX_INTERVAL);
    }

    #[test]
    fn test_missing_token_is_error() {
        let file = write_config(&format!(
            "{MINIMAL}    token_env: JUKEBOX_TEST_TOKEN_THAT_IS_NEVER_SET\n"
        ));
        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.bot_token().is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AppConfig::load("/nonexistent/jukebox/config.yaml").is_err());
    }
}
