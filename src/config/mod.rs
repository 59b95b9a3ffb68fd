use crate::constants::{endpoints, env_vars, ftc_search};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_tba_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Read key for TheBlueAlliance API. Only required by FRC commands.
    #[serde(default)]
    pub tba_api_key: String,
    /// Base URL of the TBA v3 API.
    #[serde(default = "default_tba_api_domain")]
    pub tba_api_domain: String,
    /// Base URL of the Statbotics v3 API.
    #[serde(default = "default_statbotics_api_domain")]
    pub statbotics_api_domain: String,
    /// Full URL of the FTCScout GraphQL endpoint.
    #[serde(default = "default_ftcscout_api_url")]
    pub ftcscout_api_url: String,
    /// FTC season searched by `ftc-search`.
    #[serde(default = "default_ftc_season")]
    pub ftc_season: i32,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_tba_api_domain() -> String {
    endpoints::TBA_API_DOMAIN.to_string()
}

fn default_statbotics_api_domain() -> String {
    endpoints::STATBOTICS_API_DOMAIN.to_string()
}

fn default_ftcscout_api_url() -> String {
    endpoints::FTCSCOUT_API_URL.to_string()
}

fn default_ftc_season() -> i32 {
    ftc_search::DEFAULT_SEASON
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tba_api_key: String::new(),
            tba_api_domain: default_tba_api_domain(),
            statbotics_api_domain: default_statbotics_api_domain(),
            ftcscout_api_url: default_ftcscout_api_url(),
            ftc_season: default_ftc_season(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for a TBA read key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `ROBOSTATS_TBA_API_KEY` - Override TBA read key
    /// - `ROBOSTATS_LOG_FILE` - Override log file path
    /// - `ROBOSTATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::TBA_API_KEY).is_ok() {
            Config::default()
        } else {
            let config = Config {
                tba_api_key: prompt_for_tba_api_key().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing config file yields the defaults
    /// instead of prompting. Used by commands that never call TBA.
    pub async fn load_without_prompt() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `ROBOSTATS_*` environment overrides on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(env_vars::TBA_API_KEY) {
            self.tba_api_key = key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the TBA read key, or `MissingApiKey` when none is configured.
    pub fn tba_api_key(&self) -> Result<&str, AppError> {
        let key = self.tba_api_key.trim();
        if key.is_empty() {
            Err(AppError::MissingApiKey)
        } else {
            Ok(key)
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The TBA key is masked; only its last four characters are shown.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("TBA API Key:");
            println!("{}", mask_key(&config.tba_api_key));
            println!("────────────────────────────────────");
            println!("API Endpoints:");
            println!("TBA:        {}", config.tba_api_domain);
            println!("Statbotics: {}", config.statbotics_api_domain);
            println!("FTCScout:   {}", config.ftcscout_api_url);
            println!("────────────────────────────────────");
            println!("FTC Season:");
            println!("{}", config.ftc_season);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", crate::constants::DEFAULT_LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the endpoint URLs so URL builders can append paths.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            tba_api_key: self.tba_api_key.trim().to_string(),
            tba_api_domain: self.tba_api_domain.trim_end_matches('/').to_string(),
            statbotics_api_domain: self.statbotics_api_domain.trim_end_matches('/').to_string(),
            ftcscout_api_url: self.ftcscout_api_url.clone(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.trim().chars().collect();
    match chars.len() {
        0 => "(not set)".to_string(),
        n if n <= 4 => "*".repeat(n),
        n => {
            let tail: String = chars[n - 4..].iter().collect();
            format!("{}{tail}", "*".repeat(n - 4))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
tba_api_key = "abc123"
log_file_path = "/custom/log/path"
ftc_season = 2025
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.tba_api_key, "abc123");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.ftc_season, 2025);
        // Unset fields fall back to defaults
        assert_eq!(config.tba_api_domain, endpoints::TBA_API_DOMAIN);
        assert_eq!(config.statbotics_api_domain, endpoints::STATBOTICS_API_DOMAIN);
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            tba_api_key: "  secret-key ".to_string(),
            tba_api_domain: "https://tba.example.com/api/v3/".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.tba_api_key, "secret-key");
        assert_eq!(loaded.tba_api_domain, "https://tba.example.com/api/v3");
        assert_eq!(loaded.log_file_path, original.log_file_path);
        assert_eq!(loaded.ftc_season, original.ftc_season);
    }

    #[tokio::test]
    async fn test_config_save_without_log_path_omits_field() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default()
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("log_file_path"), "Content: {content}");
        assert!(content.contains("statbotics_api_domain"), "Content: {content}");
    }

    #[test]
    fn test_tba_api_key_required() {
        let config = Config::default();
        assert!(matches!(config.tba_api_key(), Err(AppError::MissingApiKey)));

        let config = Config {
            tba_api_key: "  key  ".to_string(),
            ..Config::default()
        };
        assert_eq!(config.tba_api_key().unwrap(), "key");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::TBA_API_KEY, "from-env");
            std::env::set_var(env_vars::LOG_FILE, "/tmp/robostats-test.log");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::TBA_API_KEY);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }

        assert_eq!(config.tba_api_key, "from-env");
        assert_eq!(
            config.log_file_path,
            Some("/tmp/robostats-test.log".to_string())
        );
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env_is_ignored() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }
        let mut config = Config::default();
        config.apply_env_overrides();
        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key("abcdefgh"), "****efgh");
    }
}
