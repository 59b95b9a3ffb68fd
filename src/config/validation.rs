use super::Config;
use crate::error::AppError;
use std::path::Path;

fn validate_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must start with http:// or https:// (got '{url}')"
        )));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every API URL must be non-empty and carry an http(s) scheme
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// The TBA key is not checked here; FTC commands work without it.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("TBA API domain", &config.tba_api_domain)?;
    validate_url("Statbotics API domain", &config.statbotics_api_domain)?;
    validate_url("FTCScout API URL", &config.ftcscout_api_url)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = Config {
            statbotics_api_domain: "api.statbotics.io/v3".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Statbotics API domain"));
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("a").join("b");
        let config = Config {
            log_file_path: Some(log_dir.join("robostats.log").to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
        assert!(log_dir.exists());
    }
}
