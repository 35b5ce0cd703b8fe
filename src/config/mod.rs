mod schema;
mod validation;

pub use schema::{Check, Condition, Config};
pub use validation::{config_status, validate_checks, ConfigStatus};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/score-agent/)
///
/// Falls back to the working directory when no home directory can be found,
/// which happens for some service accounts.
pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("score-agent")
}

/// Get the default config file path (~/.config/score-agent/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/score-agent/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Create ~/.config/score-agent/config.yaml",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_config_fails() {
        let temp_path = env::temp_dir().join("score_agent_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_path = env::temp_dir().join("score_agent_test_config.yaml");
        fs::write(
            &temp_path,
            "checks:\n  - message: \"Root login disabled\"\n    pass:\n      - type: FileContains\n        arg1: /etc/ssh/sshd_config\n        arg2: \"PermitRootLogin no\"\n",
        )
        .unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.checks.len(), 1);
        assert_eq!(config.checks[0].message, "Root login disabled");

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp_path = env::temp_dir().join("score_agent_test_invalid_config.yaml");
        fs::write(&temp_path, "checks: [unterminated").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));

        let _ = fs::remove_file(&temp_path);
    }
}
