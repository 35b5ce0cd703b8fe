use super::types::PriorScore;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default prior score file path (~/.config/score-agent/previous.json)
pub fn get_prior_score_path() -> PathBuf {
    crate::config::get_config_dir().join("previous.json")
}

/// Load the prior score from a JSON file
///
/// If the file doesn't exist, returns None.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_prior_score(path: &Path) -> Result<Option<PriorScore>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open prior score file at {}", path.display()))?;

    let prior: PriorScore =
        serde_json::from_reader(file).context("Failed to load prior score")?;

    if prior.version != 1 {
        anyhow::bail!("Unsupported prior score version: {}", prior.version);
    }

    Ok(Some(prior))
}

/// Save the prior score to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_prior_score(path: &Path, prior: &PriorScore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, prior).context("Failed to serialize prior score")?;

    file.commit().context("Failed to save prior score")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_file_returns_none() {
        let temp_path = env::temp_dir().join("score_agent_test_prior_missing.json");
        let _ = fs::remove_file(&temp_path);

        assert!(load_prior_score(&temp_path).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("score_agent_test_prior_roundtrip.json");
        let _ = fs::remove_file(&temp_path);

        let prior = PriorScore::new(57);
        save_prior_score(&temp_path, &prior).unwrap();

        let loaded = load_prior_score(&temp_path).unwrap().unwrap();
        assert_eq!(loaded, prior);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = env::temp_dir().join("score_agent_test_prior_nested");
        let _ = fs::remove_dir_all(&dir);
        let temp_path = dir.join("previous.json");

        save_prior_score(&temp_path, &PriorScore::new(3)).unwrap();
        assert_eq!(load_prior_score(&temp_path).unwrap().unwrap().score, 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_version_fails() {
        let temp_path = env::temp_dir().join("score_agent_test_prior_version.json");
        fs::write(
            &temp_path,
            r#"{"version": 2, "score": 10, "recorded_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let err = load_prior_score(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported prior score version"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_corrupt_file_fails() {
        let temp_path = env::temp_dir().join("score_agent_test_prior_corrupt.json");
        fs::write(&temp_path, "57").unwrap();

        assert!(load_prior_score(&temp_path).is_err());

        let _ = fs::remove_file(&temp_path);
    }
}
