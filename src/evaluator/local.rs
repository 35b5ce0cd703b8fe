use super::kind::ConditionKind;
use super::Evaluator;
use crate::config::Condition;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_PASSWD_PATH: &str = "/etc/passwd";

/// Evaluates conditions against the local machine.
///
/// Every probe is a blocking call; the scoring engine runs them on the
/// blocking thread pool.
#[derive(Debug, Clone)]
pub struct LocalEvaluator {
    shell: String,
}

impl Default for LocalEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalEvaluator {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    /// Use a different shell for `Command` and `CommandContains` (default: `sh`)
    pub fn with_shell(mut self, shell: &str) -> Self {
        self.shell = shell.to_string();
        self
    }

    fn probe(&self, kind: ConditionKind, condition: &Condition) -> Result<bool> {
        match kind {
            ConditionKind::PathExists => Ok(Path::new(&condition.arg1).exists()),
            ConditionKind::FileContains => {
                Ok(read_file(&condition.arg1)?.contains(condition.arg2.as_str()))
            }
            ConditionKind::FileEquals => {
                let content = read_file(&condition.arg1)?;
                Ok(content.trim_end_matches('\n') == condition.arg2.trim_end_matches('\n'))
            }
            ConditionKind::DirContains => dir_contains(Path::new(&condition.arg1), &condition.arg2),
            ConditionKind::UserExists => {
                let passwd = if condition.arg3.is_empty() {
                    DEFAULT_PASSWD_PATH
                } else {
                    condition.arg3.as_str()
                };
                user_exists(Path::new(passwd), &condition.arg1)
            }
            ConditionKind::Command => {
                let status = Command::new(&self.shell)
                    .arg("-c")
                    .arg(&condition.arg1)
                    .output()
                    .with_context(|| format!("Failed to run command: {}", condition.arg1))?
                    .status;
                Ok(status.success())
            }
            ConditionKind::CommandContains => {
                let output = Command::new(&self.shell)
                    .arg("-c")
                    .arg(&condition.arg1)
                    .output()
                    .with_context(|| format!("Failed to run command: {}", condition.arg1))?;
                Ok(String::from_utf8_lossy(&output.stdout).contains(condition.arg2.as_str()))
            }
        }
    }
}

impl Evaluator for LocalEvaluator {
    fn evaluate(&self, condition: &Condition) -> bool {
        let (kind, negated) = match ConditionKind::parse(&condition.kind) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "skipping condition");
                return false;
            }
        };

        match self.probe(kind, condition) {
            Ok(result) => result != negated,
            Err(e) => {
                tracing::debug!(kind = kind.name(), error = %e, "condition could not be evaluated");
                false
            }
        }
    }
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn dir_contains(dir: &Path, needle: &str) -> Result<bool> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path: PathBuf = entry?.path();
        if !path.is_file() {
            continue;
        }
        // Binary or unreadable files simply don't match
        if let Ok(content) = fs::read_to_string(&path) {
            if content.contains(needle) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn user_exists(passwd: &Path, user: &str) -> Result<bool> {
    let content = fs::read_to_string(passwd)
        .with_context(|| format!("Failed to read {}", passwd.display()))?;
    Ok(content
        .lines()
        .any(|line| line.split(':').next() == Some(user)))
}
