use super::schema::{Check, Condition, Config};
use crate::evaluator::ConditionKind;

/// Overall health of the loaded configuration.
///
/// A bad status never stops scoring; it is reported alongside the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStatus {
    Ok,
    NoChecks,
}

impl ConfigStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ConfigStatus::Ok => "OK",
            ConfigStatus::NoChecks => "There were no checks found in the configuration.",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ConfigStatus::Ok)
    }
}

pub fn config_status(config: &Config) -> ConfigStatus {
    if config.checks.is_empty() {
        ConfigStatus::NoChecks
    } else {
        ConfigStatus::Ok
    }
}

/// Validate check definitions.
/// Returns all validation errors at once (not just the first).
pub fn validate_checks(checks: &[Check]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, check) in checks.iter().enumerate() {
        if check.message.trim().is_empty() {
            errors.push(format!("checks[{}].message: must not be empty", i));
        }

        if !check.has_conditions() {
            errors.push(format!(
                "checks[{}]: no pass, pass_override or fail conditions (always passes)",
                i
            ));
        }

        validate_group(&mut errors, i, "pass", &check.pass);
        validate_group(&mut errors, i, "pass_override", &check.pass_override);
        validate_group(&mut errors, i, "fail", &check.fail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_group(errors: &mut Vec<String>, index: usize, group: &str, conditions: &[Condition]) {
    for (j, condition) in conditions.iter().enumerate() {
        if let Err(e) = ConditionKind::parse(&condition.kind) {
            errors.push(format!(
                "checks[{}].{}[{}].type: invalid '{}' - {}",
                index, group, j, condition.kind, e
            ));
        }
    }
}
