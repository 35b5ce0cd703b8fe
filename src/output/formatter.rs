use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::config::{Check, ConfigStatus};
use crate::history::ScoreDelta;
use crate::scoring::{ScoreItem, ScoreState};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the score report
///
/// Header line with score and total, then one line per passed check and
/// triggered penalty.
pub fn format_report(
    title: Option<&str>,
    status: ConfigStatus,
    state: &ScoreState,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let title = title.unwrap_or("Scoring Report");
    let header = format!("{}: {}/{} points", title, state.score, state.total_points);
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    if !status.is_ok() {
        let message = format!("Warning: {}", status.message());
        lines.push(if use_colors {
            message.red().to_string()
        } else {
            message
        });
    }

    lines.push(format!(
        "{} out of {} scored vulnerabilities fixed ({} penalties)",
        state.points.len(),
        state.scored_vulns,
        state.penalties.len()
    ));

    if !state.penalties.is_empty() {
        lines.push(String::new());
        lines.push("Penalties:".to_string());
        lines.extend(state.penalties.iter().map(|item| format_item(item, use_colors)));
    }

    if !state.points.is_empty() {
        lines.push(String::new());
        lines.push("Fixed vulnerabilities:".to_string());
        lines.extend(state.points.iter().map(|item| format_item(item, use_colors)));
    }

    lines.join("\n")
}

fn format_item(item: &ScoreItem, use_colors: bool) -> String {
    let points = format!("{:+} pts", item.points);
    if !use_colors {
        return format!("  {} - {}", item.message, points);
    }
    if item.points < 0 {
        format!("  {} - {}", item.message, points.red())
    } else {
        format!("  {} - {}", item.message, points.green())
    }
}

/// Format the score change notification, if any
pub fn format_delta(delta: ScoreDelta, use_colors: bool) -> Option<String> {
    let text = delta.notification()?;
    if !use_colors {
        return Some(text.to_string());
    }
    match delta {
        ScoreDelta::Gained(_) => Some(text.green().bold().to_string()),
        _ => Some(text.red().bold().to_string()),
    }
}

/// Format allocated point values, one check per line
/// Format: "{points:>5}  {message}", penalties included
pub fn format_allocation_table(checks: &[Check]) -> String {
    if checks.is_empty() {
        return "No checks configured.".to_string();
    }

    checks
        .iter()
        .map(|check| format!("{:>5}  {}", check.points, check.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> ScoreState {
        let mut state = ScoreState::new();
        state.total_points = 100;
        state.scored_vulns = 3;
        state.record(
            &Check {
                message: "Removed netcat".to_string(),
                points: 30,
                ..Default::default()
            },
            true,
        );
        state.record(
            &Check {
                message: "Deleted sshd".to_string(),
                points: -10,
                ..Default::default()
            },
            true,
        );
        state
    }

    #[test]
    fn test_format_report_plain() {
        let report = format_report(Some("Ubuntu"), ConfigStatus::Ok, &sample_state(), false);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Ubuntu: 20/100 points");
        assert_eq!(lines[1], "1 out of 3 scored vulnerabilities fixed (1 penalties)");
        assert!(report.contains("Penalties:\n  Deleted sshd - -10 pts"));
        assert!(report.contains("Fixed vulnerabilities:\n  Removed netcat - +30 pts"));
    }

    #[test]
    fn test_format_report_no_checks_warning() {
        let report = format_report(None, ConfigStatus::NoChecks, &ScoreState::new(), false);
        assert!(report.starts_with("Scoring Report: 0/0 points"));
        assert!(report.contains("Warning: There were no checks found in the configuration."));
        assert!(!report.contains("Penalties:"));
    }

    #[test]
    fn test_format_report_colors_keeps_text() {
        let report = format_report(Some("Ubuntu"), ConfigStatus::Ok, &sample_state(), true);
        assert!(report.contains("Removed netcat"));
        assert!(report.contains("\u{1b}["));
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(
            format_delta(ScoreDelta::Gained(5), false).as_deref(),
            Some("You gained points!")
        );
        assert_eq!(
            format_delta(ScoreDelta::Lost(5), false).as_deref(),
            Some("You lost points!")
        );
        assert!(format_delta(ScoreDelta::Unchanged, false).is_none());
        assert!(format_delta(ScoreDelta::FirstRun, true).is_none());
    }

    #[test]
    fn test_format_allocation_table() {
        let checks = vec![
            Check {
                message: "Removed netcat".to_string(),
                points: 34,
                ..Default::default()
            },
            Check {
                message: "Deleted sshd".to_string(),
                points: -10,
                ..Default::default()
            },
        ];
        let table = format_allocation_table(&checks);
        assert_eq!(table, "   34  Removed netcat\n  -10  Deleted sshd");
    }

    #[test]
    fn test_format_allocation_table_empty() {
        assert_eq!(format_allocation_table(&[]), "No checks configured.");
    }
}
