use crate::config::Check;
use serde::Serialize;

/// One resolved check's contribution to the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreItem {
    pub message: String,
    pub points: i32,
}

/// Aggregate result of a single scoring pass.
///
/// Built fresh for every pass. `score` always equals `contribs + detracts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreState {
    pub score: i32,
    pub contribs: i32,
    pub detracts: i32,
    pub total_points: i32,
    pub scored_vulns: usize,
    pub points: Vec<ScoreItem>,
    pub penalties: Vec<ScoreItem>,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one check's outcome. Failed checks contribute nothing.
    pub fn record(&mut self, check: &Check, passed: bool) {
        if !passed {
            return;
        }

        let item = ScoreItem {
            message: check.message.clone(),
            points: check.points,
        };
        self.score = self.score.saturating_add(check.points);

        if check.is_penalty() {
            self.detracts = self.detracts.saturating_add(check.points);
            self.penalties.push(item);
        } else {
            self.contribs = self.contribs.saturating_add(check.points);
            self.points.push(item);
        }
    }
}
