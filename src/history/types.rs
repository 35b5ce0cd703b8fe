use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score recorded at the end of the previous run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorScore {
    pub version: u32,
    pub score: i32,
    pub recorded_at: DateTime<Utc>,
}

impl PriorScore {
    /// Record a score with version 1 and the current time
    pub fn new(score: i32) -> Self {
        Self {
            version: 1,
            score,
            recorded_at: Utc::now(),
        }
    }
}

/// Change in score since the previous run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDelta {
    /// No previous score was recorded
    FirstRun,
    Gained(i32),
    Lost(i32),
    Unchanged,
}

impl ScoreDelta {
    pub fn between(prior: Option<i32>, current: i32) -> Self {
        match prior {
            None => ScoreDelta::FirstRun,
            Some(prior) if current > prior => ScoreDelta::Gained(current - prior),
            Some(prior) if current < prior => ScoreDelta::Lost(prior - current),
            Some(_) => ScoreDelta::Unchanged,
        }
    }

    /// Notification text, if this delta warrants one
    pub fn notification(&self) -> Option<&'static str> {
        match self {
            ScoreDelta::Gained(_) => Some("You gained points!"),
            ScoreDelta::Lost(_) => Some("You lost points!"),
            ScoreDelta::FirstRun | ScoreDelta::Unchanged => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prior_score() {
        let prior = PriorScore::new(42);
        assert_eq!(prior.version, 1);
        assert_eq!(prior.score, 42);
    }

    #[test]
    fn test_delta_between() {
        assert_eq!(ScoreDelta::between(None, 10), ScoreDelta::FirstRun);
        assert_eq!(ScoreDelta::between(Some(10), 25), ScoreDelta::Gained(15));
        assert_eq!(ScoreDelta::between(Some(25), 10), ScoreDelta::Lost(15));
        assert_eq!(ScoreDelta::between(Some(10), 10), ScoreDelta::Unchanged);
        assert_eq!(ScoreDelta::between(Some(0), -5), ScoreDelta::Lost(5));
    }

    #[test]
    fn test_notification_text() {
        assert_eq!(ScoreDelta::Gained(1).notification(), Some("You gained points!"));
        assert_eq!(ScoreDelta::Lost(1).notification(), Some("You lost points!"));
        assert!(ScoreDelta::Unchanged.notification().is_none());
        assert!(ScoreDelta::FirstRun.notification().is_none());
    }
}
