use crate::config::{config_status, Config, ConfigStatus};
use crate::evaluator::Evaluator;
use crate::history::{load_prior_score, save_prior_score, PriorScore, ScoreDelta};
use crate::scoring::{run_scoring_pass, ScoreState};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Everything produced by one scoring run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub status: ConfigStatus,
    pub state: ScoreState,
    pub delta: ScoreDelta,
}

/// Score the configured checks and compare against the previous run.
///
/// An empty check list is reported through `status` and still produces a
/// (zero) score. A prior score file that cannot be read is treated as a
/// first run; failing to save the new score is an error.
pub async fn run_once(
    config: &Config,
    evaluator: Arc<dyn Evaluator>,
    prior_path: &Path,
) -> Result<RunReport> {
    let status = config_status(config);
    if !status.is_ok() {
        tracing::warn!(status = status.message(), "configuration problem");
    }

    let state = run_scoring_pass(&config.checks, evaluator).await;

    let prior = match load_prior_score(prior_path) {
        Ok(prior) => prior.map(|p| p.score),
        Err(e) => {
            tracing::warn!(error = %e, "reading prior score failed, treating as first run");
            None
        }
    };
    let delta = ScoreDelta::between(prior, state.score);

    save_prior_score(prior_path, &PriorScore::new(state.score))?;

    Ok(RunReport {
        status,
        state,
        delta,
    })
}
