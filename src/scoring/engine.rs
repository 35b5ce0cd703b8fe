use super::allocator::allocate_points;
use super::resolver::resolve_check;
use super::state::ScoreState;
use crate::config::Check;
use crate::evaluator::Evaluator;
use futures::future::join_all;
use std::sync::Arc;

/// Score every check and return the finished state.
///
/// Allocates points for unassigned checks on a per-pass copy, so the
/// authored values in `checks` are never rewritten, then resolves each check
/// on its own blocking task. Outcomes are folded into the state in config
/// order once every task has finished. A task that fails to complete counts
/// as a failed check.
pub async fn run_scoring_pass(checks: &[Check], evaluator: Arc<dyn Evaluator>) -> ScoreState {
    let mut state = ScoreState::new();

    let mut checks = checks.to_vec();
    let allocation = allocate_points(&mut checks);
    state.total_points = allocation.total_points;
    state.scored_vulns = allocation.scored_vulns;

    let tasks = checks.iter().map(|check| {
        let check = check.clone();
        let evaluator = Arc::clone(&evaluator);
        tokio::task::spawn_blocking(move || resolve_check(&check, evaluator.as_ref()))
    });
    let outcomes = join_all(tasks).await;

    for (check, outcome) in checks.iter().zip(outcomes) {
        let passed = match outcome {
            Ok(passed) => passed,
            Err(e) => {
                tracing::warn!(check = %check.message, error = %e, "check did not complete");
                false
            }
        };

        if passed {
            if check.is_penalty() {
                tracing::info!(check = %check.message, points = check.points, "penalty triggered");
            } else {
                tracing::info!(check = %check.message, points = check.points, "check passed");
            }
        }
        state.record(check, passed);
    }

    tracing::info!(
        checks = checks.len(),
        score = state.score,
        "finished running all checks"
    );

    state
}
