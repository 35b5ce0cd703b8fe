pub mod kind;
pub mod local;

pub use kind::ConditionKind;
pub use local::LocalEvaluator;

use crate::config::Condition;

/// Answers whether a single condition currently holds.
///
/// The scoring engine treats implementations as opaque. Anything that goes
/// wrong while evaluating must be reported as `false`, never as a panic or
/// error, so that one broken condition cannot take down a scoring pass.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, condition: &Condition) -> bool;
}

impl<F> Evaluator for F
where
    F: Fn(&Condition) -> bool + Send + Sync,
{
    fn evaluate(&self, condition: &Condition) -> bool {
        self(condition)
    }
}
