use crate::config::{Check, Condition};
use crate::evaluator::Evaluator;

/// Decide whether a check passes.
///
/// Precedence is fail > pass_override > pass. Every `pass` condition is
/// evaluated; `pass_override` and `fail` stop at the first true condition.
pub fn resolve_check(check: &Check, evaluator: &dyn Evaluator) -> bool {
    let evaluate = |group: &str, condition: &Condition| {
        let result = evaluator.evaluate(condition);
        tracing::debug!(
            check = %check.message,
            group,
            kind = %condition.kind,
            result,
            "evaluated condition"
        );
        result
    };

    let mut status = check
        .pass
        .iter()
        .map(|c| evaluate("pass", c))
        .fold(true, |all, result| all && result);

    if check.pass_override.iter().any(|c| evaluate("pass_override", c)) {
        status = true;
    }

    if check.fail.iter().any(|c| evaluate("fail", c)) {
        status = false;
    }

    status
}
