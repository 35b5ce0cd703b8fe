use crate::config::Check;
use std::cmp::Ordering;

/// Sum that auto-allocated points are normalized to
pub const POINT_TARGET: i32 = 100;

/// Value given to every unassigned check when normalizing is impossible
pub const FALLBACK_POINTS: i32 = 3;

/// Above this many unassigned checks the fallback value is used even if
/// points are left to distribute
const MAX_DISTRIBUTED_CHECKS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// Sum of all positive check values after allocation
    pub total_points: i32,
    /// Checks with non-negative configured points
    pub scored_vulns: usize,
}

/// Fill in point values for checks configured with `points: 0`.
///
/// Explicit positive values are summed first. Whatever is left of
/// [`POINT_TARGET`] is split evenly over the unassigned checks, with the
/// integer-division remainder handed out one point at a time in config order.
/// When explicit values already reach the target, or there are more than
/// 100 unassigned checks, each gets [`FALLBACK_POINTS`]
/// instead and the total is left above the target. Penalties are untouched.
pub fn allocate_points(checks: &mut [Check]) -> Allocation {
    let mut total_points: i32 = 0;
    let mut unassigned = Vec::new();

    for (i, check) in checks.iter().enumerate() {
        match check.points.cmp(&0) {
            Ordering::Greater => total_points = total_points.saturating_add(check.points),
            Ordering::Equal => unassigned.push(i),
            Ordering::Less => {}
        }
    }

    let scored_vulns = checks.iter().filter(|c| c.points >= 0).count();

    if unassigned.is_empty() {
        return Allocation {
            total_points,
            scored_vulns,
        };
    }

    let points_left = POINT_TARGET - total_points;
    let count = i32::try_from(unassigned.len()).unwrap_or(i32::MAX);

    if points_left <= 0 || unassigned.len() > MAX_DISTRIBUTED_CHECKS {
        for &i in &unassigned {
            checks[i].points = FALLBACK_POINTS;
        }
        total_points = total_points.saturating_add(FALLBACK_POINTS.saturating_mul(count));
        tracing::debug!(
            unassigned = unassigned.len(),
            points_left,
            "assigned fallback points"
        );
    } else {
        let points_each = points_left / count;
        // remainder < count, so one round-robin lap always finishes it
        let remainder = points_left % count;
        for (n, &i) in unassigned.iter().enumerate() {
            let bonus = if (n as i32) < remainder { 1 } else { 0 };
            checks[i].points = points_each + bonus;
        }
        total_points = POINT_TARGET;
        tracing::debug!(
            unassigned = unassigned.len(),
            points_each,
            remainder,
            "distributed remaining points"
        );
    }

    Allocation {
        total_points,
        scored_vulns,
    }
}
