// Conversion of route costs into a player score

use crate::error::EvaluationError;
use crate::models::Cost;

/// Score awarded for matching the optimal route exactly
pub const PERFECT_SCORE: u32 = 100;

/// Map a submitted route cost and the optimal cost onto a score.
///
/// Every percent of extra time over the optimum costs one point, floored at
/// zero and truncated to an integer.
pub fn normalize_score(submitted: Cost, optimal: Cost) -> Result<u32, EvaluationError> {
    if submitted == optimal {
        return Ok(PERFECT_SCORE);
    }

    if optimal <= 0.0 || !optimal.is_finite() {
        return Err(EvaluationError::DegenerateRoute { submitted, optimal });
    }

    let penalty_percent = (submitted - optimal) / optimal * 100.0;
    let score = (f64::from(PERFECT_SCORE) - penalty_percent).max(0.0);

    Ok(score.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_route_is_perfect() {
        assert_eq!(normalize_score(5.0, 5.0), Ok(100));
        assert_eq!(normalize_score(0.0, 0.0), Ok(100));
    }

    #[test]
    fn test_penalty() {
        assert_eq!(normalize_score(6.0, 5.0), Ok(80));
        assert_eq!(normalize_score(10.0, 8.0), Ok(75));
        // 100 - 100/3 = 66.66.. truncates towards zero
        assert_eq!(normalize_score(4.0, 3.0), Ok(66));
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(normalize_score(10.0, 5.0), Ok(0));
        assert_eq!(normalize_score(50.0, 5.0), Ok(0));
    }

    #[test]
    fn test_degenerate_optimum() {
        assert_eq!(
            normalize_score(4.0, 0.0),
            Err(EvaluationError::DegenerateRoute {
                submitted: 4.0,
                optimal: 0.0
            })
        );
        assert!(normalize_score(4.0, f64::INFINITY).is_err());
    }
}
