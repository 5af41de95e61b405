pub mod dijkstra;
pub mod evaluator;
pub mod score;
pub mod validator;

// Common algorithm traits
use crate::error::EvaluationError;
use crate::models::{MetroNetwork, ShortestPath};

/// Trait for single-source shortest path solvers over a metro network
pub trait ShortestPathSolver {
    /// Compute the minimum-cost path from `start` to `end`.
    ///
    /// Fails only when either endpoint is not a stop of `network`; an
    /// unreachable destination is a regular result with infinite cost.
    fn shortest_path(
        &self,
        network: &MetroNetwork,
        start: &str,
        end: &str,
    ) -> Result<ShortestPath, EvaluationError>;
}
