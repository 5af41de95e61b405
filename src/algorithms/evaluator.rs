use rayon::prelude::*;

use crate::algorithms::dijkstra::LinearScanDijkstra;
use crate::algorithms::score::normalize_score;
use crate::algorithms::validator::validate_route;
use crate::algorithms::ShortestPathSolver;
use crate::error::EvaluationError;
use crate::models::{EvaluationResult, MetroNetwork, Route};

/// Route evaluation service: validation, optimal path search and scoring.
///
/// Holds only a shared reference to an immutable network, so one evaluator
/// can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct RouteEvaluator<'a, S = LinearScanDijkstra> {
    network: &'a MetroNetwork,
    solver: S,
}

impl<'a> RouteEvaluator<'a, LinearScanDijkstra> {
    /// Creates an evaluator using the registration-order reference solver
    pub fn new(network: &'a MetroNetwork) -> Self {
        Self::with_solver(network, LinearScanDijkstra)
    }
}

impl<'a, S: ShortestPathSolver> RouteEvaluator<'a, S> {
    pub fn with_solver(network: &'a MetroNetwork, solver: S) -> Self {
        Self { network, solver }
    }

    pub fn network(&self) -> &MetroNetwork {
        self.network
    }

    /// Evaluate one submitted route
    pub fn evaluate(&self, route: &Route) -> EvaluationResult {
        match self.try_evaluate(route) {
            Ok(result) => result,
            Err(err) => {
                if matches!(err, EvaluationError::DegenerateRoute { .. }) {
                    log::warn!("route {:?} cannot be scored: {err}", route.stops);
                } else {
                    log::debug!("rejected route {:?}: {err}", route.stops);
                }
                EvaluationResult::rejected(&err)
            }
        }
    }

    /// Evaluate a route, returning the first failure as an error
    pub fn try_evaluate(&self, route: &Route) -> Result<EvaluationResult, EvaluationError> {
        let route_time = validate_route(self.network, route)?;

        // A validated route has at least two known stops
        let (start, end) = match (route.first(), route.last()) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(EvaluationError::RouteTooShort),
        };

        let optimal = self
            .solver
            .shortest_path(self.network, start, end)
            .inspect_err(|err| {
                log::error!("shortest path failed after route validation: {err}");
            })?;

        let score = normalize_score(route_time, optimal.cost)?;
        log::debug!(
            "route {:?}: time {route_time}, optimal {} via {:?}, score {score}",
            route.stops,
            optimal.cost,
            optimal.path
        );

        Ok(EvaluationResult::accepted(route_time, optimal, score))
    }
}

impl<S: ShortestPathSolver + Sync> RouteEvaluator<'_, S> {
    /// Evaluate independent routes in parallel; results keep the input order
    pub fn evaluate_many(&self, routes: &[Route]) -> Vec<EvaluationResult> {
        routes.par_iter().map(|route| self.evaluate(route)).collect()
    }
}
