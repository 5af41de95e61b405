use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

use crate::algorithms::ShortestPathSolver;
use crate::error::EvaluationError;
use crate::models::{Cost, MetroNetwork, ShortestPath};

// Custom wrapper to make f64 implement Eq
#[derive(PartialEq, Copy, Clone, Debug)]
struct Distance(Cost);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// Per-search bookkeeping, indexed by stop registration position
struct SearchState {
    distances: Vec<Cost>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
}

impl SearchState {
    fn new(size: usize, source: usize) -> Self {
        let mut distances = vec![Cost::INFINITY; size];
        distances[source] = 0.0;
        Self {
            distances,
            predecessors: vec![None; size],
            settled: vec![false; size],
        }
    }

    /// Relax every outgoing edge of `current` towards unsettled stops.
    /// Returns the stops whose tentative distance improved.
    fn relax(&mut self, network: &MetroNetwork, current: usize) -> Vec<usize> {
        let mut improved = Vec::new();
        for &(neighbor, cost) in network.edges_at(current) {
            if self.settled[neighbor] {
                continue;
            }
            let candidate = self.distances[current] + cost;
            if candidate < self.distances[neighbor] {
                self.distances[neighbor] = candidate;
                self.predecessors[neighbor] = Some(current);
                improved.push(neighbor);
            }
        }
        improved
    }

    /// Walk predecessors back from `target`. An unsettled target yields a
    /// single-element path and infinite cost.
    fn into_path(self, network: &MetroNetwork, target: usize) -> ShortestPath {
        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(position) = current {
            path.push(network.key_at(position).clone());
            current = self.predecessors[position];
        }
        path.reverse();
        ShortestPath::new(path, self.distances[target])
    }
}

fn resolve_endpoints(
    network: &MetroNetwork,
    start: &str,
    end: &str,
) -> Result<(usize, usize), EvaluationError> {
    let source = network
        .index_of(start)
        .ok_or_else(|| EvaluationError::UnknownStop(start.to_string()))?;
    let target = network
        .index_of(end)
        .ok_or_else(|| EvaluationError::UnknownStop(end.to_string()))?;
    Ok((source, target))
}

/// Dijkstra with linear-scan selection, O(V²).
///
/// Among unsettled stops with equal tentative distance, the one registered
/// first in the network is settled first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanDijkstra;

impl ShortestPathSolver for LinearScanDijkstra {
    fn shortest_path(
        &self,
        network: &MetroNetwork,
        start: &str,
        end: &str,
    ) -> Result<ShortestPath, EvaluationError> {
        let (source, target) = resolve_endpoints(network, start, end)?;
        let mut state = SearchState::new(network.len(), source);

        loop {
            // Find the unsettled stop with the smallest finite distance
            let mut current = None;
            let mut min_distance = Cost::INFINITY;
            for (position, &distance) in state.distances.iter().enumerate() {
                if !state.settled[position] && distance < min_distance {
                    current = Some(position);
                    min_distance = distance;
                }
            }

            let Some(current) = current else {
                log::debug!("{end} is unreachable from {start}");
                break;
            };

            state.settled[current] = true;
            if current == target {
                break;
            }
            state.relax(network, current);
        }

        Ok(state.into_path(network, target))
    }
}

/// Dijkstra driven by an indexed priority queue, O((V + E) log V).
///
/// Queue entries are keyed by (distance, registration position), so stops are
/// settled in the same order as [`LinearScanDijkstra`] and both solvers
/// return identical paths, not only identical costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapDijkstra;

impl ShortestPathSolver for HeapDijkstra {
    fn shortest_path(
        &self,
        network: &MetroNetwork,
        start: &str,
        end: &str,
    ) -> Result<ShortestPath, EvaluationError> {
        let (source, target) = resolve_endpoints(network, start, end)?;
        let mut state = SearchState::new(network.len(), source);

        // Max-queue, so priorities are reversed to pop the closest stop first
        let mut queue: PriorityQueue<usize, Reverse<(Distance, usize)>> = PriorityQueue::new();
        queue.push(source, Reverse((Distance(0.0), source)));

        while let Some((current, _)) = queue.pop() {
            state.settled[current] = true;
            if current == target {
                break;
            }
            for neighbor in state.relax(network, current) {
                // Updates the priority when the stop is already queued
                queue.push(
                    neighbor,
                    Reverse((Distance(state.distances[neighbor]), neighbor)),
                );
            }
        }

        if !state.settled[target] {
            log::debug!("{end} is unreachable from {start}");
        }
        Ok(state.into_path(network, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkBuilder;

    fn create_test_network() -> MetroNetwork {
        NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_stop("B", "Bravo")
            .add_stop("C", "Charlie")
            .add_connection("A", "B", 2.0)
            .add_connection("B", "C", 3.0)
            .add_connection("A", "C", 10.0)
            .build()
            .unwrap()
    }

    // Two equal-cost ways from S to T: via X (registered first) or via Y
    fn create_tie_network(x_first: bool) -> MetroNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_stop("S", "Start");
        if x_first {
            builder.add_stop("X", "Xray").add_stop("Y", "Yankee");
        } else {
            builder.add_stop("Y", "Yankee").add_stop("X", "Xray");
        }
        builder
            .add_stop("T", "Target")
            .add_connection("S", "Y", 1.0)
            .add_connection("S", "X", 1.0)
            .add_connection("X", "T", 1.0)
            .add_connection("Y", "T", 1.0)
            .build()
            .unwrap()
    }

    fn solvers() -> Vec<Box<dyn ShortestPathSolver>> {
        vec![Box::new(LinearScanDijkstra), Box::new(HeapDijkstra)]
    }

    #[test]
    fn test_prefers_cheaper_indirect_path() {
        let network = create_test_network();
        for solver in solvers() {
            let result = solver.shortest_path(&network, "A", "C").unwrap();
            assert_eq!(result.cost, 5.0);
            assert_eq!(result.path, vec!["A", "B", "C"]);
        }
    }

    #[test]
    fn test_same_start_and_end() {
        let network = create_test_network();
        for solver in solvers() {
            let result = solver.shortest_path(&network, "B", "B").unwrap();
            assert_eq!(result.cost, 0.0);
            assert_eq!(result.path, vec!["B"]);
        }
    }

    #[test]
    fn test_unreachable_destination() {
        let network = create_test_network();
        for solver in solvers() {
            // Edges only point forward, so nothing leads back to A
            let result = solver.shortest_path(&network, "C", "A").unwrap();
            assert!(!result.is_reachable());
            assert_eq!(result.cost, f64::INFINITY);
            assert_eq!(result.path, vec!["A"]);
        }
    }

    #[test]
    fn test_unknown_endpoints() {
        let network = create_test_network();
        for solver in solvers() {
            assert_eq!(
                solver.shortest_path(&network, "D", "A"),
                Err(EvaluationError::UnknownStop("D".to_string()))
            );
            assert_eq!(
                solver.shortest_path(&network, "A", "E"),
                Err(EvaluationError::UnknownStop("E".to_string()))
            );
        }
    }

    #[test]
    fn test_ties_follow_registration_order() {
        for solver in solvers() {
            let network = create_tie_network(true);
            let result = solver.shortest_path(&network, "S", "T").unwrap();
            assert_eq!(result.path, vec!["S", "X", "T"]);
            assert_eq!(result.cost, 2.0);

            let network = create_tie_network(false);
            let result = solver.shortest_path(&network, "S", "T").unwrap();
            assert_eq!(result.path, vec!["S", "Y", "T"]);
            assert_eq!(result.cost, 2.0);
        }
    }

    #[test]
    fn test_zero_cost_connections() {
        let network = NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_stop("B", "Bravo")
            .add_connection("A", "B", 0.0)
            .build()
            .unwrap();
        for solver in solvers() {
            let result = solver.shortest_path(&network, "A", "B").unwrap();
            assert_eq!(result.cost, 0.0);
            assert_eq!(result.path, vec!["A", "B"]);
        }
    }
}
