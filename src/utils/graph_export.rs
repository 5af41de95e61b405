// Export of metro networks to petgraph

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::models::{Cost, MetroNetwork, StopKey};

/// Directed petgraph copy of a network, nodes weighted by stop key
pub struct NetworkGraph {
    pub graph: DiGraph<StopKey, Cost>,
    pub nodes: HashMap<StopKey, NodeIndex>,
}

impl NetworkGraph {
    pub fn from_network(network: &MetroNetwork) -> Self {
        let mut graph = DiGraph::with_capacity(network.len(), 0);
        let mut nodes = HashMap::with_capacity(network.len());

        for stop in network.stops() {
            let node = graph.add_node(stop.key.clone());
            nodes.insert(stop.key.clone(), node);
        }
        for stop in network.stops() {
            for conn in &stop.connections {
                if let (Some(&from), Some(&to)) = (nodes.get(&stop.key), nodes.get(&conn.to)) {
                    graph.add_edge(from, to, conn.cost);
                }
            }
        }

        Self { graph, nodes }
    }

    /// Minimum cost between two stops, `None` when unknown or unreachable
    pub fn shortest_cost(&self, start: &str, end: &str) -> Option<Cost> {
        let from = *self.nodes.get(start)?;
        let to = *self.nodes.get(end)?;
        dijkstra(&self.graph, from, Some(to), |e| *e.weight())
            .get(&to)
            .copied()
    }
}
