// Metro network model: an immutable, directed, weighted stop graph

use crate::error::{EvaluationError, NetworkError};
use crate::models::{Connection, Cost, Stop, StopKey};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Serialized form of one stop in a topology file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopEntry {
    pub name: String,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Stop key -> stop entry, in registration order.
///
/// Serialized as a map. Deserializing keeps every entry in document order,
/// repeated keys included, so building the network reports them as
/// [`NetworkError::DuplicateStop`] instead of silently keeping the last one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Topology {
    entries: Vec<(StopKey, StopEntry)>,
}

impl Topology {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &StopKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// First entry registered under `key`
    pub fn get(&self, key: &str) -> Option<&StopEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StopKey, &StopEntry)> {
        self.entries.iter().map(|(key, entry)| (key, entry))
    }
}

impl FromIterator<(StopKey, StopEntry)> for Topology {
    fn from_iter<I: IntoIterator<Item = (StopKey, StopEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Topology {
    type Item = (StopKey, StopEntry);
    type IntoIter = std::vec::IntoIter<(StopKey, StopEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Topology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct TopologyVisitor;

impl<'de> Visitor<'de> for TopologyVisitor {
    type Value = Topology;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of stop keys to stop entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, entry)) = map.next_entry::<StopKey, StopEntry>()? {
            entries.push((key, entry));
        }
        Ok(Topology { entries })
    }
}

impl<'de> Deserialize<'de> for Topology {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TopologyVisitor)
    }
}

/// Immutable metro network.
///
/// Stops keep their registration order, which the shortest path solvers
/// rely on for tie-breaking between equally distant stops. Every connection
/// target is resolved to a stop position once, at construction.
#[derive(Debug, Clone)]
pub struct MetroNetwork {
    stops: Vec<Stop>,
    index: HashMap<StopKey, usize>,
    adjacency: Vec<Vec<(usize, Cost)>>,
}

impl MetroNetwork {
    /// Builds a network from stops listed in registration order
    pub fn from_stops(stops: Vec<Stop>) -> Result<Self, NetworkError> {
        let mut index = HashMap::with_capacity(stops.len());
        for (i, stop) in stops.iter().enumerate() {
            if stop.key.is_empty() {
                return Err(NetworkError::EmptyStopKey);
            }
            if index.insert(stop.key.clone(), i).is_some() {
                return Err(NetworkError::DuplicateStop(stop.key.clone()));
            }
        }

        let mut adjacency = Vec::with_capacity(stops.len());
        for stop in &stops {
            let mut edges = Vec::with_capacity(stop.connections.len());
            for conn in &stop.connections {
                if !conn.cost.is_finite() || conn.cost < 0.0 {
                    return Err(NetworkError::InvalidCost {
                        from: stop.key.clone(),
                        to: conn.to.clone(),
                        cost: conn.cost,
                    });
                }
                let target =
                    index
                        .get(&conn.to)
                        .ok_or_else(|| NetworkError::DanglingConnection {
                            from: stop.key.clone(),
                            to: conn.to.clone(),
                        })?;
                edges.push((*target, conn.cost));
            }
            adjacency.push(edges);
        }

        log::debug!(
            "built metro network with {} stops and {} connections",
            stops.len(),
            adjacency.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            stops,
            index,
            adjacency,
        })
    }

    /// Builds a network from its serialized topology
    pub fn from_topology(topology: Topology) -> Result<Self, NetworkError> {
        let stops = topology
            .into_iter()
            .map(|(key, entry)| Stop::with_connections(key, entry.name, entry.connections))
            .collect();
        Self::from_stops(stops)
    }

    /// Returns the serializable topology view of this network
    pub fn to_topology(&self) -> Topology {
        self.stops
            .iter()
            .map(|stop| {
                (
                    stop.key.clone(),
                    StopEntry {
                        name: stop.name.clone(),
                        connections: stop.connections.clone(),
                    },
                )
            })
            .collect()
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All stops in registration order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, key: &str) -> Option<&Stop> {
        self.index.get(key).map(|&i| &self.stops[i])
    }

    /// Display name of a stop
    pub fn name_of(&self, key: &str) -> Option<&str> {
        self.stop(key).map(|s| s.name.as_str())
    }

    /// Outgoing connections of a stop, in insertion order
    pub fn connections(&self, key: &str) -> Result<&[Connection], EvaluationError> {
        self.stop(key)
            .map(|s| s.connections.as_slice())
            .ok_or_else(|| EvaluationError::UnknownStop(key.to_string()))
    }

    /// Cost of the first direct connection from `from` to `to`
    pub fn direct_cost(&self, from: &str, to: &str) -> Option<Cost> {
        self.stop(from)
            .and_then(|s| s.connection_to(to))
            .map(|c| c.cost)
    }

    pub(crate) fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn key_at(&self, position: usize) -> &StopKey {
        &self.stops[position].key
    }

    /// Resolved outgoing edges of the stop at `position`
    pub(crate) fn edges_at(&self, position: usize) -> &[(usize, Cost)] {
        &self.adjacency[position]
    }
}

/// Incremental construction of a [`MetroNetwork`]
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stops: Vec<Stop>,
    edges: Vec<(StopKey, Connection)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop; registration order is preserved
    pub fn add_stop<K: Into<StopKey>, N: Into<String>>(&mut self, key: K, name: N) -> &mut Self {
        self.stops.push(Stop::new(key, name));
        self
    }

    /// Adds a directed connection
    pub fn add_connection<F: Into<StopKey>, T: Into<StopKey>>(
        &mut self,
        from: F,
        to: T,
        cost: Cost,
    ) -> &mut Self {
        self.edges.push((from.into(), Connection::new(to, cost)));
        self
    }

    /// Adds a connection in both directions with the same cost
    pub fn add_bidirectional(&mut self, a: &str, b: &str, cost: Cost) -> &mut Self {
        self.add_connection(a, b, cost);
        self.add_connection(b, a, cost)
    }

    pub fn build(&self) -> Result<MetroNetwork, NetworkError> {
        let mut stops = self.stops.clone();
        for (from, conn) in &self.edges {
            let stop = stops.iter_mut().find(|s| &s.key == from).ok_or_else(|| {
                NetworkError::UnknownSource {
                    from: from.clone(),
                    to: conn.to.clone(),
                }
            })?;
            stop.connections.push(conn.clone());
        }
        MetroNetwork::from_stops(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_lookup() {
        let network = create_test_network();

        assert_eq!(network.len(), 3);
        assert!(network.contains("A"));
        assert!(!network.contains("D"));
        assert_eq!(network.name_of("C"), Some("Charlie"));
        assert_eq!(network.connections("A").unwrap().len(), 2);
        assert!(network.connections("C").unwrap().is_empty());
        assert_eq!(network.direct_cost("A", "C"), Some(10.0));
        assert_eq!(network.direct_cost("C", "A"), None);
    }

    #[test]
    fn test_unknown_stop_lookup() {
        let network = create_test_network();
        assert_eq!(
            network.connections("D"),
            Err(EvaluationError::UnknownStop("D".to_string()))
        );
    }

    #[test]
    fn test_registration_order_is_kept() {
        let network = NetworkBuilder::new()
            .add_stop("z", "Zulu")
            .add_stop("a", "Alpha")
            .add_stop("m", "Mike")
            .build()
            .unwrap();

        let keys: Vec<&str> = network.stops().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(network.index_of("m"), Some(2));
        assert_eq!(network.key_at(1), "a");
    }

    #[test]
    fn test_invalid_networks_are_rejected() {
        let dangling = NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_connection("A", "B", 1.0)
            .build();
        assert!(matches!(
            dangling,
            Err(NetworkError::DanglingConnection { .. })
        ));

        let unknown_source = NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_connection("B", "A", 1.0)
            .build();
        assert!(matches!(
            unknown_source,
            Err(NetworkError::UnknownSource { .. })
        ));

        let negative = NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_stop("B", "Bravo")
            .add_connection("A", "B", -1.0)
            .build();
        assert!(matches!(negative, Err(NetworkError::InvalidCost { .. })));

        let duplicate = NetworkBuilder::new()
            .add_stop("A", "Alpha")
            .add_stop("A", "Again")
            .build();
        assert!(matches!(duplicate, Err(NetworkError::DuplicateStop(_))));

        let empty_key = NetworkBuilder::new().add_stop("", "Nowhere").build();
        assert!(matches!(empty_key, Err(NetworkError::EmptyStopKey)));
    }

    #[test]
    fn test_topology_round_trip_keeps_order() {
        let network = create_test_network();
        let json = serde_json::to_string(&network.to_topology()).unwrap();
        assert!(json.starts_with(r#"{"A":{"name":"Alpha","connections":[{"to":"B","cost":2.0}"#));

        let topology: Topology = serde_json::from_str(&json).unwrap();
        let restored = MetroNetwork::from_topology(topology).unwrap();
        assert_eq!(restored.stops(), network.stops());
    }

    #[test]
    fn test_repeated_topology_key_is_rejected() {
        let json = r#"{
            "A": {"name": "Alpha", "connections": [{"to": "B", "cost": 1}]},
            "B": {"name": "Bravo"},
            "A": {"name": "Again", "connections": []}
        }"#;
        let topology: Topology = serde_json::from_str(json).unwrap();
        assert_eq!(topology.len(), 3);
        assert_eq!(topology.get("A").map(|e| e.name.as_str()), Some("Alpha"));

        let err = MetroNetwork::from_topology(topology).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStop(ref key) if key == "A"));
    }
}
