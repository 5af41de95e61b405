// Stop model representing stations and their outgoing connections

use crate::models::{Cost, StopKey};
use serde::{Deserialize, Serialize};

/// A directed, costed edge towards another stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Key of the stop this connection leads to
    pub to: StopKey,

    /// Traversal cost (travel time in minutes for the metro game)
    #[serde(alias = "time")]
    pub cost: Cost,
}

impl Connection {
    pub fn new<S: Into<StopKey>>(to: S, cost: Cost) -> Self {
        Self {
            to: to.into(),
            cost,
        }
    }
}

/// A station in the metro network
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique key of the stop
    pub key: StopKey,

    /// Human readable station name
    pub name: String,

    /// Outgoing connections, in insertion order
    pub connections: Vec<Connection>,
}

impl Stop {
    /// Creates a stop without connections
    pub fn new<K: Into<StopKey>, N: Into<String>>(key: K, name: N) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            connections: Vec::new(),
        }
    }

    /// Creates a stop with the given outgoing connections
    pub fn with_connections<K: Into<StopKey>, N: Into<String>>(
        key: K,
        name: N,
        connections: Vec<Connection>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            connections,
        }
    }

    /// Returns the first connection leading to `to`, if any
    pub fn connection_to(&self, to: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.to == to)
    }
}
