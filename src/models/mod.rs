// Models module - exports all model types

mod network;
mod route;
mod score;
mod stop;

// Re-export model types
pub use self::network::{MetroNetwork, NetworkBuilder, StopEntry, Topology};
pub use self::route::{EvaluationResult, Route, ShortestPath};
pub use self::score::{GameType, ScoreRecord, ScoreSubmission};
pub use self::stop::{Connection, Stop};

// Common type aliases for improved code readability
pub type StopKey = String;
pub type Cost = f64;
