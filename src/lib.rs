// Public modules
pub mod algorithms;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::evaluator::RouteEvaluator;
pub use error::{EvaluationError, NetworkError};
pub use models::{EvaluationResult, MetroNetwork, NetworkBuilder, Route, ShortestPath};
