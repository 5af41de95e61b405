// Error types for route evaluation, network loading and configuration

use crate::models::{Cost, StopKey};

/// Failures surfaced while validating or scoring a submitted route.
///
/// The `Display` text of each variant is the message returned to players.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Route must have at least two stations")]
    RouteTooShort,
    #[error("Station {0} does not exist")]
    UnknownStop(StopKey),
    #[error("No direct connection from {from} to {to}")]
    NoDirectConnection { from: String, to: String },
    #[error("Route cannot be scored: submitted time {submitted} against optimal time {optimal}")]
    DegenerateRoute { submitted: Cost, optimal: Cost },
}

/// Failures raised while building or loading a metro network.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("stop key must not be empty")]
    EmptyStopKey,
    #[error("stop {0} is registered more than once")]
    DuplicateStop(StopKey),
    #[error("connection from {from} to {to} starts at an unknown stop")]
    UnknownSource { from: StopKey, to: StopKey },
    #[error("connection from {from} points to unknown stop {to}")]
    DanglingConnection { from: StopKey, to: StopKey },
    #[error("connection from {from} to {to} has invalid cost {cost}")]
    InvalidCost {
        from: StopKey,
        to: StopKey,
        cost: Cost,
    },
    #[error("failure reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failure decoding {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failure decoding {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("score store lock was poisoned")]
    Poisoned,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed reading configuration: {0}")]
    ReadError(#[from] config::ConfigError),
}

/// Top-level failure of a command line operation
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failure reading routes from {path}: {message}")]
    Input { path: String, message: String },
    #[error("failure encoding output: {0}")]
    Output(#[from] serde_json::Error),
}
