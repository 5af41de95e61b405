mod cli;

pub use cli::{MetroCliArguments, MetroOperation, SolverKind};
