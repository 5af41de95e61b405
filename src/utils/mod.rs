pub mod graph_export;
pub mod score_store;
pub mod synthetic;
pub mod topology;
