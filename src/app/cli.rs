use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::algorithms::dijkstra::{HeapDijkstra, LinearScanDijkstra};
use crate::algorithms::evaluator::RouteEvaluator;
use crate::algorithms::ShortestPathSolver;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{GameType, MetroNetwork, Route, ShortestPath};
use crate::utils::score_store::{MemoryScoreStore, ScoreStore};
use crate::utils::topology::load_network;

/// command line tool for the metro route minigame engine
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MetroCliArguments {
    /// optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// select the operation to run
    #[command(subcommand)]
    pub op: MetroOperation,
}

/// shortest path implementation used for optimal routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SolverKind {
    /// linear scan, ties go to the first registered stop
    #[default]
    Linear,
    /// priority queue, same results as linear
    Heap,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MetroOperation {
    /// prints the network topology as JSON
    Stations,
    /// validates and scores one route given as stop keys
    Check {
        /// stop keys in travel order
        stops: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = SolverKind::Linear)]
        solver: SolverKind,
    },
    /// prints the optimal path between two stops
    Shortest {
        from: String,
        to: String,
        #[arg(short, long, value_enum, default_value_t = SolverKind::Linear)]
        solver: SolverKind,
    },
    /// scores every route of a JSON file (a list of stop key lists) for one
    /// player and prints the evaluations with the resulting leaderboard.
    /// Scores live in a fresh in-memory store, so the leaderboard only ranks
    /// the routes of this file and nothing is kept between runs.
    Batch {
        #[arg(short, long)]
        routes: String,
        #[arg(short, long, default_value_t = String::from("player"))]
        user: String,
    },
}

impl MetroOperation {
    /// Run the operation and return its JSON output
    pub fn run(&self, config: &AppConfig) -> Result<String, AppError> {
        let network = load_network(&config.network_path)?;
        self.run_with_network(&network, config)
    }

    pub fn run_with_network(
        &self,
        network: &MetroNetwork,
        config: &AppConfig,
    ) -> Result<String, AppError> {
        let output = match self {
            MetroOperation::Stations => serde_json::to_value(network.to_topology())?,
            MetroOperation::Check { stops, solver } => {
                let route = Route::new(stops.clone());
                let result = match solver {
                    SolverKind::Linear => RouteEvaluator::new(network).evaluate(&route),
                    SolverKind::Heap => {
                        RouteEvaluator::with_solver(network, HeapDijkstra).evaluate(&route)
                    }
                };
                serde_json::to_value(result)?
            }
            MetroOperation::Shortest { from, to, solver } => {
                let path = match solver {
                    SolverKind::Linear => shortest(network, LinearScanDijkstra, from, to)?,
                    SolverKind::Heap => shortest(network, HeapDijkstra, from, to)?,
                };
                if path.is_reachable() {
                    json!({ "reachable": true, "path": path.path, "cost": path.cost })
                } else {
                    json!({ "reachable": false })
                }
            }
            MetroOperation::Batch { routes, user } => {
                let routes = read_routes(Path::new(routes))?;
                let evaluator = RouteEvaluator::new(network);
                let results = evaluator.evaluate_many(&routes);

                let store = MemoryScoreStore::new();
                for submission in results.iter().filter_map(|r| r.score_submission(None)) {
                    store.record(user, submission)?;
                }
                let highscores = store.highscores(GameType::ParisMetro, config.highscore_limit)?;
                log::info!(
                    "{} of {} routes were valid",
                    results.iter().filter(|r| r.valid).count(),
                    results.len()
                );
                json!({ "results": results, "highscores": highscores })
            }
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn shortest<S: ShortestPathSolver>(
    network: &MetroNetwork,
    solver: S,
    from: &str,
    to: &str,
) -> Result<ShortestPath, AppError> {
    Ok(solver.shortest_path(network, from, to)?)
}

fn read_routes(path: &Path) -> Result<Vec<Route>, AppError> {
    let contents = fs::read_to_string(path).map_err(|e| AppError::Input {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| AppError::Input {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
