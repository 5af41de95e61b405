// Route models for submitted journeys, optimal paths and evaluation outcomes

use crate::error::EvaluationError;
use crate::models::{Cost, GameType, ScoreSubmission, StopKey};
use serde::{Deserialize, Serialize};

/// An ordered sequence of stop keys submitted by a player
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    pub stops: Vec<StopKey>,
}

impl Route {
    pub fn new(stops: Vec<StopKey>) -> Self {
        Self { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Consecutive (from, to) legs of the route
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl<S: Into<StopKey>> FromIterator<S> for Route {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Minimum-cost path between two stops.
///
/// An unreachable destination is reported with `cost == f64::INFINITY` and a
/// path holding only the destination key.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<StopKey>,
    pub cost: Cost,
}

impl ShortestPath {
    pub fn new(path: Vec<StopKey>, cost: Cost) -> Self {
        Self { path, cost }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Outcome of validating and scoring one route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Total time of the submitted route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_time: Option<Cost>,

    /// Total time of the optimal route between the same endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_time: Option<Cost>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal_route: Option<Vec<StopKey>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl EvaluationResult {
    /// A successful evaluation with every field populated
    pub fn accepted(route_time: Cost, optimal: ShortestPath, score: u32) -> Self {
        Self {
            valid: true,
            message: None,
            route_time: Some(route_time),
            optimal_time: Some(optimal.cost),
            optimal_route: Some(optimal.path),
            score: Some(score),
        }
    }

    /// A failed evaluation carrying only the failure message
    pub fn rejected(error: &EvaluationError) -> Self {
        Self {
            valid: false,
            message: Some(error.to_string()),
            route_time: None,
            optimal_time: None,
            optimal_route: None,
            score: None,
        }
    }

    /// Score payload for the persistence collaborator; `None` for invalid routes
    pub fn score_submission(&self, time_taken: Option<f64>) -> Option<ScoreSubmission> {
        self.score.filter(|_| self.valid).map(|score| ScoreSubmission {
            game_type: GameType::ParisMetro,
            score: i64::from(score),
            time_taken,
        })
    }
}
