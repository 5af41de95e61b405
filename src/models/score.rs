// Score payloads exchanged with the score persistence collaborator

use serde::{Deserialize, Serialize};

/// Minigames that report scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    WhacADeficiency,
    ParisMetro,
}

/// A score reported for the authenticated caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub game_type: GameType,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
}

/// A stored score tied to a user identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub user_id: String,
    pub game_type: GameType,
    pub score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
}

impl ScoreRecord {
    pub fn new<S: Into<String>>(user_id: S, submission: ScoreSubmission) -> Self {
        Self {
            user_id: user_id.into(),
            game_type: submission.game_type,
            score: submission.score,
            time_taken: submission.time_taken,
        }
    }
}
