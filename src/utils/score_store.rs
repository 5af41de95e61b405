// Score persistence boundary and an in-memory implementation

use std::sync::RwLock;

use crate::error::StoreError;
use crate::models::{GameType, ScoreRecord, ScoreSubmission};

/// Storage capability injected into the service layer.
///
/// Callers are expected to be authenticated already; `user_id` is trusted.
pub trait ScoreStore: Send + Sync {
    /// Persist a score for `user_id`
    fn record(&self, user_id: &str, submission: ScoreSubmission)
        -> Result<ScoreRecord, StoreError>;

    /// Best scores for a game, highest first
    fn highscores(&self, game_type: GameType, limit: usize) -> Result<Vec<ScoreRecord>, StoreError>;

    /// All scores recorded by one user, oldest first
    fn user_scores(&self, user_id: &str) -> Result<Vec<ScoreRecord>, StoreError>;
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: RwLock<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn record(
        &self,
        user_id: &str,
        submission: ScoreSubmission,
    ) -> Result<ScoreRecord, StoreError> {
        let record = ScoreRecord::new(user_id, submission);
        self.records
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .push(record.clone());
        Ok(record)
    }

    fn highscores(&self, game_type: GameType, limit: usize) -> Result<Vec<ScoreRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        let mut best: Vec<ScoreRecord> = records
            .iter()
            .filter(|r| r.game_type == game_type)
            .cloned()
            .collect();
        // Stable sort: equal scores keep submission order
        best.sort_by(|a, b| b.score.cmp(&a.score));
        best.truncate(limit);
        Ok(best)
    }

    fn user_scores(&self, user_id: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(game_type: GameType, score: i64) -> ScoreSubmission {
        ScoreSubmission {
            game_type,
            score,
            time_taken: None,
        }
    }

    #[test]
    fn test_highscores_sorted_and_limited() {
        let store = MemoryScoreStore::new();
        store.record("ann", submission(GameType::ParisMetro, 40)).unwrap();
        store.record("bob", submission(GameType::ParisMetro, 90)).unwrap();
        store.record("cat", submission(GameType::WhacADeficiency, 300)).unwrap();
        store.record("dan", submission(GameType::ParisMetro, 90)).unwrap();
        store.record("eve", submission(GameType::ParisMetro, 75)).unwrap();

        let best = store.highscores(GameType::ParisMetro, 3).unwrap();
        let users: Vec<&str> = best.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(users, vec!["bob", "dan", "eve"]);

        let whac = store.highscores(GameType::WhacADeficiency, 10).unwrap();
        assert_eq!(whac.len(), 1);
        assert_eq!(whac[0].score, 300);
    }

    #[test]
    fn test_user_scores() {
        let store = MemoryScoreStore::new();
        store.record("ann", submission(GameType::ParisMetro, 40)).unwrap();
        store.record("bob", submission(GameType::ParisMetro, 90)).unwrap();
        store.record("ann", submission(GameType::WhacADeficiency, 120)).unwrap();

        let scores = store.user_scores("ann").unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].score, 40);
        assert_eq!(scores[1].game_type, GameType::WhacADeficiency);
        assert!(store.user_scores("zed").unwrap().is_empty());
    }
}
