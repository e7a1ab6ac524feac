use serde::{Deserialize, Serialize};

use crate::history::GameHistory;
use crate::state::GameState;

/// Everything the platform layer persists for one browser session: the game
/// (whatever phase it is in, setup roster included) and the finished-game
/// history. Serialized as a single JSON document under a fixed storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub game: Option<GameState>,
    #[serde(default)]
    pub history: GameHistory,
}

impl SessionSnapshot {
    #[must_use]
    pub fn new(game: Option<GameState>, history: GameHistory) -> Self {
        Self { game, history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::GameRecord;

    #[test]
    fn snapshot_roundtrips_mid_game() {
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        game.add_player("Bertta").unwrap();
        game.start_game(500).unwrap();
        game.record_throw(9).unwrap();

        let mut history = GameHistory::default();
        let mut done = game.clone();
        // Bertta is up after Aino's opening throw.
        done.players[1].card.score = 44;
        done.record_throw(6).unwrap();
        history.push(GameRecord::from_state(&done).unwrap());

        let snapshot = SessionSnapshot::new(Some(game), history);
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let restored: SessionSnapshot = serde_json::from_str("{}").unwrap();
        assert!(restored.game.is_none());
        assert!(restored.history.is_empty());
    }
}
