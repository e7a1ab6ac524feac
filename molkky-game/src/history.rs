use serde::{Deserialize, Serialize};

use crate::state::{GamePhase, GameState, PlayMode};

/// Only this many finished games are kept, oldest dropped first.
pub const HISTORY_CAP: usize = 50;

/// One contender's line in a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStanding {
    pub name: String,
    pub score: i32,
    #[serde(default)]
    pub penalties: u32,
    #[serde(default)]
    pub eliminated: bool,
}

/// Snapshot of a completed game, appended to [`GameHistory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub mode: PlayMode,
    pub standings: Vec<FinalStanding>,
    pub winner: Option<String>,
    #[serde(default)]
    pub started_at_ms: Option<u64>,
    #[serde(default)]
    pub ended_at_ms: Option<u64>,
    #[serde(default)]
    pub rounds: u32,
}

impl GameRecord {
    /// Build the record for a finished game; `None` while still in play.
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<Self> {
        if state.phase != GamePhase::Finished {
            return None;
        }
        let standings = state
            .contender_views()
            .into_iter()
            .map(|view| FinalStanding {
                name: view.name,
                score: view.card.score,
                penalties: view.card.penalties,
                eliminated: view.card.eliminated,
            })
            .collect();
        Some(Self {
            mode: state.mode,
            standings,
            winner: state.winner_name(),
            started_at_ms: state.started_at_ms,
            ended_at_ms: state.ended_at_ms,
            rounds: state.turn.round,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameHistory {
    #[serde(default)]
    games: Vec<GameRecord>,
}

impl GameHistory {
    /// Append a record, evicting the oldest past [`HISTORY_CAP`].
    pub fn push(&mut self, record: GameRecord) {
        self.games.push(record);
        if self.games.len() > HISTORY_CAP {
            let excess = self.games.len() - HISTORY_CAP;
            self.games.drain(..excess);
        }
    }

    /// Records newest-first for display.
    #[must_use]
    pub fn recent(&self) -> Vec<&GameRecord> {
        self.games.iter().rev().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_state() -> GameState {
        let mut state = GameState::new();
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.start_game(1_000).unwrap();
        state.players[0].card.score = 44;
        state.record_throw(6).unwrap();
        state.mark_finished_at(2_000);
        state
    }

    #[test]
    fn record_captures_winner_and_standings() {
        let state = finished_state();
        let record = GameRecord::from_state(&state).expect("game is finished");
        assert_eq!(record.winner.as_deref(), Some("Aino"));
        assert_eq!(record.standings.len(), 2);
        assert_eq!(record.standings[0].score, 50);
        assert_eq!(record.started_at_ms, Some(1_000));
        assert_eq!(record.ended_at_ms, Some(2_000));
    }

    #[test]
    fn no_record_while_playing() {
        let mut state = GameState::new();
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.start_game(0).unwrap();
        assert!(GameRecord::from_state(&state).is_none());
    }

    #[test]
    fn history_caps_and_orders_newest_first() {
        let state = finished_state();
        let record = GameRecord::from_state(&state).unwrap();
        let mut history = GameHistory::default();
        for i in 0..(HISTORY_CAP + 5) {
            let mut r = record.clone();
            r.rounds = u32::try_from(i).unwrap_or(0);
            history.push(r);
        }
        assert_eq!(history.len(), HISTORY_CAP);
        let newest = history.recent()[0].rounds;
        assert_eq!(newest, u32::try_from(HISTORY_CAP + 4).unwrap_or(0));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = GameHistory::default();
        history.push(GameRecord::from_state(&finished_state()).unwrap());
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }
}
