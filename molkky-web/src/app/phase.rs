use once_cell::sync::Lazy;
use regex::Regex;

use crate::game::{GamePhase, GameState};

/// Top-level UI phase; `History` is a browsing view layered over whatever the
/// game itself is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Play,
    Result,
    History,
}

/// The phase the game state itself demands (history is navigation-only).
#[must_use]
pub const fn phase_for_state(state: &GameState) -> Phase {
    match state.phase {
        GamePhase::Setup => Phase::Setup,
        GamePhase::Playing => Phase::Play,
        GamePhase::Finished => Phase::Result,
    }
}

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} .'-]{0,23}$").expect("valid name regex"));

/// Quick client-side check before handing a typed name to the rules crate.
#[must_use]
pub fn is_player_name_valid(name: &str) -> bool {
    NAME_RE.is_match(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_tracks_game_state() {
        let mut state = GameState::new();
        assert_eq!(phase_for_state(&state), Phase::Setup);
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.start_game(0).unwrap();
        assert_eq!(phase_for_state(&state), Phase::Play);
        state.players[0].card.score = 44;
        state.record_throw(6).unwrap();
        assert_eq!(phase_for_state(&state), Phase::Result);
    }

    #[test]
    fn name_validation_handles_expected_formats() {
        assert!(is_player_name_valid("Aino"));
        assert!(is_player_name_valid("Väinö Väänänen"));
        assert!(is_player_name_valid("  O'Brien  "));
        assert!(!is_player_name_valid(""));
        assert!(!is_player_name_valid("   "));
        assert!(!is_player_name_valid("x".repeat(25).as_str()));
        assert!(!is_player_name_valid("<script>"));
    }
}
