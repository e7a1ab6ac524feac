use serde::{Deserialize, Serialize};

/// Round-robin cursor over the contender list.
///
/// `current` indexes the full list (eliminated entries included); advancement
/// skips eliminated contenders and wraps, bumping `round` on each wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCursor {
    pub current: usize,
    pub round: u32,
    #[serde(default)]
    pub turns_taken: u32,
}

impl Default for TurnCursor {
    fn default() -> Self {
        Self {
            current: 0,
            round: 1,
            turns_taken: 0,
        }
    }
}

impl TurnCursor {
    /// Move to the next non-eliminated contender, if any remain.
    ///
    /// Returns `false` when every contender is eliminated; the cursor is left
    /// untouched in that case so the last actor stays visible.
    pub fn advance(&mut self, eliminated: &[bool]) -> bool {
        self.turns_taken = self.turns_taken.saturating_add(1);
        match next_standing(eliminated, self.current) {
            Some(next) => {
                if next <= self.current {
                    self.round = self.round.saturating_add(1);
                }
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Re-seat the cursor on a standing contender after eliminations or
    /// roster edits, preferring the current slot.
    pub fn reseat(&mut self, eliminated: &[bool]) {
        if eliminated.get(self.current).copied() != Some(false) {
            if let Some(next) = next_standing(eliminated, self.current) {
                self.current = next;
            }
        }
    }
}

/// Index of the next non-eliminated contender strictly after `from`, wrapping
/// once around the whole list (`from` itself is considered last).
#[must_use]
pub fn next_standing(eliminated: &[bool], from: usize) -> Option<usize> {
    let len = eliminated.len();
    if len == 0 {
        return None;
    }
    (1..=len)
        .map(|step| (from + step) % len)
        .find(|&idx| !eliminated[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_and_counts_rounds() {
        let standing = [false, false, false];
        let mut cursor = TurnCursor::default();
        assert!(cursor.advance(&standing));
        assert_eq!((cursor.current, cursor.round), (1, 1));
        assert!(cursor.advance(&standing));
        assert_eq!((cursor.current, cursor.round), (2, 1));
        assert!(cursor.advance(&standing));
        assert_eq!((cursor.current, cursor.round), (0, 2));
        assert_eq!(cursor.turns_taken, 3);
    }

    #[test]
    fn advance_skips_eliminated() {
        let eliminated = [false, true, false];
        let mut cursor = TurnCursor::default();
        assert!(cursor.advance(&eliminated));
        assert_eq!(cursor.current, 2);
    }

    #[test]
    fn advance_reports_empty_field() {
        let eliminated = [true, true];
        let mut cursor = TurnCursor::default();
        assert!(!cursor.advance(&eliminated));
        assert_eq!(cursor.current, 0);
    }

    #[test]
    fn sole_survivor_keeps_the_turn() {
        let eliminated = [true, false, true];
        let mut cursor = TurnCursor {
            current: 1,
            round: 4,
            turns_taken: 9,
        };
        assert!(cursor.advance(&eliminated));
        assert_eq!(cursor.current, 1);
        assert_eq!(cursor.round, 5, "a solo lap still counts as a round");
    }

    #[test]
    fn reseat_moves_off_eliminated_slot() {
        let eliminated = [true, false, false];
        let mut cursor = TurnCursor::default();
        cursor.reseat(&eliminated);
        assert_eq!(cursor.current, 1);

        let mut stable = TurnCursor {
            current: 2,
            ..TurnCursor::default()
        };
        stable.reseat(&eliminated);
        assert_eq!(stable.current, 2);
    }

    #[test]
    fn next_standing_handles_edges() {
        assert_eq!(next_standing(&[], 0), None);
        assert_eq!(next_standing(&[false], 0), Some(0));
        assert_eq!(next_standing(&[true], 0), None);
    }
}
