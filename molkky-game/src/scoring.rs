use serde::{Deserialize, Serialize};

/// A game ends the moment a contender's total hits this exactly.
pub const TARGET_SCORE: i32 = 50;
/// Totals that shoot past the target fall back to this.
pub const OVERFLOW_RESET_SCORE: i32 = 25;
/// At or above this score a rule violation costs points instead of the game.
pub const PENALTY_SAFE_THRESHOLD: i32 = 37;
/// Twelve pins on the pitch, so twelve is the most a single throw can earn.
pub const MAX_THROW_POINTS: i32 = 12;
/// Miss streak that knocks a contender out of the game.
pub const ELIMINATION_MISS_LIMIT: u8 = 3;

const LOG_THROW_SCORED: &str = "log.throw.scored";
const LOG_THROW_MISS: &str = "log.throw.miss";
const LOG_THROW_OVERFLOW: &str = "log.throw.overflow";
const LOG_THROW_WIN: &str = "log.throw.win";
const LOG_ELIMINATED: &str = "log.contender.eliminated";
const LOG_PENALTY_RESET: &str = "log.penalty.reset";
const LOG_OUTOFTURN_RESET: &str = "log.outofturn.reset";
const LOG_OUTOFTURN_IGNORED: &str = "log.outofturn.ignored";

/// Running tally for one contender (a player, or a whole team in team mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreCard {
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub penalties: u32,
    #[serde(default)]
    pub consecutive_misses: u8,
    #[serde(default)]
    pub eliminated: bool,
}

/// What a single scored throw did to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrowOutcome {
    Scored { total: i32 },
    Miss { streak: u8 },
    Overflow,
    Win,
    /// Third miss with a score at or above the safety threshold.
    PenaltyReset,
    /// Third miss below the safety threshold.
    Eliminated,
}

impl ThrowOutcome {
    #[must_use]
    pub const fn log_key(self) -> &'static str {
        match self {
            Self::Scored { .. } => LOG_THROW_SCORED,
            Self::Miss { .. } => LOG_THROW_MISS,
            Self::Overflow => LOG_THROW_OVERFLOW,
            Self::Win => LOG_THROW_WIN,
            Self::PenaltyReset => LOG_PENALTY_RESET,
            Self::Eliminated => LOG_ELIMINATED,
        }
    }

    #[must_use]
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Win)
    }
}

/// Result of a manual penalty call against a contender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyOutcome {
    Reset,
    Eliminated,
}

impl PenaltyOutcome {
    #[must_use]
    pub const fn log_key(self) -> &'static str {
        match self {
            Self::Reset => LOG_PENALTY_RESET,
            Self::Eliminated => LOG_ELIMINATED,
        }
    }
}

/// Result of reporting a throw made out of turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfTurnOutcome {
    Reset,
    Ignored,
}

impl OutOfTurnOutcome {
    #[must_use]
    pub const fn log_key(self) -> &'static str {
        match self {
            Self::Reset => LOG_OUTOFTURN_RESET,
            Self::Ignored => LOG_OUTOFTURN_IGNORED,
        }
    }
}

#[must_use]
pub const fn is_valid_throw(points: i32) -> bool {
    points >= 0 && points <= MAX_THROW_POINTS
}

impl ScoreCard {
    #[must_use]
    pub const fn points_needed(&self) -> i32 {
        TARGET_SCORE - self.score
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        self.score == TARGET_SCORE
    }

    /// Apply a validated throw (0..=12) to this card.
    ///
    /// The caller is responsible for range-checking the points and for only
    /// calling this on a non-eliminated card.
    pub fn apply_throw(&mut self, points: i32) -> ThrowOutcome {
        if points == 0 {
            return self.apply_miss();
        }

        let candidate = self.score + points;
        if candidate == TARGET_SCORE {
            self.score = TARGET_SCORE;
            self.consecutive_misses = 0;
            return ThrowOutcome::Win;
        }
        if candidate > TARGET_SCORE {
            // Overflow keeps the miss streak: knocking pins is not a miss.
            self.score = OVERFLOW_RESET_SCORE;
            self.penalties += 1;
            return ThrowOutcome::Overflow;
        }

        self.score = candidate;
        self.consecutive_misses = 0;
        ThrowOutcome::Scored { total: candidate }
    }

    fn apply_miss(&mut self) -> ThrowOutcome {
        self.consecutive_misses = self.consecutive_misses.saturating_add(1);
        if self.consecutive_misses < ELIMINATION_MISS_LIMIT {
            return ThrowOutcome::Miss {
                streak: self.consecutive_misses,
            };
        }

        self.consecutive_misses = 0;
        if self.score >= PENALTY_SAFE_THRESHOLD {
            self.score = OVERFLOW_RESET_SCORE;
            self.penalties += 1;
            ThrowOutcome::PenaltyReset
        } else {
            self.eliminated = true;
            ThrowOutcome::Eliminated
        }
    }

    /// Manual penalty: elimination-grade offense, softened to a score reset
    /// when the contender sits at or above the safety threshold.
    pub fn apply_penalty(&mut self) -> PenaltyOutcome {
        self.consecutive_misses = 0;
        if self.score >= PENALTY_SAFE_THRESHOLD {
            self.score = OVERFLOW_RESET_SCORE;
            self.penalties += 1;
            PenaltyOutcome::Reset
        } else {
            self.eliminated = true;
            PenaltyOutcome::Eliminated
        }
    }

    /// An out-of-turn throw only stings contenders close to the target.
    pub fn apply_out_of_turn(&mut self) -> OutOfTurnOutcome {
        if self.score >= PENALTY_SAFE_THRESHOLD {
            self.score = OVERFLOW_RESET_SCORE;
            self.penalties += 1;
            OutOfTurnOutcome::Reset
        } else {
            OutOfTurnOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_at(score: i32) -> ScoreCard {
        ScoreCard {
            score,
            ..ScoreCard::default()
        }
    }

    #[test]
    fn exact_target_wins() {
        let mut card = card_at(45);
        assert_eq!(card.apply_throw(5), ThrowOutcome::Win);
        assert!(card.has_won());
        assert_eq!(card.points_needed(), 0);
    }

    #[test]
    fn overflow_resets_and_counts_penalty() {
        let mut card = card_at(45);
        card.consecutive_misses = 2;
        assert_eq!(card.apply_throw(8), ThrowOutcome::Overflow);
        assert_eq!(card.score, OVERFLOW_RESET_SCORE);
        assert_eq!(card.penalties, 1);
        assert_eq!(card.consecutive_misses, 2, "overflow is not a miss");
    }

    #[test]
    fn scoring_clears_miss_streak() {
        let mut card = card_at(10);
        card.consecutive_misses = 2;
        assert_eq!(card.apply_throw(6), ThrowOutcome::Scored { total: 16 });
        assert_eq!(card.consecutive_misses, 0);
    }

    #[test]
    fn third_miss_eliminates_below_threshold() {
        let mut card = card_at(PENALTY_SAFE_THRESHOLD - 1);
        assert_eq!(card.apply_throw(0), ThrowOutcome::Miss { streak: 1 });
        assert_eq!(card.apply_throw(0), ThrowOutcome::Miss { streak: 2 });
        assert_eq!(card.apply_throw(0), ThrowOutcome::Eliminated);
        assert!(card.eliminated);
        assert_eq!(card.score, PENALTY_SAFE_THRESHOLD - 1);
    }

    #[test]
    fn third_miss_resets_at_threshold() {
        let mut card = card_at(PENALTY_SAFE_THRESHOLD);
        card.consecutive_misses = 2;
        assert_eq!(card.apply_throw(0), ThrowOutcome::PenaltyReset);
        assert!(!card.eliminated);
        assert_eq!(card.score, OVERFLOW_RESET_SCORE);
        assert_eq!(card.penalties, 1);
        assert_eq!(card.consecutive_misses, 0);
    }

    #[test]
    fn manual_penalty_follows_threshold_rule() {
        let mut low = card_at(20);
        assert_eq!(low.apply_penalty(), PenaltyOutcome::Eliminated);
        assert!(low.eliminated);

        let mut high = card_at(40);
        assert_eq!(high.apply_penalty(), PenaltyOutcome::Reset);
        assert_eq!(high.score, OVERFLOW_RESET_SCORE);
        assert_eq!(high.penalties, 1);
    }

    #[test]
    fn out_of_turn_only_hits_leaders() {
        let mut low = card_at(36);
        assert_eq!(low.apply_out_of_turn(), OutOfTurnOutcome::Ignored);
        assert_eq!(low.score, 36);
        assert_eq!(low.penalties, 0);

        let mut high = card_at(37);
        assert_eq!(high.apply_out_of_turn(), OutOfTurnOutcome::Reset);
        assert_eq!(high.score, OVERFLOW_RESET_SCORE);
        assert_eq!(high.penalties, 1);
    }

    #[test]
    fn throw_range_validation() {
        assert!(is_valid_throw(0));
        assert!(is_valid_throw(12));
        assert!(!is_valid_throw(13));
        assert!(!is_valid_throw(-1));
    }
}
