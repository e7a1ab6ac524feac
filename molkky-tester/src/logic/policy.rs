use rand::Rng;
use rand_chacha::ChaCha20Rng;

use molkky_game::{GameState, MAX_THROW_POINTS, ScoreCard};

/// How a simulated side plays its throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameplayStrategy {
    /// Aim for makeable pins, take the finish when it is in reach.
    Balanced,
    /// Always go for the highest pin on the pitch.
    Aggressive,
    /// Low, safe targets; never risks an overflow.
    Cautious,
}

impl GameplayStrategy {
    pub const ALL: [Self; 3] = [Self::Balanced, Self::Aggressive, Self::Cautious];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Aggressive => "aggressive",
            Self::Cautious => "cautious",
        }
    }
}

impl serde::Serialize for GameplayStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// A throw the policy wants to attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowPlan {
    pub target: i32,
}

/// Decide what the active contender should aim at.
#[must_use]
pub fn plan_throw(strategy: GameplayStrategy, card: &ScoreCard) -> ThrowPlan {
    let needed = card.points_needed();
    let target = if needed <= MAX_THROW_POINTS {
        // Exact finish in reach; every strategy takes it.
        needed
    } else {
        match strategy {
            GameplayStrategy::Balanced => 8,
            GameplayStrategy::Aggressive => MAX_THROW_POINTS,
            GameplayStrategy::Cautious => 5,
        }
    };
    ThrowPlan { target }
}

/// Throw accuracy model: high pins are harder to hit cleanly, and any throw
/// can miss everything. The result is what the scorer actually records.
#[must_use]
pub fn resolve_throw(plan: ThrowPlan, rng: &mut ChaCha20Rng) -> i32 {
    let target = plan.target.clamp(1, MAX_THROW_POINTS);
    #[allow(clippy::cast_precision_loss)]
    let hit_chance = 0.9 - (target as f64) * 0.035;
    let roll: f64 = rng.r#gen();
    if roll < hit_chance {
        return target;
    }
    // Scatter: a neighboring pin, a low flub, or a clean miss.
    match rng.gen_range(0..4_u8) {
        0 => (target - 1).max(1),
        1 => (target + 1).min(MAX_THROW_POINTS),
        2 => rng.gen_range(1..=2),
        _ => 0,
    }
}

/// Convenience wrapper used by the simulation: plan against the active card
/// and resolve the attempt.
#[must_use]
pub fn throw_for(strategy: GameplayStrategy, state: &GameState, rng: &mut ChaCha20Rng) -> i32 {
    let card = state
        .active_id()
        .and_then(|id| state.card_of(id))
        .unwrap_or_default();
    let plan = plan_throw(strategy, &card);
    resolve_throw(plan, rng)
}
