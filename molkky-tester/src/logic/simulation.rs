use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use molkky_game::{GamePhase, GameState, PlayMode, ThrowOutcome};

use crate::logic::policy::{GameplayStrategy, throw_for};

/// Configuration for one simulated match.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub seed: u64,
    pub players: usize,
    pub teams: bool,
    pub strategy: GameplayStrategy,
    pub max_throws: u32,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(strategy: GameplayStrategy, seed: u64) -> Self {
        Self {
            seed,
            players: 4,
            teams: false,
            strategy,
            max_throws: 2_000,
        }
    }

    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub const fn with_teams(mut self, teams: bool) -> Self {
        self.teams = teams;
        self
    }
}

/// One simulated throw, for verbose traces and assertions.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub round: u32,
    pub thrower: String,
    pub points: i32,
    pub outcome: ThrowOutcome,
    pub game_ended: bool,
}

/// Deterministic match harness driving the rules crate end to end.
pub struct SimulationSession {
    state: GameState,
    rng: ChaCha20Rng,
    strategy: GameplayStrategy,
    throws: u32,
    max_throws: u32,
}

impl SimulationSession {
    /// Build a roster per the config and start the game.
    ///
    /// # Errors
    ///
    /// Returns an error when the config produces an invalid roster.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let mut state = GameState::new();
        let players = config.players.max(2);
        if config.teams {
            state.set_mode(PlayMode::Teams)?;
            for i in 0..players {
                state.add_player(&format!("Player {}", i + 1))?;
            }
            let half = players.div_ceil(2);
            let home = state.add_team("Home")?;
            let away = state.add_team("Away")?;
            for (i, name) in state
                .players
                .iter()
                .map(|p| p.name.clone())
                .collect::<Vec<_>>()
                .into_iter()
                .enumerate()
            {
                let team = if i < half { home } else { away };
                state.assign_player(team, &name)?;
            }
        } else {
            for i in 0..players {
                state.add_player(&format!("Player {}", i + 1))?;
            }
        }
        state.shuffle_order(config.seed)?;
        state
            .start_game(config.seed)
            .context("starting simulated game")?;

        Ok(Self {
            state,
            rng: ChaCha20Rng::seed_from_u64(config.seed),
            strategy: config.strategy,
            throws: 0,
            max_throws: config.max_throws,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn throws(&self) -> u32 {
        self.throws
    }

    /// Play one throw.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules crate rejects the throw, or the throw
    /// budget is exhausted (a termination bug, not a game outcome).
    pub fn advance(&mut self) -> Result<TurnRecord> {
        anyhow::ensure!(
            self.throws < self.max_throws,
            "game did not terminate within {} throws",
            self.max_throws
        );
        let thrower = self.state.active_thrower().unwrap_or_default();
        let round = self.state.turn.round;
        let points = throw_for(self.strategy, &self.state, &mut self.rng);
        let outcome = self.state.record_throw(points)?;
        self.throws += 1;
        Ok(TurnRecord {
            round,
            thrower,
            points,
            outcome,
            game_ended: self.state.phase == GamePhase::Finished,
        })
    }

    /// Play until the game finishes and hand back the final state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from [`SimulationSession::advance`].
    pub fn run_to_completion(&mut self) -> Result<()> {
        while self.state.phase == GamePhase::Playing {
            self.advance()?;
        }
        self.state.mark_finished_at(u64::from(self.throws));
        Ok(())
    }
}
