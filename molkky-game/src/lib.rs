//! Molkky rules engine
//!
//! Platform-agnostic scoring, turn, and roster logic for the Finnish throwing
//! game Molkky. This crate holds the whole rule set without UI or
//! platform-specific dependencies; the web crate and the QA tester both drive
//! the same [`GameState`].

pub mod error;
pub mod history;
pub mod player;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod team;
pub mod turn;

// Re-export commonly used types
pub use error::GameError;
pub use history::{FinalStanding, GameHistory, GameRecord, HISTORY_CAP};
pub use player::{MAX_NAME_LEN, Player, PlayerId, normalize_name};
pub use scoring::{
    ELIMINATION_MISS_LIMIT, MAX_THROW_POINTS, OVERFLOW_RESET_SCORE, OutOfTurnOutcome,
    PENALTY_SAFE_THRESHOLD, PenaltyOutcome, ScoreCard, TARGET_SCORE, ThrowOutcome, is_valid_throw,
};
pub use snapshot::SessionSnapshot;
pub use state::{ContenderId, ContenderView, GamePhase, GameState, MIN_CONTENDERS, PlayMode};
pub use team::{Team, TeamId};
pub use turn::{TurnCursor, next_standing};

/// Trait for abstracting session persistence.
/// Platform-specific implementations should provide this.
pub trait SnapshotStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the session snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), Self::Error>;

    /// Load the previously persisted snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed.
    fn load(&self) -> Result<Option<SessionSnapshot>, Self::Error>;

    /// Drop the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Session facade pairing the live snapshot with its store.
pub struct SessionManager<S>
where
    S: SnapshotStore,
{
    store: S,
}

impl<S> SessionManager<S>
where
    S: SnapshotStore,
{
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the write.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), S::Error> {
        self.store.save(snapshot)
    }

    /// Restore the previous session, falling back to a fresh one when the
    /// store is empty or unreadable.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself fails; a missing snapshot is not
    /// an error.
    pub fn restore(&self) -> Result<SessionSnapshot, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        match self.store.load().map_err(Into::into)? {
            Some(snapshot) => Ok(snapshot),
            None => Ok(SessionSnapshot::default()),
        }
    }

    /// Forget the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the removal.
    pub fn clear(&self) -> Result<(), S::Error> {
        self.store.clear()
    }
}
