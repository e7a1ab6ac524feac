use thiserror::Error;

use crate::scoring::MAX_THROW_POINTS;
use crate::state::GamePhase;

/// Validation and sequencing failures surfaced to the UI.
///
/// Every variant carries a stable [`GameError::key`] so the web layer can
/// translate the message; `Display` stays English for logs and test output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name is longer than {max} characters")]
    NameTooLong { max: usize },
    #[error("name '{name}' is already taken")]
    NameTaken { name: String },
    #[error("no player or team with that identity")]
    UnknownContender,
    #[error("at least {required} players or teams are needed to start")]
    NotEnoughContenders { required: usize },
    #[error("team '{name}' has no members")]
    EmptyTeam { name: String },
    #[error("{count} player(s) are not assigned to any team")]
    UnassignedPlayers { count: usize },
    #[error("a throw scores between 0 and {MAX_THROW_POINTS} points, got {points}")]
    InvalidPoints { points: i32 },
    #[error("action requires the {needed} phase")]
    WrongPhase { needed: GamePhase },
    #[error("action only applies in team mode")]
    TeamsOnly,
    #[error("contender is already eliminated")]
    AlreadyEliminated,
}

impl GameError {
    /// i18n key for rendering the error to the user.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::EmptyName => "error.name-empty",
            Self::NameTooLong { .. } => "error.name-too-long",
            Self::NameTaken { .. } => "error.name-taken",
            Self::UnknownContender => "error.unknown-contender",
            Self::NotEnoughContenders { .. } => "error.not-enough-contenders",
            Self::EmptyTeam { .. } => "error.empty-team",
            Self::UnassignedPlayers { .. } => "error.unassigned-players",
            Self::InvalidPoints { .. } => "error.invalid-points",
            Self::WrongPhase { .. } => "error.wrong-phase",
            Self::TeamsOnly => "error.teams-only",
            Self::AlreadyEliminated => "error.already-eliminated",
        }
    }
}
