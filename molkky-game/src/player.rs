use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::scoring::ScoreCard;

pub const MAX_NAME_LEN: usize = 24;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub card: ScoreCard,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            card: ScoreCard::default(),
        }
    }
}

/// Trim and validate a display name typed during setup.
///
/// # Errors
///
/// Returns an error when the trimmed name is empty or too long.
pub fn normalize_name(raw: &str) -> Result<String, GameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(GameError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(name.to_string())
}
