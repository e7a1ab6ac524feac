use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::scoring::ScoreCard;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A team shares one score card; members take throws in listed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Member player names, in throwing order.
    #[serde(default)]
    pub members: SmallVec<[String; 4]>,
    #[serde(default)]
    pub card: ScoreCard,
    /// Index into `members` of whoever throws next for this team.
    #[serde(default)]
    pub thrower: usize,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, name: String) -> Self {
        Self {
            id,
            name,
            members: SmallVec::new(),
            card: ScoreCard::default(),
            thrower: 0,
        }
    }

    #[must_use]
    pub fn current_thrower(&self) -> Option<&str> {
        self.members.get(self.thrower).map(String::as_str)
    }

    /// Advance to the next member after this team's throw.
    pub fn rotate_thrower(&mut self) {
        if self.members.is_empty() {
            self.thrower = 0;
        } else {
            self.thrower = (self.thrower + 1) % self.members.len();
        }
    }

    pub fn add_member(&mut self, name: String) {
        self.members.push(name);
    }

    /// Drop a member by name, keeping the thrower cursor in range.
    pub fn remove_member(&mut self, name: &str) -> bool {
        let Some(pos) = self.members.iter().position(|m| m == name) else {
            return false;
        };
        self.members.remove(pos);
        if self.thrower > pos || self.thrower >= self.members.len() {
            self.thrower = self.thrower.saturating_sub(1).min(self.members.len().saturating_sub(1));
        }
        true
    }

    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_of(names: &[&str]) -> Team {
        let mut team = Team::new(TeamId(1), String::from("Reds"));
        for name in names {
            team.add_member((*name).to_string());
        }
        team
    }

    #[test]
    fn thrower_rotates_through_member_order() {
        let mut team = team_of(&["Aino", "Bertta", "Celia"]);
        assert_eq!(team.current_thrower(), Some("Aino"));
        team.rotate_thrower();
        assert_eq!(team.current_thrower(), Some("Bertta"));
        team.rotate_thrower();
        team.rotate_thrower();
        assert_eq!(team.current_thrower(), Some("Aino"));
    }

    #[test]
    fn empty_team_has_no_thrower() {
        let mut team = team_of(&[]);
        assert_eq!(team.current_thrower(), None);
        team.rotate_thrower();
        assert_eq!(team.thrower, 0);
    }

    #[test]
    fn removing_a_member_keeps_cursor_valid() {
        let mut team = team_of(&["Aino", "Bertta", "Celia"]);
        team.rotate_thrower();
        team.rotate_thrower();
        assert_eq!(team.current_thrower(), Some("Celia"));
        assert!(team.remove_member("Celia"));
        assert!(team.current_thrower().is_some());
        assert!(!team.remove_member("Celia"));

        let mut single = team_of(&["Aino"]);
        assert!(single.remove_member("Aino"));
        assert_eq!(single.current_thrower(), None);
    }
}
