use std::fmt;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::{Player, PlayerId, normalize_name};
use crate::scoring::{
    OutOfTurnOutcome, PenaltyOutcome, ScoreCard, ThrowOutcome, is_valid_throw,
};
use crate::team::{Team, TeamId};
use crate::turn::TurnCursor;

/// A game needs at least two scoring sides, whatever the mode.
pub const MIN_CONTENDERS: usize = 2;

const LOG_GAME_STARTED: &str = "log.game.started";
const LOG_GAME_DRAWN: &str = "log.game.drawn";
const LOG_ORDER_SHUFFLED: &str = "log.order.shuffled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    #[default]
    FreeForAll,
    Teams,
}

impl PlayMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FreeForAll => "free_for_all",
            Self::Teams => "teams",
        }
    }

    #[must_use]
    pub const fn is_teams(self) -> bool {
        matches!(self, Self::Teams)
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    Finished,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a scoring side: an individual or a team, depending on mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContenderId {
    Player(PlayerId),
    Team(TeamId),
}

/// Owned per-contender summary for rendering a scoreboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContenderView {
    pub id: ContenderId,
    pub name: String,
    pub card: ScoreCard,
    /// In team mode, the member whose throw is next.
    pub throwing: Option<String>,
    pub active: bool,
}

/// The whole game: roster, scores, turn cursor, and the event journal.
///
/// Mutating operations either succeed and journal an event key, or return a
/// [`GameError`] and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameState {
    #[serde(default)]
    pub mode: PlayMode,
    #[serde(default)]
    pub phase: GamePhase,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub turn: TurnCursor,
    #[serde(default)]
    pub winner: Option<ContenderId>,
    #[serde(default)]
    pub started_at_ms: Option<u64>,
    #[serde(default)]
    pub ended_at_ms: Option<u64>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    next_player_id: u32,
    #[serde(default)]
    next_team_id: u32,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn require_phase(&self, needed: GamePhase) -> Result<(), GameError> {
        if self.phase == needed {
            Ok(())
        } else {
            Err(GameError::WrongPhase { needed })
        }
    }

    fn player_name_taken(&self, name: &str, exclude: Option<PlayerId>) -> bool {
        self.players
            .iter()
            .any(|p| p.name == name && Some(p.id) != exclude)
    }

    // -- roster -----------------------------------------------------------

    /// Add a player to the roster during setup.
    ///
    /// # Errors
    ///
    /// Rejects outside the setup phase, on invalid names, and on duplicates.
    pub fn add_player(&mut self, raw_name: &str) -> Result<PlayerId, GameError> {
        self.require_phase(GamePhase::Setup)?;
        let name = normalize_name(raw_name)?;
        if self.player_name_taken(&name, None) {
            return Err(GameError::NameTaken { name });
        }
        self.next_player_id += 1;
        let id = PlayerId(self.next_player_id);
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Rename a rostered player during setup.
    ///
    /// # Errors
    ///
    /// Rejects outside setup, on invalid or duplicate names, and on unknown ids.
    pub fn rename_player(&mut self, id: PlayerId, raw_name: &str) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let name = normalize_name(raw_name)?;
        if self.player_name_taken(&name, Some(id)) {
            return Err(GameError::NameTaken { name });
        }
        let old = {
            let player = self
                .players
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(GameError::UnknownContender)?;
            std::mem::replace(&mut player.name, name.clone())
        };
        for team in &mut self.teams {
            if let Some(slot) = team.members.iter_mut().find(|m| **m == old) {
                *slot = name.clone();
            }
        }
        Ok(())
    }

    /// Remove a player from the roster (and any team) during setup.
    ///
    /// # Errors
    ///
    /// Rejects outside setup and on unknown ids.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let pos = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::UnknownContender)?;
        let removed = self.players.remove(pos);
        for team in &mut self.teams {
            team.remove_member(&removed.name);
        }
        Ok(())
    }

    /// Switch between free-for-all and team play during setup.
    ///
    /// # Errors
    ///
    /// Rejects outside the setup phase.
    pub fn set_mode(&mut self, mode: PlayMode) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        self.mode = mode;
        Ok(())
    }

    /// Create a team during setup (team mode only).
    ///
    /// # Errors
    ///
    /// Rejects outside setup, outside team mode, and on bad or duplicate names.
    pub fn add_team(&mut self, raw_name: &str) -> Result<TeamId, GameError> {
        self.require_phase(GamePhase::Setup)?;
        if !self.mode.is_teams() {
            return Err(GameError::TeamsOnly);
        }
        let name = normalize_name(raw_name)?;
        if self.teams.iter().any(|t| t.name == name) {
            return Err(GameError::NameTaken { name });
        }
        self.next_team_id += 1;
        let id = TeamId(self.next_team_id);
        self.teams.push(Team::new(id, name));
        Ok(id)
    }

    /// Remove a team; its members return to the unassigned pool.
    ///
    /// # Errors
    ///
    /// Rejects outside setup and on unknown ids.
    pub fn remove_team(&mut self, id: TeamId) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let pos = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(GameError::UnknownContender)?;
        self.teams.remove(pos);
        Ok(())
    }

    /// Assign a rostered player to a team, moving them if already assigned.
    ///
    /// # Errors
    ///
    /// Rejects outside setup, outside team mode, and on unknown players/teams.
    pub fn assign_player(&mut self, team: TeamId, player_name: &str) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        if !self.mode.is_teams() {
            return Err(GameError::TeamsOnly);
        }
        if !self.players.iter().any(|p| p.name == player_name) {
            return Err(GameError::UnknownContender);
        }
        if !self.teams.iter().any(|t| t.id == team) {
            return Err(GameError::UnknownContender);
        }
        for other in &mut self.teams {
            other.remove_member(player_name);
        }
        let slot = self
            .teams
            .iter_mut()
            .find(|t| t.id == team)
            .ok_or(GameError::UnknownContender)?;
        slot.add_member(player_name.to_string());
        Ok(())
    }

    /// Names of rostered players not currently on any team.
    #[must_use]
    pub fn unassigned_players(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|p| !self.teams.iter().any(|t| t.has_member(&p.name)))
            .map(|p| p.name.clone())
            .collect()
    }

    /// Shuffle the throwing order deterministically from a seed.
    ///
    /// # Errors
    ///
    /// Rejects outside the setup phase.
    pub fn shuffle_order(&mut self, seed: u64) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        if self.mode.is_teams() {
            self.teams.shuffle(&mut rng);
        } else {
            self.players.shuffle(&mut rng);
        }
        self.logs.push(String::from(LOG_ORDER_SHUFFLED));
        Ok(())
    }

    // -- lifecycle --------------------------------------------------------

    /// Validate the roster and move from setup into play.
    ///
    /// `now_ms` is an epoch-milliseconds stamp supplied by the platform layer.
    ///
    /// # Errors
    ///
    /// Rejects outside setup, with too few contenders, with empty teams, or
    /// with unassigned players in team mode.
    pub fn start_game(&mut self, now_ms: u64) -> Result<(), GameError> {
        self.require_phase(GamePhase::Setup)?;
        if self.mode.is_teams() {
            if self.teams.len() < MIN_CONTENDERS {
                return Err(GameError::NotEnoughContenders {
                    required: MIN_CONTENDERS,
                });
            }
            if let Some(empty) = self.teams.iter().find(|t| t.members.is_empty()) {
                return Err(GameError::EmptyTeam {
                    name: empty.name.clone(),
                });
            }
            let unassigned = self.unassigned_players().len();
            if unassigned > 0 {
                return Err(GameError::UnassignedPlayers { count: unassigned });
            }
        } else if self.players.len() < MIN_CONTENDERS {
            return Err(GameError::NotEnoughContenders {
                required: MIN_CONTENDERS,
            });
        }

        for player in &mut self.players {
            player.card = ScoreCard::default();
        }
        for team in &mut self.teams {
            team.card = ScoreCard::default();
            team.thrower = 0;
        }
        self.turn = TurnCursor::default();
        self.winner = None;
        self.started_at_ms = Some(now_ms);
        self.ended_at_ms = None;
        self.phase = GamePhase::Playing;
        self.logs.push(String::from(LOG_GAME_STARTED));
        Ok(())
    }

    /// Stamp the end time once the game has finished.
    pub fn mark_finished_at(&mut self, now_ms: u64) {
        if self.phase == GamePhase::Finished && self.ended_at_ms.is_none() {
            self.ended_at_ms = Some(now_ms);
        }
    }

    /// Return to setup with the same roster for a rematch.
    pub fn reset_for_rematch(&mut self) {
        for player in &mut self.players {
            player.card = ScoreCard::default();
        }
        for team in &mut self.teams {
            team.card = ScoreCard::default();
            team.thrower = 0;
        }
        self.turn = TurnCursor::default();
        self.winner = None;
        self.started_at_ms = None;
        self.ended_at_ms = None;
        self.logs.clear();
        self.phase = GamePhase::Setup;
    }

    // -- views ------------------------------------------------------------

    #[must_use]
    pub fn contender_count(&self) -> usize {
        if self.mode.is_teams() {
            self.teams.len()
        } else {
            self.players.len()
        }
    }

    fn eliminated_flags(&self) -> Vec<bool> {
        if self.mode.is_teams() {
            self.teams.iter().map(|t| t.card.eliminated).collect()
        } else {
            self.players.iter().map(|p| p.card.eliminated).collect()
        }
    }

    fn contender_id_at(&self, index: usize) -> Option<ContenderId> {
        if self.mode.is_teams() {
            self.teams.get(index).map(|t| ContenderId::Team(t.id))
        } else {
            self.players.get(index).map(|p| ContenderId::Player(p.id))
        }
    }

    fn index_of(&self, id: ContenderId) -> Option<usize> {
        match id {
            ContenderId::Player(pid) => self.players.iter().position(|p| p.id == pid),
            ContenderId::Team(tid) => self.teams.iter().position(|t| t.id == tid),
        }
    }

    fn card_mut(&mut self, id: ContenderId) -> Option<&mut ScoreCard> {
        match id {
            ContenderId::Player(pid) => self
                .players
                .iter_mut()
                .find(|p| p.id == pid)
                .map(|p| &mut p.card),
            ContenderId::Team(tid) => self
                .teams
                .iter_mut()
                .find(|t| t.id == tid)
                .map(|t| &mut t.card),
        }
    }

    #[must_use]
    pub fn card_of(&self, id: ContenderId) -> Option<ScoreCard> {
        match id {
            ContenderId::Player(pid) => self.players.iter().find(|p| p.id == pid).map(|p| p.card),
            ContenderId::Team(tid) => self.teams.iter().find(|t| t.id == tid).map(|t| t.card),
        }
    }

    #[must_use]
    pub fn name_of(&self, id: ContenderId) -> Option<String> {
        match id {
            ContenderId::Player(pid) => self
                .players
                .iter()
                .find(|p| p.id == pid)
                .map(|p| p.name.clone()),
            ContenderId::Team(tid) => self
                .teams
                .iter()
                .find(|t| t.id == tid)
                .map(|t| t.name.clone()),
        }
    }

    /// Identity of the contender whose turn it is, while playing.
    #[must_use]
    pub fn active_id(&self) -> Option<ContenderId> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.contender_id_at(self.turn.current)
    }

    /// Display name of whoever throws next: the active player, or in team
    /// mode the active team's current thrower.
    #[must_use]
    pub fn active_thrower(&self) -> Option<String> {
        let id = self.active_id()?;
        match id {
            ContenderId::Player(_) => self.name_of(id),
            ContenderId::Team(tid) => {
                let team = self.teams.iter().find(|t| t.id == tid)?;
                team.current_thrower()
                    .map(str::to_string)
                    .or_else(|| Some(team.name.clone()))
            }
        }
    }

    #[must_use]
    pub fn winner_name(&self) -> Option<String> {
        self.winner.and_then(|id| self.name_of(id))
    }

    /// Scoreboard rows in throwing order.
    #[must_use]
    pub fn contender_views(&self) -> Vec<ContenderView> {
        let active = self.active_id();
        if self.mode.is_teams() {
            self.teams
                .iter()
                .map(|t| ContenderView {
                    id: ContenderId::Team(t.id),
                    name: t.name.clone(),
                    card: t.card,
                    throwing: t.current_thrower().map(str::to_string),
                    active: active == Some(ContenderId::Team(t.id)),
                })
                .collect()
        } else {
            self.players
                .iter()
                .map(|p| ContenderView {
                    id: ContenderId::Player(p.id),
                    name: p.name.clone(),
                    card: p.card,
                    throwing: None,
                    active: active == Some(ContenderId::Player(p.id)),
                })
                .collect()
        }
    }

    // -- play -------------------------------------------------------------

    /// Apply the active contender's throw and advance the turn.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase and on out-of-range point values.
    pub fn record_throw(&mut self, points: i32) -> Result<ThrowOutcome, GameError> {
        self.require_phase(GamePhase::Playing)?;
        if !is_valid_throw(points) {
            return Err(GameError::InvalidPoints { points });
        }
        let active = self.active_id().ok_or(GameError::UnknownContender)?;
        let card = self.card_mut(active).ok_or(GameError::UnknownContender)?;
        let outcome = card.apply_throw(points);
        self.logs.push(String::from(outcome.log_key()));

        if outcome.ends_game() {
            self.winner = Some(active);
            self.phase = GamePhase::Finished;
            return Ok(outcome);
        }

        if let ContenderId::Team(tid) = active
            && let Some(team) = self.teams.iter_mut().find(|t| t.id == tid)
        {
            team.rotate_thrower();
        }
        self.pass_turn();
        Ok(outcome)
    }

    /// Manual penalty against any contender still in the game.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, on unknown ids, and on contenders
    /// that are already eliminated.
    pub fn apply_penalty(&mut self, target: ContenderId) -> Result<PenaltyOutcome, GameError> {
        self.require_phase(GamePhase::Playing)?;
        let was_active = self.active_id() == Some(target);
        let card = self.card_mut(target).ok_or(GameError::UnknownContender)?;
        if card.eliminated {
            return Err(GameError::AlreadyEliminated);
        }
        let outcome = card.apply_penalty();
        self.logs.push(String::from(outcome.log_key()));
        if outcome == PenaltyOutcome::Eliminated && was_active {
            self.pass_turn();
        } else if outcome == PenaltyOutcome::Eliminated {
            self.finish_if_field_empty();
        }
        Ok(outcome)
    }

    /// Report a throw made out of turn by any contender still in the game.
    ///
    /// # Errors
    ///
    /// Rejects outside the playing phase, on unknown ids, and on contenders
    /// that are already eliminated.
    pub fn report_out_of_turn(
        &mut self,
        target: ContenderId,
    ) -> Result<OutOfTurnOutcome, GameError> {
        self.require_phase(GamePhase::Playing)?;
        let card = self.card_mut(target).ok_or(GameError::UnknownContender)?;
        if card.eliminated {
            return Err(GameError::AlreadyEliminated);
        }
        let outcome = card.apply_out_of_turn();
        self.logs.push(String::from(outcome.log_key()));
        Ok(outcome)
    }

    fn pass_turn(&mut self) {
        let flags = self.eliminated_flags();
        if !self.turn.advance(&flags) {
            self.winner = None;
            self.phase = GamePhase::Finished;
            self.logs.push(String::from(LOG_GAME_DRAWN));
        }
    }

    fn finish_if_field_empty(&mut self) {
        if self.eliminated_flags().iter().all(|&e| e) {
            self.winner = None;
            self.phase = GamePhase::Finished;
            self.logs.push(String::from(LOG_GAME_DRAWN));
        } else {
            let flags = self.eliminated_flags();
            self.turn.reseat(&flags);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_game() -> GameState {
        let mut state = GameState::new();
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.start_game(1_000).unwrap();
        state
    }

    fn active_name(state: &GameState) -> String {
        state
            .active_id()
            .and_then(|id| state.name_of(id))
            .unwrap_or_default()
    }

    #[test]
    fn setup_rejects_duplicates_and_short_rosters() {
        let mut state = GameState::new();
        state.add_player("Aino").unwrap();
        assert_eq!(
            state.add_player(" Aino "),
            Err(GameError::NameTaken {
                name: String::from("Aino")
            })
        );
        assert_eq!(
            state.start_game(0),
            Err(GameError::NotEnoughContenders { required: 2 })
        );
    }

    #[test]
    fn roster_edits_are_setup_only() {
        let mut state = two_player_game();
        assert_eq!(
            state.add_player("Celia"),
            Err(GameError::WrongPhase {
                needed: GamePhase::Setup
            })
        );
        assert_eq!(
            state.shuffle_order(1),
            Err(GameError::WrongPhase {
                needed: GamePhase::Setup
            })
        );
    }

    #[test]
    fn overflow_passes_the_turn() {
        // 45 + 8 overshoots: back to 25, one penalty, turn to B.
        let mut state = two_player_game();
        state.players[0].card.score = 45;
        let outcome = state.record_throw(8).unwrap();
        assert_eq!(outcome, ThrowOutcome::Overflow);
        assert_eq!(state.players[0].card.score, 25);
        assert_eq!(state.players[0].card.penalties, 1);
        assert_eq!(active_name(&state), "Bertta");
    }

    #[test]
    fn exact_fifty_finishes_with_winner() {
        let mut state = two_player_game();
        state.players[0].card.score = 44;
        let outcome = state.record_throw(6).unwrap();
        assert_eq!(outcome, ThrowOutcome::Win);
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner_name().as_deref(), Some("Aino"));
        assert_eq!(
            state.record_throw(3),
            Err(GameError::WrongPhase {
                needed: GamePhase::Playing
            })
        );
    }

    #[test]
    fn three_misses_eliminate_and_turn_skips() {
        let mut state = GameState::new();
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.add_player("Celia").unwrap();
        state.start_game(0).unwrap();

        // Aino misses three times across three rounds.
        for _ in 0..2 {
            state.record_throw(0).unwrap(); // Aino
            state.record_throw(4).unwrap(); // Bertta
            state.record_throw(4).unwrap(); // Celia
        }
        let outcome = state.record_throw(0).unwrap();
        assert_eq!(outcome, ThrowOutcome::Eliminated);
        assert!(state.players[0].card.eliminated);
        assert_eq!(active_name(&state), "Bertta");

        // Subsequent rounds never land on Aino again.
        state.record_throw(1).unwrap(); // Bertta
        assert_eq!(active_name(&state), "Celia");
        state.record_throw(1).unwrap(); // Celia
        assert_eq!(active_name(&state), "Bertta");
    }

    #[test]
    fn all_eliminated_ends_drawn() {
        let mut state = two_player_game();
        for _ in 0..3 {
            state.record_throw(0).unwrap(); // Aino
            if state.phase == GamePhase::Playing {
                state.record_throw(0).unwrap(); // Bertta
            }
        }
        assert_eq!(state.phase, GamePhase::Finished);
        assert!(state.winner.is_none());
        assert!(state.logs.iter().any(|l| l == "log.game.drawn"));
    }

    #[test]
    fn penalty_on_active_player_moves_turn() {
        let mut state = two_player_game();
        let aino = state.active_id().unwrap();
        let outcome = state.apply_penalty(aino).unwrap();
        assert_eq!(outcome, PenaltyOutcome::Eliminated);
        assert_eq!(active_name(&state), "Bertta");
        assert_eq!(
            state.apply_penalty(aino),
            Err(GameError::AlreadyEliminated)
        );
    }

    #[test]
    fn out_of_turn_never_moves_the_cursor() {
        let mut state = two_player_game();
        state.players[1].card.score = 40;
        let bertta = ContenderId::Player(state.players[1].id);
        assert_eq!(
            state.report_out_of_turn(bertta).unwrap(),
            OutOfTurnOutcome::Reset
        );
        assert_eq!(state.players[1].card.score, 25);
        assert_eq!(active_name(&state), "Aino");

        state.players[1].card.score = 10;
        assert_eq!(
            state.report_out_of_turn(bertta).unwrap(),
            OutOfTurnOutcome::Ignored
        );
        assert_eq!(state.players[1].card.score, 10);
    }

    #[test]
    fn team_game_rotates_throwers() {
        let mut state = GameState::new();
        state.set_mode(PlayMode::Teams).unwrap();
        for name in ["Aino", "Bertta", "Celia", "Daniela"] {
            state.add_player(name).unwrap();
        }
        let reds = state.add_team("Reds").unwrap();
        let blues = state.add_team("Blues").unwrap();
        state.assign_player(reds, "Aino").unwrap();
        state.assign_player(reds, "Bertta").unwrap();
        state.assign_player(blues, "Celia").unwrap();
        state.assign_player(blues, "Daniela").unwrap();
        state.start_game(0).unwrap();

        assert_eq!(state.active_thrower().as_deref(), Some("Aino"));
        state.record_throw(5).unwrap();
        assert_eq!(state.active_thrower().as_deref(), Some("Celia"));
        state.record_throw(5).unwrap();
        // Second lap: the second member of each team throws.
        assert_eq!(state.active_thrower().as_deref(), Some("Bertta"));
        state.record_throw(5).unwrap();
        assert_eq!(state.active_thrower().as_deref(), Some("Daniela"));
    }

    #[test]
    fn team_start_requires_full_assignment() {
        let mut state = GameState::new();
        state.set_mode(PlayMode::Teams).unwrap();
        state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        state.add_player("Celia").unwrap();
        let reds = state.add_team("Reds").unwrap();
        let blues = state.add_team("Blues").unwrap();
        state.assign_player(reds, "Aino").unwrap();
        assert_eq!(
            state.start_game(0),
            Err(GameError::EmptyTeam {
                name: String::from("Blues")
            })
        );
        state.assign_player(blues, "Bertta").unwrap();
        assert_eq!(
            state.start_game(0),
            Err(GameError::UnassignedPlayers { count: 1 })
        );
        state.assign_player(blues, "Celia").unwrap();
        assert!(state.start_game(0).is_ok());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let build = || {
            let mut state = GameState::new();
            for name in ["Aino", "Bertta", "Celia", "Daniela", "Eveliina"] {
                state.add_player(name).unwrap();
            }
            state
        };
        let mut a = build();
        let mut b = build();
        a.shuffle_order(99).unwrap();
        b.shuffle_order(99).unwrap();
        let order = |s: &GameState| s.players.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        assert_eq!(order(&a), order(&b));
        assert!(a.logs.iter().any(|l| l == "log.order.shuffled"));
    }

    #[test]
    fn rename_follows_into_team_membership() {
        let mut state = GameState::new();
        state.set_mode(PlayMode::Teams).unwrap();
        let id = state.add_player("Aino").unwrap();
        state.add_player("Bertta").unwrap();
        let reds = state.add_team("Reds").unwrap();
        state.assign_player(reds, "Aino").unwrap();
        state.rename_player(id, "Aada").unwrap();
        assert!(state.teams[0].has_member("Aada"));
        assert!(!state.teams[0].has_member("Aino"));
    }

    #[test]
    fn rematch_keeps_roster_and_clears_scores() {
        let mut state = two_player_game();
        state.players[0].card.score = 44;
        state.record_throw(6).unwrap();
        state.mark_finished_at(2_000);
        assert_eq!(state.ended_at_ms, Some(2_000));

        state.reset_for_rematch();
        assert_eq!(state.phase, GamePhase::Setup);
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.players[0].card, ScoreCard::default());
        assert!(state.winner.is_none());
        assert!(state.start_game(3_000).is_ok());
    }

    #[test]
    fn snapshot_roundtrip_preserves_turn_state() {
        let mut state = two_player_game();
        state.record_throw(7).unwrap();
        state.record_throw(0).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.active_id(), state.active_id());
    }
}
