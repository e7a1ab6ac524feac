use anyhow::{Context, Result, ensure};

use molkky_game::{
    ContenderId, GamePhase, GameState, OutOfTurnOutcome, PenaltyOutcome, PlayMode,
    SessionSnapshot, ThrowOutcome,
};

use crate::logic::policy::GameplayStrategy;
use crate::logic::simulation::{SimulationConfig, SimulationSession};

pub type LogicCheck = fn(u64) -> Result<()>;

/// One named QA scenario; `logic` runs headless, `browser` marks that the
/// browser runner has a flow for the same key.
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub logic: Option<LogicCheck>,
    pub browser: bool,
}

fn two_player_game(seed: u64) -> Result<GameState> {
    let mut state = GameState::new();
    state.add_player("Aino")?;
    state.add_player("Bertta")?;
    state.start_game(seed)?;
    Ok(state)
}

fn check_smoke(seed: u64) -> Result<()> {
    let mut session = SimulationSession::new(
        SimulationConfig::new(GameplayStrategy::Balanced, seed).with_players(2),
    )?;
    session.run_to_completion()?;
    ensure!(
        session.state().phase == GamePhase::Finished,
        "smoke game must finish"
    );
    Ok(())
}

fn check_exact_finish(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    state.players[0].card.score = 44;
    let outcome = state.record_throw(6)?;
    ensure!(outcome == ThrowOutcome::Win, "expected a win, got {outcome:?}");
    ensure!(state.winner_name().as_deref() == Some("Aino"));
    ensure!(state.phase == GamePhase::Finished);
    Ok(())
}

fn check_overflow_reset(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    state.players[0].card.score = 45;
    let outcome = state.record_throw(8)?;
    ensure!(outcome == ThrowOutcome::Overflow);
    ensure!(state.players[0].card.score == 25, "overflow resets to 25");
    ensure!(state.players[0].card.penalties == 1);
    ensure!(
        state.active_thrower().as_deref() == Some("Bertta"),
        "turn passes after an overflow"
    );
    Ok(())
}

fn check_miss_elimination(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    for _ in 0..2 {
        ensure!(matches!(state.record_throw(0)?, ThrowOutcome::Miss { .. }));
        state.record_throw(5)?; // Bertta keeps scoring
    }
    let outcome = state.record_throw(0)?;
    ensure!(outcome == ThrowOutcome::Eliminated);
    ensure!(state.players[0].card.eliminated);
    Ok(())
}

fn check_penalty_threshold(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    state.players[0].card.score = 37;
    state.players[0].card.consecutive_misses = 2;
    let outcome = state.record_throw(0)?;
    ensure!(outcome == ThrowOutcome::PenaltyReset);
    ensure!(!state.players[0].card.eliminated, "37+ survives the streak");
    ensure!(state.players[0].card.score == 25);

    // Manual penalty below the threshold eliminates instead.
    let bertta = ContenderId::Player(state.players[1].id);
    ensure!(state.apply_penalty(bertta)? == PenaltyOutcome::Eliminated);
    Ok(())
}

fn check_out_of_turn(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    let bertta = ContenderId::Player(state.players[1].id);
    state.players[1].card.score = 36;
    ensure!(state.report_out_of_turn(bertta)? == OutOfTurnOutcome::Ignored);
    ensure!(state.players[1].card.score == 36, "below 37 nothing changes");

    state.players[1].card.score = 37;
    ensure!(state.report_out_of_turn(bertta)? == OutOfTurnOutcome::Reset);
    ensure!(state.players[1].card.score == 25);
    ensure!(
        state.active_thrower().as_deref() == Some("Aino"),
        "reporting never moves the turn"
    );
    Ok(())
}

fn check_team_rotation(seed: u64) -> Result<()> {
    let mut state = GameState::new();
    state.set_mode(PlayMode::Teams)?;
    for name in ["Aino", "Bertta", "Celia", "Daniela"] {
        state.add_player(name)?;
    }
    let home = state.add_team("Home")?;
    let away = state.add_team("Away")?;
    state.assign_player(home, "Aino")?;
    state.assign_player(home, "Bertta")?;
    state.assign_player(away, "Celia")?;
    state.assign_player(away, "Daniela")?;
    state.start_game(seed)?;

    let mut throwers = Vec::new();
    for _ in 0..4 {
        throwers.push(state.active_thrower().context("someone must throw")?);
        state.record_throw(3)?;
    }
    ensure!(
        throwers == ["Aino", "Celia", "Bertta", "Daniela"],
        "rotation order was {throwers:?}"
    );
    Ok(())
}

fn check_all_eliminated(seed: u64) -> Result<()> {
    let mut state = two_player_game(seed)?;
    while state.phase == GamePhase::Playing {
        state.record_throw(0)?;
    }
    ensure!(state.winner.is_none(), "nobody can win a drawn game");
    ensure!(state.logs.iter().any(|l| l == "log.game.drawn"));
    Ok(())
}

fn check_snapshot_roundtrip(seed: u64) -> Result<()> {
    let mut session = SimulationSession::new(
        SimulationConfig::new(GameplayStrategy::Aggressive, seed).with_players(3),
    )?;
    for _ in 0..5 {
        if session.state().phase != GamePhase::Playing {
            break;
        }
        session.advance()?;
    }
    let state = session.into_state();
    let snapshot = SessionSnapshot::new(Some(state), molkky_game::GameHistory::default());
    let json = serde_json::to_string(&snapshot)?;
    let restored: SessionSnapshot = serde_json::from_str(&json)?;
    ensure!(restored == snapshot, "snapshot must round-trip losslessly");
    Ok(())
}

fn check_match_termination(seed: u64) -> Result<()> {
    for strategy in GameplayStrategy::ALL {
        let mut session = SimulationSession::new(
            SimulationConfig::new(strategy, seed).with_players(6),
        )?;
        session.run_to_completion()?;
    }
    Ok(())
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Two-player game runs start to finish",
        logic: Some(check_smoke),
        browser: true,
    },
    Scenario {
        key: "exact-finish",
        description: "Hitting exactly 50 wins and finishes the game",
        logic: Some(check_exact_finish),
        browser: false,
    },
    Scenario {
        key: "overflow-reset",
        description: "Going past 50 resets to 25 and counts a penalty",
        logic: Some(check_overflow_reset),
        browser: false,
    },
    Scenario {
        key: "miss-elimination",
        description: "Three straight misses eliminate a low scorer",
        logic: Some(check_miss_elimination),
        browser: false,
    },
    Scenario {
        key: "penalty-threshold",
        description: "At 37+ penalties reset to 25 instead of eliminating",
        logic: Some(check_penalty_threshold),
        browser: false,
    },
    Scenario {
        key: "out-of-turn",
        description: "Out-of-turn throws only punish scores of 37 or more",
        logic: Some(check_out_of_turn),
        browser: false,
    },
    Scenario {
        key: "team-rotation",
        description: "Team mode rotates throwers within each team",
        logic: Some(check_team_rotation),
        browser: false,
    },
    Scenario {
        key: "all-eliminated",
        description: "A fully eliminated field ends the game without a winner",
        logic: Some(check_all_eliminated),
        browser: false,
    },
    Scenario {
        key: "snapshot-roundtrip",
        description: "Mid-game session snapshots survive serialization",
        logic: Some(check_snapshot_roundtrip),
        browser: false,
    },
    Scenario {
        key: "match-termination",
        description: "Simulated matches terminate for every strategy",
        logic: Some(check_match_termination),
        browser: false,
    },
    Scenario {
        key: "full-game",
        description: "Browser: play a whole game through the UI",
        logic: None,
        browser: true,
    },
];

#[must_use]
pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_logic_scenario_passes_on_a_reference_seed() {
        for scenario in SCENARIOS {
            if let Some(check) = scenario.logic {
                check(1337).unwrap_or_else(|e| panic!("{} failed: {e:#}", scenario.key));
            }
        }
    }

    #[test]
    fn catalog_lookup_and_listing_agree() {
        assert!(get_scenario("smoke").is_some());
        assert!(get_scenario("nope").is_none());
        assert_eq!(list_scenarios().len(), SCENARIOS.len());
        assert!(all_scenario_keys().contains(&"full-game".to_string()));
    }

    #[test]
    fn scenario_keys_are_unique() {
        let mut keys = all_scenario_keys();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SCENARIOS.len());
    }
}
