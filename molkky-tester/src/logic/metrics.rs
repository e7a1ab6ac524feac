use anyhow::Result;
use serde::Serialize;

use molkky_game::{GamePhase, GameState};

use crate::logic::policy::GameplayStrategy;

/// What one finished simulation looked like.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub rounds: u32,
    pub throws: u32,
    pub overflows: u32,
    pub eliminations: u32,
    pub penalties: u32,
    pub winner: Option<String>,
    pub drawn: bool,
}

impl GameMetrics {
    /// Read the metrics off a finished game.
    #[must_use]
    pub fn collect(state: &GameState, throws: u32) -> Self {
        debug_assert_eq!(state.phase, GamePhase::Finished);
        let overflows = state
            .logs
            .iter()
            .filter(|l| l.as_str() == "log.throw.overflow")
            .count();
        let views = state.contender_views();
        let eliminations = views.iter().filter(|v| v.card.eliminated).count();
        let penalties: u32 = views.iter().map(|v| v.card.penalties).sum();
        let winner = state.winner_name();
        Self {
            rounds: state.turn.round,
            throws,
            overflows: u32::try_from(overflows).unwrap_or(u32::MAX),
            eliminations: u32::try_from(eliminations).unwrap_or(u32::MAX),
            penalties,
            drawn: winner.is_none(),
            winner,
        }
    }
}

/// One simulated match in the analysis sweep.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub scenario_name: String,
    pub strategy: GameplayStrategy,
    pub seed: u64,
    pub metrics: GameMetrics,
}

/// Aggregate over all iterations of one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct MatchAggregate {
    pub strategy: GameplayStrategy,
    pub iterations: usize,
    pub mean_rounds: f64,
    pub mean_throws: f64,
    pub max_throws: u32,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub mean_overflows: f64,
    pub mean_eliminations: f64,
}

#[must_use]
pub fn aggregate_matches(records: &[MatchRecord]) -> Vec<MatchAggregate> {
    GameplayStrategy::ALL
        .iter()
        .filter_map(|strategy| {
            let subset: Vec<&MatchRecord> = records
                .iter()
                .filter(|r| r.strategy == *strategy)
                .collect();
            if subset.is_empty() {
                return None;
            }
            #[allow(clippy::cast_precision_loss)]
            let n = subset.len() as f64;
            let mean = |f: &dyn Fn(&MatchRecord) -> f64| {
                subset.iter().map(|r| f(r)).sum::<f64>() / n
            };
            Some(MatchAggregate {
                strategy: *strategy,
                iterations: subset.len(),
                mean_rounds: mean(&|r| f64::from(r.metrics.rounds)),
                mean_throws: mean(&|r| f64::from(r.metrics.throws)),
                max_throws: subset.iter().map(|r| r.metrics.throws).max().unwrap_or(0),
                win_rate: mean(&|r| if r.metrics.drawn { 0.0 } else { 1.0 }),
                draw_rate: mean(&|r| if r.metrics.drawn { 1.0 } else { 0.0 }),
                mean_overflows: mean(&|r| f64::from(r.metrics.overflows)),
                mean_eliminations: mean(&|r| f64::from(r.metrics.eliminations)),
            })
        })
        .collect()
}

/// Sanity targets the sweep must meet before a release is considered playable.
///
/// # Errors
///
/// Returns an error naming the first violated target.
pub fn validate_match_targets(aggregates: &[MatchAggregate]) -> Result<()> {
    for agg in aggregates {
        anyhow::ensure!(
            (agg.win_rate + agg.draw_rate - 1.0).abs() < 1e-9,
            "{}: every game must end in a win or a draw",
            agg.strategy.name()
        );
        anyhow::ensure!(
            agg.max_throws < 2_000,
            "{}: some game ran into the throw budget",
            agg.strategy.name()
        );
        anyhow::ensure!(
            agg.mean_rounds >= 2.0,
            "{}: games end suspiciously fast (mean {:.1} rounds)",
            agg.strategy.name(),
            agg.mean_rounds
        );
    }
    Ok(())
}
