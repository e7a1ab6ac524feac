pub mod metrics;
pub mod policy;
pub mod reports;
pub mod seeds;
pub mod simulation;
pub mod tester;

pub use metrics::{GameMetrics, MatchAggregate, MatchRecord, aggregate_matches, validate_match_targets};
pub use policy::GameplayStrategy;
pub use seeds::{SeedInfo, resolve_seed_inputs};
pub use simulation::{SimulationConfig, SimulationSession};
pub use tester::{LogicTester, ScenarioResult};
