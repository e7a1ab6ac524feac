pub mod catalog;

pub use catalog::{Scenario, all_scenario_keys, get_scenario, list_scenarios};

/// Everything a browser flow needs besides the driver itself.
pub struct ScenarioCtx {
    pub base_url: String,
    pub seed: u64,
    pub verbose: bool,
}
