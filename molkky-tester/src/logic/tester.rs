use std::time::{Duration, Instant};

use colored::Colorize;
use serde::Serialize;

use crate::scenario::catalog::LogicCheck;

/// Outcome of running one logic scenario across seeds and iterations.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(skip)]
    pub average_duration: Duration,
}

/// Runs logic checks and keeps score.
#[derive(Debug, Clone, Copy)]
pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[must_use]
    pub fn run_scenario(
        &self,
        name: &str,
        check: LogicCheck,
        seeds: &[u64],
        iterations: usize,
    ) -> ScenarioResult {
        let mut failures = Vec::new();
        let mut durations = Vec::new();
        let mut successes = 0_usize;
        let mut run = 0_usize;

        for &seed in seeds {
            for iteration in 0..iterations.max(1) {
                // Vary the seed per iteration so repeats explore new games.
                let iter_seed = seed.wrapping_add(iteration as u64);
                let start = Instant::now();
                let result = check(iter_seed);
                durations.push(start.elapsed());
                run += 1;
                match result {
                    Ok(()) => successes += 1,
                    Err(err) => {
                        failures.push(format!("seed {iter_seed}: {err:#}"));
                    }
                }
            }
        }

        let passed = failures.is_empty();
        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        if passed {
            println!("✅ {} ({run} iterations)", name.green());
        } else {
            eprintln!("❌ {} ({} failures)", name.red(), failures.len());
        }
        if self.verbose {
            for failure in &failures {
                eprintln!("   {failure}");
            }
        }

        ScenarioResult {
            scenario_name: name.to_string(),
            passed,
            iterations_run: run,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}
