use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::logic::metrics::{MatchAggregate, MatchRecord};
use crate::logic::tester::ScenarioResult;

/// # Errors
///
/// Returns an error if serialization or the writer fails.
pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Molkky Logic Test Results\n")?;
    writeln!(out, "| Scenario | Passed | Iterations | Failures |")?;
    writeln!(out, "|----------|--------|------------|----------|")?;
    for r in results {
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            r.scenario_name,
            if r.passed { "✅" } else { "❌" },
            r.iterations_run,
            r.failures.len()
        )?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate_csv_report(out: &mut dyn Write, records: &[MatchRecord]) -> Result<()> {
    writeln!(
        out,
        "scenario,strategy,seed,rounds,throws,overflows,eliminations,penalties,winner,drawn"
    )?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            r.scenario_name,
            r.strategy.name(),
            r.seed,
            r.metrics.rounds,
            r.metrics.throws,
            r.metrics.overflows,
            r.metrics.eliminations,
            r.metrics.penalties,
            r.metrics.winner.as_deref().unwrap_or("-"),
            r.metrics.drawn
        )?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the writer fails.
pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    aggregates: &[MatchAggregate],
    duration: Duration,
) -> Result<()> {
    writeln!(out, "Scenario Summary")?;
    writeln!(out, "----------------")?;
    for r in results {
        writeln!(
            out,
            "{:<24} {:>4}/{:<4} {}",
            r.scenario_name,
            r.successful_iterations,
            r.iterations_run,
            if r.passed { "ok" } else { "FAILED" }
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Match Analysis Summary")?;
    writeln!(out, "----------------------")?;
    for a in aggregates {
        writeln!(
            out,
            "{:<12} n={:<4} rounds {:>5.1} throws {:>6.1} win {:>5.1}% draw {:>5.1}% overflow {:>4.2} elim {:>4.2}",
            a.strategy.name(),
            a.iterations,
            a.mean_rounds,
            a.mean_throws,
            a.win_rate * 100.0,
            a.draw_rate * 100.0,
            a.mean_overflows,
            a.mean_eliminations
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Completed in {duration:?}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::metrics::GameMetrics;
    use crate::logic::policy::GameplayStrategy;

    fn sample_result() -> ScenarioResult {
        ScenarioResult {
            scenario_name: "smoke".to_string(),
            passed: true,
            iterations_run: 3,
            successful_iterations: 3,
            failures: Vec::new(),
            average_duration: Duration::from_millis(1),
        }
    }

    fn sample_record() -> MatchRecord {
        MatchRecord {
            scenario_name: "analysis".to_string(),
            strategy: GameplayStrategy::Balanced,
            seed: 42,
            metrics: GameMetrics {
                rounds: 9,
                throws: 31,
                overflows: 1,
                eliminations: 0,
                penalties: 1,
                winner: Some("Player 2".to_string()),
                drawn: false,
            },
        }
    }

    #[test]
    fn json_report_is_valid_json() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[sample_result()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["scenario_name"], "smoke");
    }

    #[test]
    fn markdown_report_tables_each_scenario() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[sample_result()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Molkky Logic Test Results"));
        assert!(text.contains("| smoke |"));
    }

    #[test]
    fn csv_report_has_header_and_rows() {
        let mut buf = Vec::new();
        generate_csv_report(&mut buf, &[sample_record()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("scenario,strategy,seed"));
        assert!(text.contains("analysis,balanced,42"));
    }

    #[test]
    fn console_report_includes_match_analysis() {
        let records = [sample_record()];
        let aggregates = crate::logic::metrics::aggregate_matches(&records);
        let mut buf = Vec::new();
        generate_console_report(
            &mut buf,
            &[sample_result()],
            &aggregates,
            Duration::from_secs(1),
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Match Analysis Summary"));
        assert!(text.contains("balanced"));
    }
}
