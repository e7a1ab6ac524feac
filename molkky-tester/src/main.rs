mod browser;
mod logic;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, flow_for, new_session};
use logic::{
    GameplayStrategy, LogicTester, MatchAggregate, MatchRecord, ScenarioResult, SeedInfo,
    SimulationConfig, SimulationSession, aggregate_matches, resolve_seed_inputs,
    validate_match_targets,
};
use logic::metrics::GameMetrics;
use scenario::{ScenarioCtx, all_scenario_keys, get_scenario, list_scenarios};
use util::{artifacts_dir, capture_artifacts, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Pure game logic testing (fast, no browser)
    Logic,
    /// Browser automation testing (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "molkky-tester", version)]
#[command(about = "Automated QA for the Molkky scorekeeper - pure logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, "all" expands the catalog)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated; decimal, 0x-hex, or a name)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Run extended acceptance sweeps (forces >=100 iterations for match analysis)
    #[arg(long)]
    acceptance: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the app (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let analysis_iterations = compute_analysis_iterations(&args);
    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seed_tokens = split_csv(&args.seeds);
    let seed_infos = resolve_seed_inputs(&seed_tokens)?;
    let logic_seeds: Vec<u64> = seed_infos.iter().map(|s| s.seed).collect();

    let all_results = run_logic_scenarios(&args, &scenarios, &logic_seeds);

    run_browser_scenarios(&args, &scenarios, &seed_infos).await?;

    let (match_records, match_aggregates) =
        gather_match_analysis(&args, &seed_infos, analysis_iterations)?;

    write_reports(
        &args,
        &all_results,
        match_records.as_deref(),
        match_aggregates.as_deref(),
        start_time,
    )?;

    if let Some(aggregates) = match_aggregates.as_ref() {
        validate_match_targets(aggregates)?;
    }

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎯 Molkky Automated Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn compute_analysis_iterations(args: &Args) -> usize {
    if args.acceptance {
        if args.iterations < 100 {
            println!(
                "🔁 Acceptance mode: increasing match analysis iterations from {} to 100",
                args.iterations
            );
        }
        args.iterations.max(100)
    } else {
        args.iterations
    }
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.contains(&"all".to_string()) {
        scenarios.retain(|s| s != "all");
        for key in all_scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn parse_browser_kind(name: &str) -> Option<BrowserKind> {
    match name {
        "chrome" => Some(BrowserKind::Chrome),
        "edge" => Some(BrowserKind::Edge),
        "firefox" => Some(BrowserKind::Firefox),
        "safari" => Some(BrowserKind::Safari),
        _ => None,
    }
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results: Vec<ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.verbose);
    for name in scenarios {
        match get_scenario(name) {
            Some(scenario) => {
                if let Some(check) = scenario.logic {
                    results.push(tester.run_scenario(name, check, seeds, args.iterations));
                } else {
                    eprintln!(
                        "⚠️  Scenario {} has no logic test implementation",
                        name.yellow()
                    );
                }
            }
            None => eprintln!("⚠️  Unknown scenario: {}", name.yellow()),
        }
    }

    results
}

async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    seed_infos: &[SeedInfo],
) -> Result<()> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(());
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = parse_browser_kind(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let cfg = build_browser_config(args);
        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        run_flows_for_driver(args, scenarios, seed_infos, kind, &driver).await;
        let _ = driver.quit().await;
    }

    Ok(())
}

async fn run_flows_for_driver(
    args: &Args,
    scenarios: &[String],
    seed_infos: &[SeedInfo],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) {
    for name in scenarios {
        let Some(flow) = flow_for(name) else {
            continue;
        };
        for seed_info in seed_infos {
            let ctx = ScenarioCtx {
                base_url: args.base_url.clone(),
                seed: seed_info.seed,
                verbose: args.verbose,
            };
            let label = kind.label();
            let dir = artifacts_dir(&args.artifacts_dir, &label, name, seed_info.seed);

            let started = Instant::now();
            match flow.run(driver, &ctx).await {
                Ok(()) => {
                    println!(
                        "✅ [{} seed {}] {} - {:?}",
                        label.green(),
                        seed_info.seed,
                        name,
                        started.elapsed()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "❌ [{} seed {}] {} - {:?}: {:#}",
                        label.red(),
                        seed_info.seed,
                        name,
                        started.elapsed(),
                        e
                    );
                    let _ = capture_artifacts(driver, &dir, &e).await;
                }
            }
        }
    }
}

type MatchSummary = (Option<Vec<MatchRecord>>, Option<Vec<MatchAggregate>>);

fn gather_match_analysis(
    args: &Args,
    seed_infos: &[SeedInfo],
    iterations: usize,
) -> Result<MatchSummary> {
    let require_analysis = matches!(args.report.as_str(), "console" | "csv")
        || matches!(args.mode, TestMode::Logic | TestMode::Both);
    if !require_analysis {
        return Ok((None, None));
    }

    let mut records = Vec::new();
    for strategy in GameplayStrategy::ALL {
        for seed_info in seed_infos {
            for iteration in 0..iterations.max(1) {
                let seed = seed_info.seed.wrapping_add(iteration as u64);
                let mut session =
                    SimulationSession::new(SimulationConfig::new(strategy, seed))
                        .context("building analysis game")?;
                session.run_to_completion()?;
                let throws = session.throws();
                records.push(MatchRecord {
                    scenario_name: "match-analysis".to_string(),
                    strategy,
                    seed,
                    metrics: GameMetrics::collect(&session.into_state(), throws),
                });
            }
        }
    }
    let aggregates = aggregate_matches(&records);
    Ok((Some(records), Some(aggregates)))
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    match_records: Option<&[MatchRecord]>,
    match_aggregates: Option<&[MatchAggregate]>,
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                logic::reports::generate_json_report(&mut output_target, results)?;
            }
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Molkky Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        "csv" => {
            if let Some(records) = match_records {
                logic::reports::generate_csv_report(&mut output_target, records)?;
            } else {
                writeln!(&mut output_target, "[]")?;
            }
        }
        _ => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else if let Some(aggregates) = match_aggregates {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    aggregates,
                    duration,
                )?;
            } else {
                writeln!(&mut output_target, "Match analysis unavailable.")?;
            }
        }
    }

    let duration = start_time.elapsed();
    writeln!(&mut output_target)?;
    writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
