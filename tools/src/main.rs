//! sim-runner: headless runner for the cohort economy simulator.
//!
//! Usage:
//!   sim-runner --years 100 --fertility 100
//!   sim-runner --config data/economy.json --format json
//!   sim-runner --sweep-fertility 50,100,150,200

use anyhow::{bail, Result};
use cohort_core::{
    config::SimConfig,
    engine::SimEngine,
    report::{render_table, RunReport, RunSummary},
    sweep::{fertility_variants, run_sweep, SweepOutcome, SweepRecord},
};
use std::env;
use std::process::ExitCode;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("sim-runner failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = build_config(&args)?;
    let format = match string_arg(&args, "--format").unwrap_or("table") {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        other => bail!("unknown --format '{other}' (expected table or json)"),
    };

    if let Some(rates) = string_arg(&args, "--sweep-fertility") {
        let rates = rates
            .split(',')
            .map(|r| r.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()?;
        return run_fertility_sweep(&config, &rates, format);
    }

    let run_id = format!("run-f{}-y{}", config.fertility_rate, config.years);
    let mut engine = SimEngine::new(run_id.clone(), config)?;
    let outcome = engine.run();

    match format {
        OutputFormat::Table => {
            print!("{}", render_table(&engine.rows()?));
            if let Some(summary) = RunSummary::from_history(engine.history()) {
                println!();
                print_summary(&run_id, &summary);
            }
        }
        OutputFormat::Json => {
            let report = RunReport {
                run_id,
                config:    engine.config().clone(),
                rows:      engine.rows()?,
                halted_at: engine.halted_at(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    outcome?;
    Ok(())
}

/// Defaults, then the optional --config file, then per-field flags.
fn build_config(args: &[String]) -> Result<SimConfig> {
    let mut config = match string_arg(args, "--config") {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    config.years = parse_arg(args, "--years", config.years)?;
    config.fertility_rate = parse_arg(args, "--fertility", config.fertility_rate)?;
    config.adulthood_age = parse_arg(args, "--adulthood-age", config.adulthood_age)?;
    config.senior_age = parse_arg(args, "--senior-age", config.senior_age)?;
    config.longevity = parse_arg(args, "--longevity", config.longevity)?;
    config.starting_amount_of_coin = parse_arg(args, "--coin", config.starting_amount_of_coin)?;
    config.young = parse_arg(args, "--young", config.young)?;
    config.adults = parse_arg(args, "--adults", config.adults)?;
    config.senior = parse_arg(args, "--senior", config.senior)?;

    config.validate()?;
    Ok(config)
}

fn run_fertility_sweep(base: &SimConfig, rates: &[u32], format: OutputFormat) -> Result<()> {
    let outcomes = run_sweep("fertility", fertility_variants(base, rates));
    let failures = outcomes.iter().filter(|o| !o.completed()).count();

    match format {
        OutputFormat::Table => print_sweep_table(base, &outcomes),
        OutputFormat::Json => {
            let runs: Vec<SweepRecord> = outcomes.iter().map(SweepRecord::from).collect();
            println!("{}", serde_json::to_string_pretty(&runs)?);
        }
    }

    if failures > 0 {
        bail!("{failures} of {} sweep runs failed", outcomes.len());
    }
    Ok(())
}

fn print_sweep_table(base: &SimConfig, outcomes: &[SweepOutcome]) {
    println!("=== FERTILITY SWEEP ({} years) ===", base.years);
    for outcome in outcomes {
        let fertility = outcome.config.fertility_rate;
        match (&outcome.summary, &outcome.error) {
            (Some(s), None) => println!(
                "  fertility {fertility:>4}% | adults: {:>8} | salary: {:>10.2} | \
                 salary range: {:.2}..{:.2} | peak dependent: {:.2}",
                s.final_adults, s.final_salary, s.min_salary, s.max_salary, s.peak_dependent
            ),
            (_, Some(e)) => println!("  fertility {fertility:>4}% | FAILED: {e}"),
            (None, None) => println!("  fertility {fertility:>4}% | no data"),
        }
    }
}

fn print_summary(run_id: &str, summary: &RunSummary) {
    println!("=== RUN SUMMARY ===");
    println!("  run_id:          {run_id}");
    println!("  final year:      {}", summary.final_year);
    println!("  final adults:    {}", summary.final_adults);
    println!("  final salary:    {:.2}", summary.final_salary);
    println!("  salary range:    {:.2}..{:.2}", summary.min_salary, summary.max_salary);
    println!("  peak dependent:  {:.2}", summary.peak_dependent);
    println!("  peak population: {}", summary.peak_population);
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match string_arg(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid value '{raw}' for {flag}: {e}")),
        None => Ok(default),
    }
}
