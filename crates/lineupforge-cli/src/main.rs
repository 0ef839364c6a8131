//! Command-line lineup builder.
//!
//! Loads a candidate pool from a JSON file (position label to ordered
//! candidate records), an optimizer configuration from TOML, runs the
//! diversification engine, and prints the lineups as a colored table or
//! as JSON.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{arg, ArgMatches, Command};
use lineupforge::{
    rule_set_from, Candidate, CandidatePool, GoodLpSolver, LineupSolver, OptimizerConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("lineupforge")
        .about("Builds diversified optimal lineups from a candidate pool")
        .arg(
            arg!(<POOL> "Path to a JSON candidate pool (position -> records)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--config <PATH> "Path to a TOML optimizer configuration")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--count <COUNT> "Number of distinct lineups to produce")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--uniques <UNIQUES> "Candidates each later lineup must change")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            arg!(--budget <BUDGET> "Budget ceiling override")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(arg!(--json "Emit lineups as JSON instead of a table"))
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    let config = load_config(&matches)?;
    let pool_path = matches
        .get_one::<PathBuf>("POOL")
        .expect("POOL is required");
    let pool = load_pool(pool_path, config.min_value)?;
    let rules = rule_set_from(&config).context("configuration does not form a valid rule set")?;

    let engine = LineupSolver::from_config(GoodLpSolver::new(), &config);
    let report = engine
        .solve(&pool, &rules)
        .context("lineup generation failed")?;
    if report.is_empty() {
        bail!(
            "no feasible lineup exists under budget {} with the configured rules",
            config.budget
        );
    }
    if report.lineups().len() < config.lineup_count {
        info!(
            event = "partial_result",
            requested = config.lineup_count,
            produced = report.lineups().len(),
        );
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(report.lineups())?);
    } else {
        render::print_lineups(report.lineups());
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive("lineupforge_solver=info".parse().unwrap())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads the TOML configuration (or the classic football preset when no
/// file was named) and applies command-line overrides.
fn load_config(matches: &ArgMatches) -> Result<OptimizerConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => OptimizerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => OptimizerConfig::classic_football(),
    };
    if let Some(&count) = matches.get_one::<usize>("count") {
        config = config.with_lineup_count(count);
    }
    if let Some(&uniques) = matches.get_one::<u32>("uniques") {
        config = config.with_uniques(uniques);
    }
    if let Some(&budget) = matches.get_one::<u64>("budget") {
        config = config.with_budget(budget);
    }
    config.validate()?;
    Ok(config)
}

/// Reads a pool file: a JSON object mapping position labels to ordered
/// candidate records. Group order in the file becomes id order in the
/// pool. Candidates projected below `min_value` are dropped.
fn load_pool(path: &PathBuf, min_value: f64) -> Result<CandidatePool> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading pool file {}", path.display()))?;
    let groups: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&contents).context("pool file is not a JSON object")?;

    let mut parsed: Vec<(String, Vec<Candidate>)> = Vec::with_capacity(groups.len());
    let mut dropped = 0usize;
    for (label, records) in groups {
        let members: Vec<Candidate> = serde_json::from_value(records)
            .with_context(|| format!("parsing candidates for position {label}"))?;
        let total = members.len();
        let kept: Vec<Candidate> = members
            .into_iter()
            .filter(|candidate| candidate.value >= min_value)
            .collect();
        dropped += total - kept.len();
        parsed.push((label, kept));
    }
    if dropped > 0 {
        info!(event = "candidates_filtered", dropped, min_value);
    }
    Ok(CandidatePool::from_groups(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_accepts_the_full_flag_set() {
        let matches = cli().try_get_matches_from([
            "lineupforge",
            "pool.json",
            "--config",
            "optimizer.toml",
            "--count",
            "5",
            "--uniques",
            "2",
            "--budget",
            "45000",
            "--json",
        ]);
        let matches = matches.unwrap();
        assert_eq!(matches.get_one::<usize>("count"), Some(&5));
        assert_eq!(matches.get_one::<u32>("uniques"), Some(&2));
        assert!(matches.get_flag("json"));
    }

    #[test]
    fn pool_argument_is_required() {
        assert!(cli().try_get_matches_from(["lineupforge"]).is_err());
    }
}
