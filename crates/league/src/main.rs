//! League CLI
//!
//! Build schedules, check and record scores, and print standings.

use anyhow::{bail, Context, Result};
use league::SeasonFile;
use league_core::{
    build_schedule, score_match, FormatConfig, ScoreSheet, ScoringRules, SetFormat, Team,
};
use std::collections::HashSet;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Court League");
    println!();
    println!("Usage:");
    println!("  league schedule <config.toml> <team> <team> [<team> ...]");
    println!("                  [--out season.json] [--name NAME]");
    println!("  league check <sets> <draws> <a1> <b1> [<a2> <b2> [<a3> <b3>]]");
    println!("  league record <season.json> <match-id> <a1> <b1> [<a2> <b2> [<a3> <b3>]]");
    println!("  league standings <season.json>");
    println!("  league report <season.json>");
    println!();
    println!("Arguments:");
    println!("  sets   - 1, 2 or 3 sets per match");
    println!("  draws  - yes/no, whether split sets may stand as a draw");
    println!("  team   - name[:player,player]; players default to name-1, name-2, ...");
    println!();
    println!("Examples:");
    println!("  league schedule league.toml north south east west --out season.json");
    println!("  league check 3 no 6 3 3 6 6 4");
    println!("  league record season.json 1 6 3 6 4");
}

/// Parse `name[:p1,p2]` into a team.
fn parse_team(spec: &str, ordinal: u32, team_size: u8) -> Team {
    let mut parts = spec.splitn(2, ':');
    let name = parts.next().unwrap_or(spec);
    let members = match parts.next() {
        Some(list) => list.split(',').map(|p| p.trim().into()).collect(),
        None => (1..=team_size)
            .map(|i| format!("{}-{}", name, i).as_str().into())
            .collect(),
    };
    Team::new(name, ordinal, members)
}

/// Parse every team spec, rejecting repeated names.
fn parse_teams(specs: &[&str], team_size: u8) -> Result<Vec<Team>> {
    let mut seen = HashSet::new();
    let mut teams = Vec::with_capacity(specs.len());
    for (ordinal, spec) in specs.iter().enumerate() {
        let team = parse_team(spec, ordinal as u32, team_size);
        if !seen.insert(team.id.clone()) {
            bail!("team '{}' is listed more than once", team.id);
        }
        teams.push(team);
    }
    Ok(teams)
}

/// Parse up to three `a b` score pairs.
fn parse_sheet(values: &[String]) -> Result<ScoreSheet> {
    if values.is_empty() || values.len() % 2 != 0 || values.len() > 6 {
        bail!("expected 1 to 3 pairs of scores, got {} value(s)", values.len());
    }
    let mut scores = [None; 6];
    for (slot, raw) in scores.iter_mut().zip(values) {
        let value: i32 = raw
            .parse()
            .with_context(|| format!("score '{}' is not a number", raw))?;
        *slot = Some(value);
    }
    let [a1, b1, a2, b2, a3, b3] = scores;
    Ok(ScoreSheet::new(a1, b1, a2, b2, a3, b3))
}

fn parse_draws(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        other => bail!("draws must be yes or no, got '{}'", other),
    }
}

fn run_schedule(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        print_usage();
        bail!("schedule requires a config file and at least two teams");
    }

    let config = FormatConfig::load(Path::new(&args[0]))
        .with_context(|| format!("loading {}", args[0]))?;

    // Parse optional arguments
    let mut out: Option<&str> = None;
    let mut name = "League".to_string();
    let mut team_specs = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(args[i + 1].as_str());
                    i += 1;
                }
            }
            "--name" | "-n" => {
                if i + 1 < args.len() {
                    name = args[i + 1].clone();
                    i += 1;
                }
            }
            spec => team_specs.push(spec),
        }
        i += 1;
    }

    let teams = parse_teams(&team_specs, config.team_size)?;

    let schedule = build_schedule(&teams, &config);
    let season = SeasonFile::new(&name, config, &schedule);
    season.print_report();

    if let Some(path) = out {
        season.save(Path::new(path))?;
        println!("Saved season to {}", path);
    }
    Ok(())
}

fn run_check(args: &[String]) -> Result<()> {
    if args.len() < 4 {
        print_usage();
        bail!("check requires a set format, a draw policy and scores");
    }

    let sets: u8 = args[0].parse().context("sets must be 1, 2 or 3")?;
    let number_of_sets = SetFormat::try_from(sets).map_err(anyhow::Error::msg)?;
    let rules = ScoringRules::new(number_of_sets, parse_draws(&args[1])?);
    let sheet = parse_sheet(&args[2..])?;

    match score_match(&sheet, &rules) {
        Ok(outcome) => println!(
            "Valid: {:?} ({}-{} in sets)",
            outcome.result, outcome.sets_won_a, outcome.sets_won_b
        ),
        Err(e) => println!("Rejected: {}", e),
    }
    Ok(())
}

fn run_record(args: &[String]) -> Result<()> {
    if args.len() < 4 {
        print_usage();
        bail!("record requires a season file, a match id and scores");
    }

    let path = Path::new(&args[0]);
    let mut season = SeasonFile::load(path)?;
    let match_id: u32 = args[1].parse().context("match id must be a number")?;
    let sheet = parse_sheet(&args[2..])?;

    let outcome = season.record_result(match_id, &sheet)?;
    season.save(path)?;

    println!(
        "Match {}: {:?} ({}-{} in sets)",
        match_id, outcome.result, outcome.sets_won_a, outcome.sets_won_b
    );
    Ok(())
}

fn show_standings(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("standings requires a season file");
    };
    let season = SeasonFile::load(Path::new(path))?;

    println!("\n=== {} Standings ===", season.name);
    println!("{}", season.standings().render_table());
    Ok(())
}

fn show_report(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("report requires a season file");
    };
    SeasonFile::load(Path::new(path))?.print_report();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "schedule" => run_schedule(&args[2..]),
        "check" => run_check(&args[2..]),
        "record" => run_record(&args[2..]),
        "standings" | "table" => show_standings(&args[2..]),
        "report" => show_report(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            bail!("Unknown command: {}", args[1]);
        }
    }
}
