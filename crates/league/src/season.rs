//! Season storage and reporting

use league_core::{
    ConfigError, FormatConfig, MatchOutcome, MatchRecord, ResultType, Schedule, ScoreSheet,
    Standings, Team, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SeasonError {
    #[error("failed to access season file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse season file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("season file has a bad format: {0}")]
    Config(#[from] ConfigError),
    #[error("no match with id {0}")]
    UnknownMatch(u32),
    #[error("invalid score: {0}")]
    Invalid(#[from] ValidationError),
}

/// Everything needed to resume a season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonFile {
    /// Name/description of the season
    pub name: String,
    /// Format used to schedule and score
    pub config: FormatConfig,
    /// Participating teams
    pub teams: Vec<Team>,
    /// Every match, in schedule order
    pub matches: Vec<MatchRecord>,
}

impl SeasonFile {
    pub fn new(name: &str, config: FormatConfig, schedule: &Schedule) -> Self {
        Self {
            name: name.to_string(),
            config,
            teams: schedule.teams.clone(),
            matches: schedule.matches(),
        }
    }

    /// Validate and store a result for one match
    pub fn record_result(
        &mut self,
        match_id: u32,
        sheet: &ScoreSheet,
    ) -> Result<MatchOutcome, SeasonError> {
        let rules = self.config.scoring_rules();
        let record = self
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(SeasonError::UnknownMatch(match_id))?;
        let outcome = record.record_result(sheet, &rules)?;
        info!(match_id, result = ?outcome.result, "recorded result");
        Ok(outcome)
    }

    /// Standings over every finished match, including players yet to play
    pub fn standings(&self) -> Standings {
        let mut standings = Standings::new();
        standings.seed_players(self.teams.iter().flat_map(|t| t.players()));
        for record in &self.matches {
            standings.fold_match(record, self.config.allow_draws);
        }
        standings
    }

    pub fn finished_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_finished()).count()
    }

    /// Save season to JSON file
    pub fn save(&self, path: &Path) -> Result<(), SeasonError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load season from JSON file, rejecting an invalid format
    pub fn load(path: &Path) -> Result<Self, SeasonError> {
        let contents = std::fs::read_to_string(path)?;
        let season: Self = serde_json::from_str(&contents)?;
        season.config.validate()?;
        Ok(season)
    }

    /// Generate a text report of the schedule and results
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Season: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}\n",
            self.teams
                .iter()
                .map(|t| t.id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        report.push_str(&format!(
            "Format: {} court(s), {} leg(s), best of {} set(s), draws {}\n",
            self.config.courts_count,
            self.config.matches_per_pair.legs(),
            self.config.number_of_sets.max_sets(),
            if self.config.allow_draws { "allowed" } else { "not allowed" }
        ));
        report.push_str(&format!(
            "Played: {}/{}\n\n",
            self.finished_count(),
            self.matches.len()
        ));

        report.push_str(&format!(
            "{:>4} {:>5} {:>5}  {:<16} vs {:<16} {}\n",
            "Id", "Round", "Court", "Team A", "Team B", "Result"
        ));
        report.push_str(&"-".repeat(72));
        report.push('\n');

        for m in &self.matches {
            report.push_str(&format!(
                "{:>4} {:>5} {:>5}  {:<16} vs {:<16} {}\n",
                m.id,
                m.round,
                m.court + 1,
                m.team_a,
                m.team_b,
                describe_result(m)
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn describe_result(m: &MatchRecord) -> String {
    if !m.is_finished() {
        return "-".to_string();
    }
    let sets = m
        .sets
        .iter()
        .map(|s| format!("{}-{}", s.a, s.b))
        .collect::<Vec<_>>()
        .join(" ");
    let verdict = match m.result {
        ResultType::WinA => "A",
        ResultType::WinB => "B",
        ResultType::Draw => "draw",
        ResultType::Undecided => "undecided",
    };
    format!("{} ({})", sets, verdict)
}

#[cfg(test)]
#[path = "season_tests.rs"]
mod season_tests;
