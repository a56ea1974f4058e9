//! Scheduled and finished matches.

use serde::{Deserialize, Serialize};

use crate::scoring::{
    score_match, MatchOutcome, ResultType, ScoreSheet, ScoringRules, SetScore, ValidationError,
};
use crate::types::{PlayerId, Team, TeamId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished,
}

/// A match between two teams, with the players fielded on each side.
///
/// A `Finished` record always carries scores that passed validation, and its
/// `result` was derived from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: u32,
    pub round: u32,
    pub court: usize,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub players_a: Vec<PlayerId>,
    pub players_b: Vec<PlayerId>,
    pub sets: Vec<SetScore>,
    pub status: MatchStatus,
    pub result: ResultType,
}

impl MatchRecord {
    pub fn scheduled(id: u32, round: u32, court: usize, team_a: &Team, team_b: &Team) -> Self {
        Self {
            id,
            round,
            court,
            team_a: team_a.id.clone(),
            team_b: team_b.id.clone(),
            players_a: team_a.players().cloned().collect(),
            players_b: team_b.players().cloned().collect(),
            sets: Vec::new(),
            status: MatchStatus::Scheduled,
            result: ResultType::Undecided,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Validate and store a result. A rejected sheet leaves the record as it was.
    pub fn record_result(
        &mut self,
        sheet: &ScoreSheet,
        rules: &ScoringRules,
    ) -> Result<MatchOutcome, ValidationError> {
        let outcome = score_match(sheet, rules)?;
        self.sets = sheet.set_scores(rules.number_of_sets);
        self.result = outcome.result;
        self.status = MatchStatus::Finished;
        Ok(outcome)
    }

    /// Back to `Scheduled`, scores cleared.
    pub fn reset(&mut self) {
        self.sets.clear();
        self.result = ResultType::Undecided;
        self.status = MatchStatus::Scheduled;
    }

    /// Sets won by side A and side B.
    pub fn sets_won(&self) -> (u32, u32) {
        self.sets.iter().fold((0, 0), |(a, b), set| match set.a.cmp(&set.b) {
            std::cmp::Ordering::Greater => (a + 1, b),
            std::cmp::Ordering::Less => (a, b + 1),
            std::cmp::Ordering::Equal => (a, b),
        })
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        &self.team_a == team || &self.team_b == team
    }
}

#[cfg(test)]
#[path = "match_record_tests.rs"]
mod match_record_tests;
