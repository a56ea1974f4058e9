//! Full league schedule: pairing generation followed by court allocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

use crate::allocation::{allocate_rounds, PhysicalRound};
use crate::config::FormatConfig;
use crate::match_record::MatchRecord;
use crate::pairing::generate_pairings;
use crate::types::{Team, TeamId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub teams: Vec<Team>,
    pub rounds: Vec<PhysicalRound>,
}

/// Schedule every team against every other under `config`.
///
/// Teams are ordered by ordinal before pairing, so the caller's slice order
/// does not matter.
pub fn build_schedule(teams: &[Team], config: &FormatConfig) -> Schedule {
    let mut ordered = teams.to_vec();
    ordered.sort_by_key(|t| t.ordinal);

    let ids: Vec<TeamId> = ordered.iter().map(|t| t.id.clone()).collect();
    let logical = generate_pairings(&ids, config.matches_per_pair, config.seed());
    let rounds = allocate_rounds(&logical, config.courts_count);

    let schedule = Schedule {
        teams: ordered,
        rounds,
    };
    info!(
        teams = schedule.teams.len(),
        rounds = schedule.rounds.len(),
        matches = schedule.total_matches(),
        "built schedule"
    );
    schedule
}

impl Schedule {
    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.slots.len()).sum()
    }

    /// Round numbers in which `team` plays.
    pub fn rounds_for_team(&self, team: &TeamId) -> Vec<u32> {
        self.rounds
            .iter()
            .filter(|r| r.contains_team(team))
            .map(|r| r.number)
            .collect()
    }

    /// One scheduled match record per court slot, numbered from 1.
    pub fn matches(&self) -> Vec<MatchRecord> {
        let by_id: HashMap<&TeamId, &Team> = self.teams.iter().map(|t| (&t.id, t)).collect();
        let mut records = Vec::with_capacity(self.total_matches());

        for round in &self.rounds {
            for slot in &round.slots {
                let (Some(a), Some(b)) = (
                    by_id.get(&slot.pairing.team_a),
                    by_id.get(&slot.pairing.team_b),
                ) else {
                    continue;
                };
                let id = records.len() as u32 + 1;
                records.push(MatchRecord::scheduled(id, round.number, slot.court, a, b));
            }
        }

        records
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
