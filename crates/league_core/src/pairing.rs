//! Round-robin pairing generation (circle method).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::shuffle::seeded_shuffle;
use crate::types::TeamId;

/// How many times each pair of teams meets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MatchesPerPair {
    #[default]
    Single,
    Double,
}

impl MatchesPerPair {
    pub fn legs(self) -> u8 {
        match self {
            MatchesPerPair::Single => 1,
            MatchesPerPair::Double => 2,
        }
    }
}

impl TryFrom<u8> for MatchesPerPair {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MatchesPerPair::Single),
            2 => Ok(MatchesPerPair::Double),
            other => Err(format!("matches_per_pair must be 1 or 2, got {}", other)),
        }
    }
}

impl From<MatchesPerPair> for u8 {
    fn from(value: MatchesPerPair) -> Self {
        value.legs()
    }
}

/// One meeting between two teams. `team_a` is the listed-first side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub team_a: TeamId,
    pub team_b: TeamId,
}

impl Pairing {
    pub fn new(team_a: TeamId, team_b: TeamId) -> Self {
        Self { team_a, team_b }
    }

    pub fn involves(&self, team: &TeamId) -> bool {
        &self.team_a == team || &self.team_b == team
    }

    /// Same meeting with the sides swapped.
    pub fn reversed(&self) -> Self {
        Self {
            team_a: self.team_b.clone(),
            team_b: self.team_a.clone(),
        }
    }
}

/// One rotation step of the circle method, before court capacity is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalRound {
    /// Position in play order, starting at 0.
    pub index: usize,
    /// 1 for the first leg, 2 for the mirrored second leg.
    pub leg: u8,
    pub pairings: Vec<Pairing>,
}

/// Generate round-robin pairings grouped by logical round.
///
/// With an odd team count a bye slot is added and pairings against it are
/// dropped, so one team sits out each round. A double round-robin appends the
/// first leg again with sides swapped. When `seed` is given the order of the
/// first-leg rounds is shuffled; the second leg mirrors that order.
///
/// Fewer than two teams yields no rounds.
pub fn generate_pairings(
    teams: &[TeamId],
    matches_per_pair: MatchesPerPair,
    seed: Option<&str>,
) -> Vec<LogicalRound> {
    if teams.len() < 2 {
        warn!(teams = teams.len(), "need at least two teams to generate pairings");
        return Vec::new();
    }

    let mut slots: Vec<Option<&TeamId>> = teams.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let m = slots.len();

    let mut first_leg: Vec<Vec<Pairing>> = Vec::with_capacity(m - 1);
    for _ in 0..m - 1 {
        let mut round = Vec::with_capacity(m / 2);
        for i in 0..m / 2 {
            if let (Some(a), Some(b)) = (slots[i], slots[m - 1 - i]) {
                round.push(Pairing::new(a.clone(), b.clone()));
            }
        }
        first_leg.push(round);
        // Slot 0 stays put.
        slots[1..].rotate_right(1);
    }

    if seed.is_some() {
        seeded_shuffle(&mut first_leg, seed);
    }

    let mut rounds: Vec<LogicalRound> = first_leg
        .iter()
        .enumerate()
        .map(|(index, pairings)| LogicalRound {
            index,
            leg: 1,
            pairings: pairings.clone(),
        })
        .collect();

    if matches_per_pair == MatchesPerPair::Double {
        let offset = rounds.len();
        rounds.extend(first_leg.iter().enumerate().map(|(i, pairings)| LogicalRound {
            index: offset + i,
            leg: 2,
            pairings: pairings.iter().map(Pairing::reversed).collect(),
        }));
    }

    debug!(
        teams = teams.len(),
        rounds = rounds.len(),
        seeded = seed.is_some(),
        "generated round-robin pairings"
    );

    rounds
}

/// Flat view over every pairing, in round order.
pub fn all_pairings(rounds: &[LogicalRound]) -> impl Iterator<Item = &Pairing> {
    rounds.iter().flat_map(|r| r.pairings.iter())
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
