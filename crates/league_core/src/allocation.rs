//! Packing logical rounds onto a limited number of courts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::pairing::{LogicalRound, Pairing};
use crate::types::TeamId;

/// A pairing placed on a court.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtSlot {
    pub court: usize,
    pub pairing: Pairing,
}

/// Matches that are played at the same time, one per court.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalRound {
    /// Sequential across the whole tournament, starting at 1.
    pub number: u32,
    /// Logical round this physical round was carved from.
    pub logical_round: usize,
    pub slots: Vec<CourtSlot>,
}

impl PhysicalRound {
    pub fn contains_team(&self, team: &TeamId) -> bool {
        self.slots.iter().any(|s| s.pairing.involves(team))
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamId> {
        self.slots
            .iter()
            .flat_map(|s| [&s.pairing.team_a, &s.pairing.team_b])
    }
}

/// Assign pairings to physical rounds of at most `courts_count` matches.
///
/// Each logical round is consumed greedily in its own order: a pairing is
/// taken while courts remain and neither team is already playing, anything
/// else waits for the next physical round. This is deliberately not an
/// optimal packing; which round a pairing lands in depends on input order.
///
/// Zero courts yields no rounds.
pub fn allocate_rounds(rounds: &[LogicalRound], courts_count: u32) -> Vec<PhysicalRound> {
    if courts_count == 0 {
        warn!("cannot allocate pairings onto zero courts");
        return Vec::new();
    }
    let capacity = courts_count as usize;

    let mut physical = Vec::new();
    let mut number = 1u32;

    for logical in rounds {
        let mut remaining: Vec<&Pairing> = logical.pairings.iter().collect();

        while !remaining.is_empty() {
            let mut busy: HashSet<&TeamId> = HashSet::new();
            let mut slots = Vec::with_capacity(capacity.min(remaining.len()));
            let mut leftover = Vec::new();

            for pairing in remaining {
                let free = !busy.contains(&pairing.team_a) && !busy.contains(&pairing.team_b);
                if slots.len() < capacity && free {
                    busy.insert(&pairing.team_a);
                    busy.insert(&pairing.team_b);
                    slots.push(CourtSlot {
                        court: slots.len(),
                        pairing: pairing.clone(),
                    });
                } else {
                    leftover.push(pairing);
                }
            }

            physical.push(PhysicalRound {
                number,
                logical_round: logical.index,
                slots,
            });
            number += 1;
            remaining = leftover;
        }
    }

    debug!(
        logical = rounds.len(),
        physical = physical.len(),
        courts = courts_count,
        "allocated rounds to courts"
    );

    physical
}

#[cfg(test)]
#[path = "allocation_tests.rs"]
mod allocation_tests;
