//! League registration and waitlist substitution.
//!
//! A roster holds one inscription per registration, ordered by `order_index`.
//! The first `max_titulars` non-withdrawn inscriptions are active; everyone
//! after them waits. When an active player withdraws, the earliest waiting
//! inscription is promoted and takes over the withdrawing player's team slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{PlayerId, Team, TeamId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InscriptionId(pub u32);

impl fmt::Display for InscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InscriptionStatus {
    /// Active starter.
    Titular,
    /// On the waitlist.
    Suplente,
    /// Promoted from the waitlist; active.
    Promovido,
    /// Withdrawn.
    Desistiu,
}

impl InscriptionStatus {
    pub fn is_active(self) -> bool {
        matches!(self, InscriptionStatus::Titular | InscriptionStatus::Promovido)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inscription {
    pub id: InscriptionId,
    pub player: PlayerId,
    pub order_index: u32,
    pub status: InscriptionStatus,
    /// Set on promotion: the inscription whose place this one took.
    pub replaces: Option<InscriptionId>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("inscription {0} does not exist")]
    UnknownInscription(InscriptionId),
    #[error("inscription {id} is not active (status {status:?})")]
    NotActive {
        id: InscriptionId,
        status: InscriptionStatus,
    },
    #[error("player {0} is already registered")]
    AlreadyRegistered(PlayerId),
}

/// A waiting inscription moved into the active roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub inscription: InscriptionId,
    pub player: PlayerId,
}

/// What a withdrawal changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionOutcome {
    pub withdrawn: InscriptionId,
    pub withdrawn_player: PlayerId,
    pub promoted: Option<Promotion>,
    /// Team and slot the withdrawing player held, if they were on a team.
    pub team: Option<TeamId>,
    pub slot: Option<usize>,
}

impl SubstitutionOutcome {
    /// The team lost a player and nobody was waiting to replace them.
    pub fn left_vacancy(&self) -> bool {
        self.promoted.is_none() && self.team.is_some()
    }
}

/// Withdraw an active inscription and promote the next waiting one.
///
/// The promoted player is placed in the exact slot the withdrawing player
/// held, leaving the other slots alone. With nobody waiting the slot is
/// cleared and the caller decides what the team does next.
pub fn withdraw(
    inscriptions: &mut [Inscription],
    teams: &mut [Team],
    target: InscriptionId,
) -> Result<SubstitutionOutcome, RosterError> {
    let pos = inscriptions
        .iter()
        .position(|i| i.id == target)
        .ok_or(RosterError::UnknownInscription(target))?;

    let status = inscriptions[pos].status;
    if !status.is_active() {
        return Err(RosterError::NotActive { id: target, status });
    }

    inscriptions[pos].status = InscriptionStatus::Desistiu;
    let withdrawn_player = inscriptions[pos].player.clone();

    let next = inscriptions
        .iter()
        .enumerate()
        .filter(|(_, i)| i.status == InscriptionStatus::Suplente)
        .min_by_key(|(_, i)| i.order_index)
        .map(|(idx, _)| idx);

    let promoted = next.map(|idx| {
        let waiting = &mut inscriptions[idx];
        waiting.status = InscriptionStatus::Promovido;
        waiting.replaces = Some(target);
        Promotion {
            inscription: waiting.id,
            player: waiting.player.clone(),
        }
    });

    let seat = teams
        .iter_mut()
        .find_map(|t| t.slot_of(&withdrawn_player).map(|slot| (t, slot)));

    let (team, slot) = match seat {
        Some((team, slot)) => {
            team.members[slot] = promoted.as_ref().map(|p| p.player.clone());
            (Some(team.id.clone()), Some(slot))
        }
        None => (None, None),
    };

    match (&promoted, &team) {
        (Some(p), _) => info!(
            withdrawn = %withdrawn_player,
            promoted = %p.player,
            team = ?team,
            "promoted waitlisted player"
        ),
        (None, Some(t)) => info!(
            withdrawn = %withdrawn_player,
            team = %t,
            "withdrawal left a vacant slot"
        ),
        (None, None) => debug!(
            withdrawn = %withdrawn_player,
            "withdrawn player held no team slot"
        ),
    }

    Ok(SubstitutionOutcome {
        withdrawn: target,
        withdrawn_player,
        promoted,
        team,
        slot,
    })
}

/// Registration list for one league.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    max_titulars: usize,
    inscriptions: Vec<Inscription>,
}

impl Roster {
    pub fn new(max_titulars: usize) -> Self {
        Self {
            max_titulars,
            inscriptions: Vec::new(),
        }
    }

    /// Rebuild a roster from stored inscriptions.
    pub fn from_inscriptions(max_titulars: usize, inscriptions: Vec<Inscription>) -> Self {
        Self {
            max_titulars,
            inscriptions,
        }
    }

    pub fn max_titulars(&self) -> usize {
        self.max_titulars
    }

    pub fn inscriptions(&self) -> &[Inscription] {
        &self.inscriptions
    }

    pub fn get(&self, id: InscriptionId) -> Option<&Inscription> {
        self.inscriptions.iter().find(|i| i.id == id)
    }

    /// Add a player at the end of the registration order.
    ///
    /// They start active while seats remain, otherwise on the waitlist.
    pub fn register(&mut self, player: PlayerId) -> Result<InscriptionId, RosterError> {
        let duplicate = self
            .inscriptions
            .iter()
            .any(|i| i.player == player && i.status != InscriptionStatus::Desistiu);
        if duplicate {
            return Err(RosterError::AlreadyRegistered(player));
        }

        let next = self
            .inscriptions
            .iter()
            .map(|i| i.order_index.max(i.id.0))
            .max()
            .map_or(1, |n| n + 1);
        let status = if self.active().len() < self.max_titulars {
            InscriptionStatus::Titular
        } else {
            InscriptionStatus::Suplente
        };

        let id = InscriptionId(next);
        debug!(player = %player, inscription = %id, ?status, "registered player");
        self.inscriptions.push(Inscription {
            id,
            player,
            order_index: next,
            status,
            replaces: None,
        });
        Ok(id)
    }

    fn sorted_with(&self, keep: impl Fn(&Inscription) -> bool) -> Vec<&Inscription> {
        let mut selected: Vec<&Inscription> =
            self.inscriptions.iter().filter(|i| keep(i)).collect();
        selected.sort_by_key(|i| i.order_index);
        selected
    }

    /// Active inscriptions in registration order.
    pub fn active(&self) -> Vec<&Inscription> {
        self.sorted_with(|i| i.status.is_active())
    }

    /// Waiting inscriptions in promotion order.
    pub fn waitlist(&self) -> Vec<&Inscription> {
        self.sorted_with(|i| i.status == InscriptionStatus::Suplente)
    }

    /// Split active players into teams of `team_size`, in registration order.
    ///
    /// A short final group keeps its missing seats as vacant slots.
    pub fn form_teams(&self, team_size: usize) -> Vec<Team> {
        if team_size == 0 {
            return Vec::new();
        }

        self.active()
            .chunks(team_size)
            .enumerate()
            .map(|(ordinal, chunk)| {
                let mut members: Vec<Option<PlayerId>> =
                    chunk.iter().map(|i| Some(i.player.clone())).collect();
                members.resize(team_size, None);
                Team {
                    id: TeamId::new(format!("team-{}", ordinal + 1)),
                    ordinal: ordinal as u32,
                    members,
                }
            })
            .collect()
    }

    /// Withdraw an inscription; see [`withdraw`].
    pub fn withdraw(
        &mut self,
        target: InscriptionId,
        teams: &mut [Team],
    ) -> Result<SubstitutionOutcome, RosterError> {
        withdraw(&mut self.inscriptions, teams, target)
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
