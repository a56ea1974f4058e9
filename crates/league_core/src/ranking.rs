//! Per-player standings built from finished matches.
//!
//! Standings are a plain value: callers fold match contributions into a
//! [`Standings`] they own and ask it for a ranked copy. Folding is
//! order-independent, so the same matches always give the same numbers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::match_record::MatchRecord;
use crate::scoring::ResultType;
use crate::types::PlayerId;

/// Points for every set won.
pub const POINTS_PER_SET: u32 = 2;
/// Bonus for winning the match.
pub const WIN_BONUS: u32 = 3;
/// Bonus for a draw, only in seasons that allow draws.
pub const DRAW_BONUS: u32 = 1;

/// One player's share of one finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDelta {
    pub player: PlayerId,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub matches_played: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SideOutcome {
    Win,
    Draw,
    Loss,
    NoDecision,
}

impl PlayerDelta {
    fn for_side(player: &PlayerId, sets_won: u32, sets_lost: u32, outcome: SideOutcome) -> Self {
        let bonus = match outcome {
            SideOutcome::Win => WIN_BONUS,
            SideOutcome::Draw => DRAW_BONUS,
            SideOutcome::Loss | SideOutcome::NoDecision => 0,
        };
        Self {
            player: player.clone(),
            points: POINTS_PER_SET * sets_won + bonus,
            wins: u32::from(outcome == SideOutcome::Win),
            draws: u32::from(outcome == SideOutcome::Draw),
            losses: u32::from(outcome == SideOutcome::Loss),
            sets_won,
            sets_lost,
            matches_played: 1,
        }
    }
}

/// Deltas for every player in a finished match; empty for anything else.
///
/// Teammates receive identical deltas. A draw only earns the draw bonus when
/// the season allows draws.
pub fn contributions(record: &MatchRecord, allow_draws: bool) -> Vec<PlayerDelta> {
    if !record.is_finished() {
        return Vec::new();
    }

    let (sets_a, sets_b) = record.sets_won();
    let (outcome_a, outcome_b) = match record.result {
        ResultType::WinA => (SideOutcome::Win, SideOutcome::Loss),
        ResultType::WinB => (SideOutcome::Loss, SideOutcome::Win),
        ResultType::Draw if allow_draws => (SideOutcome::Draw, SideOutcome::Draw),
        ResultType::Draw | ResultType::Undecided => {
            (SideOutcome::NoDecision, SideOutcome::NoDecision)
        }
    };

    let side_a = record
        .players_a
        .iter()
        .map(|p| PlayerDelta::for_side(p, sets_a, sets_b, outcome_a));
    let side_b = record
        .players_b
        .iter()
        .map(|p| PlayerDelta::for_side(p, sets_b, sets_a, outcome_b));

    side_a.chain(side_b).collect()
}

/// Aggregate standing of one player over a season.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player: PlayerId,
    pub points_total: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub sets_diff: i64,
    pub matches_played: u32,
}

impl RankingEntry {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            points_total: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            sets_diff: 0,
            matches_played: 0,
        }
    }

    pub fn apply(&mut self, delta: &PlayerDelta) {
        self.points_total += delta.points;
        self.wins += delta.wins;
        self.draws += delta.draws;
        self.losses += delta.losses;
        self.sets_won += delta.sets_won;
        self.sets_lost += delta.sets_lost;
        self.matches_played += delta.matches_played;
        self.sets_diff = i64::from(self.sets_won) - i64::from(self.sets_lost);
    }
}

/// Ranking order: points, wins, set difference, sets won, draws; all descending.
pub fn compare_entries(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.points_total
        .cmp(&a.points_total)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.sets_diff.cmp(&a.sets_diff))
        .then_with(|| b.sets_won.cmp(&a.sets_won))
        .then_with(|| b.draws.cmp(&a.draws))
}

/// Stable sort: entries equal on every key keep their relative order.
pub fn sort_entries(entries: &mut [RankingEntry]) {
    entries.sort_by(compare_entries);
}

/// A ranking entry with its 1-based table position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub position: usize,
    pub entry: RankingEntry,
}

/// Entries for every player seen so far, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct Standings {
    entries: Vec<RankingEntry>,
    index: HashMap<PlayerId, usize>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every delta into fresh standings.
    pub fn aggregate<'a>(deltas: impl IntoIterator<Item = &'a PlayerDelta>) -> Self {
        let mut standings = Self::new();
        standings.fold_all(deltas);
        standings
    }

    /// Standings for a season's matches; unfinished matches contribute nothing.
    pub fn from_matches<'a>(
        matches: impl IntoIterator<Item = &'a MatchRecord>,
        allow_draws: bool,
    ) -> Self {
        let mut standings = Self::new();
        for record in matches {
            standings.fold_match(record, allow_draws);
        }
        standings
    }

    fn entry_mut(&mut self, player: &PlayerId) -> &mut RankingEntry {
        let idx = match self.index.get(player) {
            Some(&idx) => idx,
            None => {
                self.entries.push(RankingEntry::new(player.clone()));
                self.index.insert(player.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    /// Give league members without matches a zero entry so they still rank.
    pub fn seed_players<'a>(&mut self, players: impl IntoIterator<Item = &'a PlayerId>) {
        for player in players {
            self.entry_mut(player);
        }
    }

    pub fn fold(&mut self, delta: &PlayerDelta) {
        self.entry_mut(&delta.player).apply(delta);
    }

    pub fn fold_all<'a>(&mut self, deltas: impl IntoIterator<Item = &'a PlayerDelta>) {
        for delta in deltas {
            self.fold(delta);
        }
    }

    pub fn fold_match(&mut self, record: &MatchRecord, allow_draws: bool) {
        for delta in contributions(record, allow_draws) {
            self.fold(&delta);
        }
    }

    pub fn get(&self, player: &PlayerId) -> Option<&RankingEntry> {
        self.index.get(player).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted copy with table positions.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut sorted = self.entries.clone();
        sort_entries(&mut sorted);
        sorted
            .into_iter()
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                position: i + 1,
                entry,
            })
            .collect()
    }

    /// Fixed-width leaderboard.
    pub fn render_table(&self) -> String {
        let mut table = String::new();
        table.push_str(&format!(
            "{:>3} {:<24} {:>5} {:>3} {:>3} {:>3} {:>4} {:>4} {:>5}\n",
            "#", "Player", "Pts", "W", "D", "L", "SW", "SL", "Diff"
        ));
        table.push_str(&"-".repeat(62));
        table.push('\n');

        for ranked in self.ranked() {
            let e = &ranked.entry;
            table.push_str(&format!(
                "{:>3} {:<24} {:>5} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+5}\n",
                ranked.position,
                e.player,
                e.points_total,
                e.wins,
                e.draws,
                e.losses,
                e.sets_won,
                e.sets_lost,
                e.sets_diff
            ));
        }

        table
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
