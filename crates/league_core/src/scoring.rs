//! Set-score validation and match result determination.
//!
//! Both steps dispatch on [`SetFormat`]. Validation rejects anything a
//! scorekeeper could mistype (a tied set, a missing set, a third set after the
//! match was already decided); determination only counts sets and never fails,
//! so callers must validate first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Default upper bound for games in one set.
pub const DEFAULT_MAX_GAMES_PER_SET: u8 = 7;

/// How many sets a match is played over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SetFormat {
    /// One set decides the match.
    Single,
    /// Exactly two sets; a split is a draw.
    Pair,
    /// Best of three; a split can be decided by a third set.
    #[default]
    BestOfThree,
}

impl SetFormat {
    pub fn max_sets(self) -> usize {
        match self {
            SetFormat::Single => 1,
            SetFormat::Pair => 2,
            SetFormat::BestOfThree => 3,
        }
    }
}

impl TryFrom<u8> for SetFormat {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SetFormat::Single),
            2 => Ok(SetFormat::Pair),
            3 => Ok(SetFormat::BestOfThree),
            other => Err(format!("number_of_sets must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<SetFormat> for u8 {
    fn from(value: SetFormat) -> Self {
        value.max_sets() as u8
    }
}

/// The part of a league's format that governs scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub number_of_sets: SetFormat,
    pub allow_draws: bool,
    pub max_games_per_set: u8,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            number_of_sets: SetFormat::BestOfThree,
            allow_draws: false,
            max_games_per_set: DEFAULT_MAX_GAMES_PER_SET,
        }
    }
}

impl ScoringRules {
    pub fn new(number_of_sets: SetFormat, allow_draws: bool) -> Self {
        Self {
            number_of_sets,
            allow_draws,
            ..Default::default()
        }
    }
}

/// Raw games entered for one set. Either side may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    pub a: Option<i32>,
    pub b: Option<i32>,
}

impl SetEntry {
    pub fn is_present(&self) -> bool {
        self.a.is_some() || self.b.is_some()
    }

    fn complete(&self) -> Option<(i32, i32)> {
        Some((self.a?, self.b?))
    }
}

/// Scores as typed in, before validation: up to three sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub sets: [SetEntry; 3],
}

impl ScoreSheet {
    pub fn new(
        set1_a: Option<i32>,
        set1_b: Option<i32>,
        set2_a: Option<i32>,
        set2_b: Option<i32>,
        set3_a: Option<i32>,
        set3_b: Option<i32>,
    ) -> Self {
        Self {
            sets: [
                SetEntry { a: set1_a, b: set1_b },
                SetEntry { a: set2_a, b: set2_b },
                SetEntry { a: set3_a, b: set3_b },
            ],
        }
    }

    /// Build a sheet from complete sets. Anything past the third set is ignored.
    pub fn from_sets(sets: &[(i32, i32)]) -> Self {
        let mut sheet = Self::default();
        for (entry, &(a, b)) in sheet.sets.iter_mut().zip(sets) {
            *entry = SetEntry {
                a: Some(a),
                b: Some(b),
            };
        }
        sheet
    }

    /// 1-based access.
    fn set(&self, number: usize) -> &SetEntry {
        &self.sets[number - 1]
    }

    /// Complete, in-range sets the format admits, as stored set scores.
    pub fn set_scores(&self, format: SetFormat) -> Vec<SetScore> {
        self.sets
            .iter()
            .take(format.max_sets())
            .filter_map(|entry| {
                let (a, b) = entry.complete()?;
                Some(SetScore {
                    a: u8::try_from(a).ok()?,
                    b: u8::try_from(b).ok()?,
                })
            })
            .collect()
    }
}

/// Games won by each side in one validated set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub a: u8,
    pub b: u8,
}

impl SetScore {
    pub fn winner(&self) -> Option<Side> {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Some(Side::A),
            Ordering::Less => Some(Side::B),
            Ordering::Equal => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultType {
    WinA,
    WinB,
    Draw,
    #[default]
    Undecided,
}

/// Why a score sheet was rejected. Messages are meant for end users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("set {set}: score {value} is outside 0..={max}")]
    ScoreOutOfRange { set: usize, value: i32, max: u8 },
    #[error("set {set} is required")]
    MissingSet { set: usize },
    #[error("set {set} needs a score for both sides")]
    IncompleteSet { set: usize },
    #[error("set {set} cannot end in a tie")]
    TiedSet { set: usize },
    #[error("set {set} is not played in a {format}-set match")]
    UnexpectedSet { set: usize, format: u8 },
    #[error("set {set} is not needed: the match was already decided")]
    UnnecessarySet { set: usize },
    #[error("sets are split and draws are not allowed")]
    DrawNotAllowed,
}

/// Outcome derived from a score sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: ResultType,
    pub sets_won_a: u8,
    pub sets_won_b: u8,
}

/// Check a score sheet against the rules.
pub fn validate(sheet: &ScoreSheet, rules: &ScoringRules) -> Result<(), ValidationError> {
    let max = rules.max_games_per_set;
    for (i, entry) in sheet.sets.iter().enumerate() {
        for value in [entry.a, entry.b].into_iter().flatten() {
            if value < 0 || value > i32::from(max) {
                return Err(ValidationError::ScoreOutOfRange {
                    set: i + 1,
                    value,
                    max,
                });
            }
        }
    }

    let first = decided_set(sheet, 1)?;

    match rules.number_of_sets {
        SetFormat::Single => {
            forbid_set(sheet, 2, SetFormat::Single)?;
            forbid_set(sheet, 3, SetFormat::Single)
        }
        SetFormat::Pair => {
            let second = decided_set(sheet, 2)?;
            forbid_set(sheet, 3, SetFormat::Pair)?;
            if first != second && !rules.allow_draws {
                return Err(ValidationError::DrawNotAllowed);
            }
            Ok(())
        }
        SetFormat::BestOfThree => {
            let second = decided_set(sheet, 2)?;
            let third_present = sheet.set(3).is_present();

            if first == second {
                if third_present {
                    return Err(ValidationError::UnnecessarySet { set: 3 });
                }
                return Ok(());
            }

            if third_present {
                decided_set(sheet, 3).map(|_| ())
            } else if rules.allow_draws {
                Ok(())
            } else {
                Err(ValidationError::DrawNotAllowed)
            }
        }
    }
}

/// Count sets won per side and derive the result.
///
/// Only complete sets the format admits are counted; tied or partial sets
/// count for nobody. Level set counts give `Draw` when draws are allowed and
/// `Undecided` otherwise.
pub fn determine(sheet: &ScoreSheet, rules: &ScoringRules) -> MatchOutcome {
    let mut sets_won_a = 0u8;
    let mut sets_won_b = 0u8;

    for entry in sheet.sets.iter().take(rules.number_of_sets.max_sets()) {
        if let Some((a, b)) = entry.complete() {
            match a.cmp(&b) {
                Ordering::Greater => sets_won_a += 1,
                Ordering::Less => sets_won_b += 1,
                Ordering::Equal => {}
            }
        }
    }

    let result = match sets_won_a.cmp(&sets_won_b) {
        Ordering::Greater => ResultType::WinA,
        Ordering::Less => ResultType::WinB,
        Ordering::Equal if rules.allow_draws => ResultType::Draw,
        Ordering::Equal => ResultType::Undecided,
    };

    MatchOutcome {
        result,
        sets_won_a,
        sets_won_b,
    }
}

/// Validate, then determine. Nothing is derived from a rejected sheet.
pub fn score_match(
    sheet: &ScoreSheet,
    rules: &ScoringRules,
) -> Result<MatchOutcome, ValidationError> {
    validate(sheet, rules)?;
    Ok(determine(sheet, rules))
}

fn decided_set(sheet: &ScoreSheet, number: usize) -> Result<Side, ValidationError> {
    let entry = sheet.set(number);
    if !entry.is_present() {
        return Err(ValidationError::MissingSet { set: number });
    }
    let (a, b) = entry
        .complete()
        .ok_or(ValidationError::IncompleteSet { set: number })?;
    match a.cmp(&b) {
        Ordering::Greater => Ok(Side::A),
        Ordering::Less => Ok(Side::B),
        Ordering::Equal => Err(ValidationError::TiedSet { set: number }),
    }
}

fn forbid_set(sheet: &ScoreSheet, number: usize, format: SetFormat) -> Result<(), ValidationError> {
    if sheet.set(number).is_present() {
        return Err(ValidationError::UnexpectedSet {
            set: number,
            format: format.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
