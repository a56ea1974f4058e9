use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A fixed-size team entered in a league.
///
/// `ordinal` only fixes the initial ordering handed to the pairing generator.
/// Member slots can be vacated by a withdrawal with nobody on the waitlist,
/// so each slot is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub ordinal: u32,
    pub members: Vec<Option<PlayerId>>,
}

impl Team {
    pub fn new(id: impl Into<String>, ordinal: u32, members: Vec<PlayerId>) -> Self {
        Self {
            id: TeamId::new(id),
            ordinal,
            members: members.into_iter().map(Some).collect(),
        }
    }

    /// Slot index currently held by `player`, if any.
    pub fn slot_of(&self, player: &PlayerId) -> Option<usize> {
        self.members
            .iter()
            .position(|m| m.as_ref() == Some(player))
    }

    pub fn has_vacancy(&self) -> bool {
        self.members.iter().any(Option::is_none)
    }

    /// Players currently occupying a slot, in slot order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.members.iter().flatten()
    }
}
