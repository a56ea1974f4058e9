//! Court League core
//!
//! Pure, synchronous building blocks for running a doubles (or singles)
//! league on a limited number of courts:
//! - Round-robin pairing generation (circle method, optional seeded order)
//! - Allocation of pairings to court-bounded rounds
//! - Set-score validation and result determination per match format
//! - Player standings with deterministic tie-breaking
//! - Waitlist substitution when a rostered player withdraws
//!
//! Nothing here performs I/O. Callers load and store records themselves and
//! pass plain values in.

pub mod allocation;
pub mod config;
pub mod match_record;
pub mod pairing;
pub mod ranking;
pub mod roster;
pub mod schedule;
pub mod scoring;
pub mod shuffle;
pub mod types;

pub use allocation::*;
pub use config::*;
pub use match_record::*;
pub use pairing::*;
pub use ranking::*;
pub use roster::*;
pub use schedule::*;
pub use scoring::*;
pub use shuffle::*;
pub use types::*;
