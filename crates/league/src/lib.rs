//! Season files and reporting for Court League
//!
//! This crate provides infrastructure for:
//! - Storing a season (format, teams, matches) as JSON
//! - Recording results into a stored season
//! - Printing schedules and standings
//!
//! # Usage
//!
//! ```bash
//! # Schedule four teams from a format file and save the season
//! cargo run -p league -- schedule league.toml north south east west --out season.json
//!
//! # Record a result and show the table
//! cargo run -p league -- record season.json 1 6 3 6 4
//! cargo run -p league -- standings season.json
//! ```

mod season;

pub use season::*;
