//! Tournament runner for the table tennis simulator
//!
//! This crate provides infrastructure for:
//! - Running matches, meetings, league days and competitions from the command line
//! - Tracking ratings and careers across runs in a JSON ledger
//! - Generating text and JSON reports of every event
//!
//! # Usage
//!
//! ```bash
//! # Add two competitors, then play a replayable match between them
//! cargo run -p tournament -- add ana "Ana Ruiz" --rating 1200
//! cargo run -p tournament -- add ben "Ben Ortiz" --rating 1150
//! cargo run -p tournament -- --seed 42 match ana ben
//!
//! # Simulate a ranked bracket for the whole ledger
//! cargo run -p tournament -- competition "Regional open" --shape ranked-bracket
//! ```

mod ledger;
mod results;
mod runner;
mod settings;

pub use ledger::*;
pub use results::*;
pub use runner::*;
pub use settings::*;
