//! Table tennis simulation core
//!
//! Turns competitor ratings and a random source into point-by-point, set,
//! match, meeting and competition results, and computes rating changes with
//! the rank exchange table.
//!
//! Every stochastic entry point takes the random source as `&mut R` where
//! `R: rand::Rng + ?Sized`, so callers decide between a seeded generator
//! (replayable runs, tests) and an entropy-backed one.
//!
//! ```
//! use pong_core::{play_match, Competitor};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let a = Competitor::new("a", "Alice", 1200.0);
//! let b = Competitor::new("b", "Bruno", 1100.0);
//! let game = play_match(&mut rng, &a, &b);
//! assert_eq!(game.sets_won(game.winner), 3);
//! ```

pub mod competition;
pub mod config;
pub mod doubles;
pub mod error;
pub mod exchange;
pub mod game;
pub mod generator;
pub mod internal;
pub mod league;
pub mod meeting;
pub mod point;
pub mod schedule;
pub mod set;
pub mod types;

pub use competition::{
    simulate_competition, Competition, CompetitionResult, CompetitionShape, Tier,
};
pub use config::SimConfig;
pub use doubles::compose_pair;
pub use error::{Result, SimError};
pub use exchange::{point_exchange, RatingDelta};
pub use game::{play_match, Match};
pub use generator::{generate_competitor, rated_competitor, rating_from_attributes};
pub use internal::{run_internal_event, InternalEvent, InternalRound, InternalStanding};
pub use league::{
    play_fixture, simulate_league_day, standings, LeagueClub, LeagueMeeting, StandingRow,
};
pub use meeting::{play_meeting, Leg, Meeting, MeetingFormat};
pub use point::{play_point, PointKind, PointOutcome};
pub use schedule::{day_pairings, Fixture, FIELD_SIZE};
pub use set::{play_set, SetScore};
pub use types::*;
