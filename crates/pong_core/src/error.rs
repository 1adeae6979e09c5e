//! Error type shared by the simulation core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The day scheduler only handles a field of one tracked entrant plus seven others.
    #[error("day scheduling needs exactly {expected} opponents, got {actual}")]
    OpponentCount { expected: usize, actual: usize },

    #[error("league days are numbered from 1, got {0}")]
    InvalidDay(u32),

    #[error("an internal event needs at least two competitors, got {0}")]
    NotEnoughCompetitors(usize),

    #[error("invalid simulation config: {0}")]
    Config(#[from] toml::de::Error),
}
