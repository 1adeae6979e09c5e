//! Simulation tunables
//!
//! Defaults are the standard rules. Any subset can be overridden
//! from TOML:
//!
//! ```toml
//! [bracket]
//! size = 16
//! registrant_bonus = 50.0
//!
//! [internal]
//! rounds = 7
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub bracket: BracketConfig,
    pub pool: PoolConfig,
    pub fallback: FallbackConfig,
    pub internal: InternalConfig,
    pub meeting: MeetingConfig,
}

impl SimConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketConfig {
    /// Field size for ordinary ranked events
    pub size: usize,
    /// Field size for finals-tier events
    pub finals_size: usize,
    /// Added to the placement score of genuinely registered entrants
    pub registrant_bonus: f64,
    /// Upper bound of the uniform placement noise
    pub placement_noise: f64,
    /// Fillers are generated at the registrant mean +/- this spread
    pub filler_spread: f64,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            size: 16,
            finals_size: 32,
            registrant_bonus: 50.0,
            placement_noise: 300.0,
            filler_spread: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Rounds each pair plays (one per other pool member)
    pub rounds: u32,
    /// Synthetic opponents are generated at the pair mean +/- this spread
    pub opponent_spread: i32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            rounds: 3,
            opponent_spread: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Rating cap used when the competition declares none
    pub default_rating_cap: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            default_rating_cap: 3000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    pub rounds: u32,
    pub win_points: u32,
    pub loss_points: u32,
    pub bye_points: u32,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            win_points: 3,
            loss_points: 1,
            bye_points: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    /// Play the second doubles leg of a four-player meeting with slots 2 and 3
    /// instead of repeating slots 0 and 1.
    pub distinct_doubles_pairs: bool,
}
