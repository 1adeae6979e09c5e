//! Settings files read by the command line runner
//!
//! The simulation tunables come from an optional TOML file. A league group
//! is described in TOML as well, with rosters given as ledger ids:
//!
//! ```toml
//! tracked = "home"
//!
//! [[clubs]]
//! id = "home"
//! name = "TT Home"
//! players = ["ana", "ben", "carla", "dmitri"]
//! ```

use anyhow::{bail, Context, Result};
use pong_core::{LeagueClub, SimConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::ledger::RatingLedger;

/// Load the simulation settings, falling back to the defaults without a file
pub fn load_sim_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimConfig::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSetup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSetup {
    /// Club whose own fixtures are played separately
    pub tracked: String,
    pub clubs: Vec<ClubSetup>,
}

impl LeagueSetup {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let setup: LeagueSetup = toml::from_str(source).context("invalid league setup")?;
        if !setup.clubs.iter().any(|c| c.id == setup.tracked) {
            bail!("tracked club {} is not one of the clubs", setup.tracked);
        }
        Ok(setup)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read league setup {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve rosters against the ledger. Unknown players are left out and
    /// the slot is later filled by a ghost.
    pub fn clubs(&self, ledger: &RatingLedger) -> Vec<LeagueClub> {
        self.clubs
            .iter()
            .map(|club| {
                let roster = ledger.competitors(club.players.iter().map(String::as_str));
                if roster.len() < club.players.len() {
                    warn!(club = %club.id, "some players are not in the ledger");
                }
                LeagueClub::new(club.id.clone(), club.name.clone(), roster)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_core::Competitor;

    const SETUP: &str = r#"
tracked = "home"

[[clubs]]
id = "home"
name = "TT Home"
players = ["ana", "nobody"]

[[clubs]]
id = "away"
name = "TT Away"
"#;

    #[test]
    fn test_defaults_without_file() {
        assert_eq!(load_sim_config(None).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join(format!("pong-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[internal]\nrounds = 7\n").unwrap();
        let config = load_sim_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.internal.rounds, 7);
    }

    #[test]
    fn test_league_setup_resolves_rosters() {
        let setup = LeagueSetup::from_toml_str(SETUP).unwrap();
        let mut ledger = RatingLedger::new();
        ledger.register(Competitor::new("ana", "Ana", 900.0));

        let clubs = setup.clubs(&ledger);
        assert_eq!(clubs.len(), 2);
        assert_eq!(clubs[0].roster.len(), 1);
        assert!(clubs[1].roster.is_empty());
    }

    #[test]
    fn test_unknown_tracked_club() {
        let err = LeagueSetup::from_toml_str("tracked = \"x\"\nclubs = []\n").unwrap_err();
        assert!(err.to_string().contains("tracked club x"));
    }
}
