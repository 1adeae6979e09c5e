//! Rating ledger persisted between runs

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pong_core::{CompetitionResult, Competitor, CompetitorId, Match, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Fatigue added per match played in a competition
pub const FATIGUE_PER_MATCH: f64 = 5.0;
pub const MAX_FATIGUE: f64 = 100.0;
/// Experience earned per match played in a competition
pub const EXPERIENCE_PER_MATCH: u32 = 2;

/// Best single competition outcome, by rating change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestResult {
    pub event: String,
    pub placement: String,
    pub rating_delta: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub wins: u32,
    pub losses: u32,
    pub experience: u32,
    pub best: Option<BestResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub competitor: Competitor,
    #[serde(default)]
    pub record: CareerRecord,
}

/// One rating change, as applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: DateTime<Utc>,
    pub event: String,
    pub competitor_id: CompetitorId,
    pub rating_before: f64,
    pub rating_after: f64,
}

impl HistoryRecord {
    pub fn delta(&self) -> f64 {
        self.rating_after - self.rating_before
    }
}

/// Competitors and their careers, keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingLedger {
    pub entries: BTreeMap<CompetitorId, LedgerEntry>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
}

impl RatingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ledger {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse ledger {}", path.display()))
    }

    /// Load a ledger, starting empty when the file does not exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "no ledger found, starting a new one");
            Ok(Self::new())
        }
    }

    /// Save the ledger to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize ledger")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write ledger {}", path.display()))
    }

    /// Add a competitor unless one with the same id is already known.
    /// Returns whether it was added.
    pub fn register(&mut self, competitor: Competitor) -> bool {
        if self.entries.contains_key(&competitor.id) {
            return false;
        }
        self.entries.insert(
            competitor.id.clone(),
            LedgerEntry {
                competitor,
                record: CareerRecord::default(),
            },
        );
        true
    }

    pub fn get(&self, id: &CompetitorId) -> Option<&LedgerEntry> {
        self.entries.get(id)
    }

    /// Current state of the given competitors, skipping unknown ids.
    pub fn competitors<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<Competitor> {
        ids.into_iter()
            .filter_map(|id| self.entries.get(&CompetitorId::from(id)))
            .map(|e| e.competitor.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one match. Sides not in the ledger (ghosts, doubles pairs,
    /// generated opponents) are skipped.
    pub fn apply_match(&mut self, event: &str, game: &Match) {
        for side in [Side::A, Side::B] {
            let Some(entry) = self.entries.get_mut(game.id_of(side)) else {
                continue;
            };
            if side == game.winner {
                entry.record.wins += 1;
            } else {
                entry.record.losses += 1;
            }
            let delta = game.delta_for(side);
            Self::adjust(&mut self.history, entry, event, delta);
        }
    }

    /// Apply every match of a meeting or event.
    pub fn apply_matches<'a>(&mut self, event: &str, games: impl IntoIterator<Item = &'a Match>) {
        for game in games {
            self.apply_match(event, game);
        }
    }

    /// Apply competition results: rating change, tally, fatigue and experience.
    pub fn apply_competition(&mut self, event: &str, results: &[CompetitionResult]) {
        for result in results {
            let Some(entry) = self.entries.get_mut(&result.competitor_id) else {
                debug!(competitor = %result.competitor_id, "result for unknown competitor ignored");
                continue;
            };

            let record = &mut entry.record;
            record.wins += result.wins;
            record.losses += result.losses;
            record.experience += EXPERIENCE_PER_MATCH * result.matches_played;
            if record
                .best
                .as_ref()
                .map_or(true, |best| result.rating_delta > best.rating_delta)
            {
                record.best = Some(BestResult {
                    event: event.to_string(),
                    placement: result.placement.clone(),
                    rating_delta: result.rating_delta,
                });
            }

            let competitor = &mut entry.competitor;
            competitor.fatigue = (competitor.fatigue
                + FATIGUE_PER_MATCH * result.matches_played as f64)
                .min(MAX_FATIGUE);

            Self::adjust(&mut self.history, entry, event, result.rating_delta);
        }
    }

    fn adjust(history: &mut Vec<HistoryRecord>, entry: &mut LedgerEntry, event: &str, delta: f64) {
        let before = entry.competitor.rating;
        entry.competitor.rating += delta;
        history.push(HistoryRecord {
            timestamp: Utc::now(),
            event: event.to_string(),
            competitor_id: entry.competitor.id.clone(),
            rating_before: before,
            rating_after: entry.competitor.rating,
        });
    }

    /// Most recent rating change of `id`
    pub fn last_change(&self, id: &CompetitorId) -> Option<f64> {
        self.history
            .iter()
            .rev()
            .find(|record| &record.competitor_id == id)
            .map(HistoryRecord::delta)
    }

    /// Entries sorted by rating, highest first
    pub fn leaderboard(&self) -> Vec<&LedgerEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| b.competitor.rating.total_cmp(&a.competitor.rating));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Leaderboard ===");
        println!(
            "{:<30} {:>8} {:>7} {:>6} {:>6} {:>5}",
            "Competitor", "Rating", "Last", "W", "L", "XP"
        );
        println!("{}", "-".repeat(67));
        for entry in self.leaderboard() {
            let last = self
                .last_change(&entry.competitor.id)
                .map_or_else(|| "-".to_string(), |delta| format!("{delta:+.1}"));
            println!(
                "{:<30} {:>8.1} {:>7} {:>6} {:>6} {:>5}",
                entry.competitor.name,
                entry.competitor.rating,
                last,
                entry.record.wins,
                entry.record.losses,
                entry.record.experience
            );
        }
        println!();
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod ledger_tests;
