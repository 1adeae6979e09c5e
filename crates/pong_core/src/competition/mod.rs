//! Multi-entrant competitions
//!
//! A competition declares its shape up front and the dispatcher routes the
//! registrants to the matching strategy:
//! - [`CompetitionShape::RankedBracket`]: individual full-field events
//! - [`CompetitionShape::PairedPool`]: two-player team events in pools of four
//! - [`CompetitionShape::Fallback`]: everything else, scored heuristically

pub mod bracket;
pub mod fallback;
pub mod pool;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SimConfig;
use crate::types::{AgeCategory, Competitor, CompetitorId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionShape {
    RankedBracket,
    PairedPool,
    #[default]
    Fallback,
}

/// Tier of an event. It changes bracket size and which flags are handed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Standard,
    /// Federal circuit: bracket winners go up, the bottom of the field goes down
    Federal,
    /// End-of-season finals: larger brackets, podium-or-nothing pools
    Finals,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: String,
    pub name: String,
    /// Declared shape; team events run as paired pools whatever is declared
    #[serde(default)]
    pub shape: CompetitionShape,
    #[serde(default)]
    pub tier: Tier,
    /// Players per registered team
    #[serde(default = "default_team_size")]
    pub team_size: u8,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub max_rating: Option<f64>,
    #[serde(default)]
    pub min_age: Option<u8>,
    #[serde(default)]
    pub max_age: Option<u8>,
}

fn default_team_size() -> u8 {
    1
}

impl Competition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, shape: CompetitionShape) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shape,
            tier: Tier::Standard,
            team_size: if shape == CompetitionShape::PairedPool { 2 } else { 1 },
            min_rating: None,
            max_rating: None,
            min_age: None,
            max_age: None,
        }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_rating_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_rating = min;
        self.max_rating = max;
        self
    }

    pub fn with_age_bounds(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    /// Strategy the dispatcher runs for this competition.
    pub fn resolved_shape(&self) -> CompetitionShape {
        if self.team_size >= 2 {
            CompetitionShape::PairedPool
        } else {
            self.shape
        }
    }

    /// Whether `competitor` satisfies the rating and age bounds.
    pub fn is_eligible(&self, competitor: &Competitor) -> bool {
        self.min_rating.map_or(true, |min| competitor.rating >= min)
            && self.max_rating.map_or(true, |max| competitor.rating <= max)
            && self.min_age.map_or(true, |min| competitor.age >= min)
            && self.max_age.map_or(true, |max| competitor.age <= max)
    }
}

/// Outcome of one competition for one competitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetitionResult {
    pub competitor_id: CompetitorId,
    pub competitor_name: String,
    /// Rating when the event started
    pub rating: f64,
    #[serde(default)]
    pub category: AgeCategory,
    /// Human-readable placement, e.g. "Finalist (2nd)"
    pub placement: String,
    pub exact_rank: Option<u32>,
    pub partner_name: Option<String>,
    pub rating_delta: f64,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub promoted: bool,
    pub relegated: bool,
    pub qualified: bool,
}

impl CompetitionResult {
    fn blank(competitor: &Competitor, placement: String) -> Self {
        Self {
            competitor_id: competitor.id.clone(),
            competitor_name: competitor.name.clone(),
            rating: competitor.rating,
            category: competitor.category(),
            placement,
            exact_rank: None,
            partner_name: None,
            rating_delta: 0.0,
            matches_played: 0,
            wins: 0,
            losses: 0,
            promoted: false,
            relegated: false,
            qualified: false,
        }
    }
}

/// Run `competition` for `registrants` and return one result per entrant.
///
/// Registrants outside the competition's bounds are skipped.
pub fn simulate_competition<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SimConfig,
    competition: &Competition,
    registrants: &[Competitor],
) -> Vec<CompetitionResult> {
    let eligible: Vec<Competitor> = registrants
        .iter()
        .filter(|c| {
            let ok = competition.is_eligible(c);
            if !ok {
                warn!(
                    competition = %competition.id,
                    competitor = %c.id,
                    "skipping ineligible registrant"
                );
            }
            ok
        })
        .cloned()
        .collect();

    if eligible.is_empty() {
        return Vec::new();
    }

    debug!(
        competition = %competition.id,
        shape = ?competition.resolved_shape(),
        entrants = eligible.len(),
        "simulating competition"
    );

    match competition.resolved_shape() {
        CompetitionShape::RankedBracket => {
            bracket::simulate(rng, &config.bracket, competition, &eligible)
        }
        CompetitionShape::PairedPool => pool::simulate(rng, &config.pool, competition, &eligible),
        CompetitionShape::Fallback => {
            fallback::simulate(rng, &config.fallback, competition, &eligible)
        }
    }
}

/// English ordinal for a placement: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
