//! Synthetic competitors
//!
//! Bracket fillers and pool opponents are generated around a target rating,
//! with attributes scaled so that a stronger target also plays stronger.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{
    attribute_level, Attributes, Competitor, CompetitorId, CompetitorKind, PlayStyle,
};

/// Generated ratings never go below this floor.
pub const MIN_GENERATED_RATING: f64 = 500.0;

const NAMES: [&str; 24] = [
    "Lucas Martin",
    "Thomas Bernard",
    "Hugo Petit",
    "Enzo Robert",
    "Louis Durand",
    "Arthur Dubois",
    "Nathan Laurent",
    "Gabriel Simon",
    "Jean Dupont",
    "Michel Roux",
    "Alain Lambert",
    "Pierre Garcia",
    "Emma Leroy",
    "Lea Moreau",
    "Chloe Petit",
    "Manon Bernard",
    "Ines Martin",
    "Camille Roux",
    "Sarah Simon",
    "Clara Dubois",
    "Louise Laurent",
    "Zoe Richard",
    "Julie Durand",
    "Alice Morel",
];

/// Generate a filler competitor whose rating lands near `target_rating`.
pub fn generate_competitor<R: Rng + ?Sized>(
    rng: &mut R,
    id: impl Into<String>,
    target_rating: f64,
) -> Competitor {
    let base = attribute_level(target_rating);
    let mut skill = || (base + rng.gen_range(-10..10) as f64).clamp(10.0, 99.0);

    let attributes = Attributes {
        attack: skill(),
        defense: skill(),
        speed: skill(),
        mental: skill(),
        technique: skill(),
        tactical: skill(),
        stamina: (60 + rng.gen_range(0..40)) as f64,
    };

    let rating = (target_rating + rng.gen_range(-30..30) as f64)
        .round()
        .max(MIN_GENERATED_RATING);

    Competitor {
        id: CompetitorId::new(id),
        name: NAMES.choose(rng).copied().unwrap_or("Anonymous").to_string(),
        rating,
        age: rng.gen_range(6..51),
        style: PlayStyle::ALL.choose(rng).copied().unwrap_or_default(),
        attributes,
        fatigue: 0.0,
        kind: CompetitorKind::Filler,
    }
}

/// Rating implied by an attribute set. Stamina does not count.
pub fn rating_from_attributes(attributes: &Attributes) -> f64 {
    (500.0
        + attributes.attack * 3.5
        + attributes.defense * 3.0
        + attributes.speed * 3.0
        + attributes.mental * 4.0
        + attributes.technique * 3.5
        + attributes.tactical * 3.0)
        .round()
}

/// A real competitor whose rating is implied by `attributes`.
pub fn rated_competitor(
    id: impl Into<String>,
    name: impl Into<String>,
    attributes: Attributes,
) -> Competitor {
    Competitor::new(id, name, rating_from_attributes(&attributes)).with_attributes(attributes)
}
