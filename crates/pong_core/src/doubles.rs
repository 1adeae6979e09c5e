//! Doubles composer

use crate::types::{Competitor, CompetitorId, CompetitorKind, PlayStyle};

/// Build the transient stand-in used for a doubles leg.
///
/// Rating, attributes, fatigue and age are averaged; the style is always
/// all-round. The result is a `Composite` and must never be rated or stored.
/// A pair missing a player (either member a ghost) is itself a ghost and
/// forfeits its leg.
pub fn compose_pair(first: &Competitor, second: &Competitor) -> Competitor {
    let kind = if first.is_ghost() || second.is_ghost() {
        CompetitorKind::Ghost
    } else {
        CompetitorKind::Composite
    };

    Competitor {
        id: CompetitorId(format!("DBL-{}+{}", first.id, second.id)),
        name: format!("{} / {}", first.short_name(), second.short_name()),
        rating: (first.rating + second.rating) / 2.0,
        age: ((first.age as u16 + second.age as u16) / 2) as u8,
        style: PlayStyle::AllRound,
        attributes: first.attributes.mean(&second.attributes),
        fatigue: (first.fatigue + second.fatigue) / 2.0,
        kind,
    }
}
