use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a competitor, as handed in by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorId(pub String);

impl CompetitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompetitorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    Attacker,
    Blocker,
    Defender,
    ModernDefender,
    /// Pimpled-rubber "crab" player
    Crab,
    Pivot,
    AllRound,
    Hitter,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 8] = [
        PlayStyle::Attacker,
        PlayStyle::Blocker,
        PlayStyle::Defender,
        PlayStyle::ModernDefender,
        PlayStyle::Crab,
        PlayStyle::Pivot,
        PlayStyle::AllRound,
        PlayStyle::Hitter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Attacker => "Topspin attacker",
            PlayStyle::Blocker => "Blocker",
            PlayStyle::Defender => "Classic defender",
            PlayStyle::ModernDefender => "Modern defender",
            PlayStyle::Crab => "Crab (pimples)",
            PlayStyle::Pivot => "Pivot attacker",
            PlayStyle::AllRound => "All-round",
            PlayStyle::Hitter => "Hitter",
        }
    }
}

impl Default for PlayStyle {
    fn default() -> Self {
        PlayStyle::AllRound
    }
}

/// The fixed attribute set every competitor carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub mental: f64,
    pub stamina: f64,
    pub technique: f64,
    pub tactical: f64,
}

impl Attributes {
    /// Every attribute set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            attack: value,
            defense: value,
            speed: value,
            mental: value,
            stamina: value,
            technique: value,
            tactical: value,
        }
    }

    /// Typical attributes for a competitor rated `rating`: every skill at
    /// [`attribute_level`] and an average stamina.
    pub fn for_rating(rating: f64) -> Self {
        Self {
            stamina: 80.0,
            ..Self::uniform(attribute_level(rating))
        }
    }

    /// Elementwise mean of two attribute sets.
    pub fn mean(&self, other: &Attributes) -> Attributes {
        Attributes {
            attack: (self.attack + other.attack) / 2.0,
            defense: (self.defense + other.defense) / 2.0,
            speed: (self.speed + other.speed) / 2.0,
            mental: (self.mental + other.mental) / 2.0,
            stamina: (self.stamina + other.stamina) / 2.0,
            technique: (self.technique + other.technique) / 2.0,
            tactical: (self.tactical + other.tactical) / 2.0,
        }
    }
}

/// Skill level that goes with a rating, between 10 and 95.
pub fn attribute_level(rating: f64) -> f64 {
    ((rating - 200.0) / 25.0).clamp(10.0, 95.0)
}

/// Where a competitor came from. Only `Real` competitors are ever rated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorKind {
    #[default]
    Real,
    /// Transient doubles pair
    Composite,
    /// Zero-rated roster filler that always loses
    Ghost,
    /// Synthetic bracket or pool opponent
    Filler,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    /// Rating ("points")
    pub rating: f64,
    #[serde(default)]
    pub age: u8,
    #[serde(default)]
    pub style: PlayStyle,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub fatigue: f64,
    #[serde(default)]
    pub kind: CompetitorKind,
}

impl Competitor {
    /// A real competitor with neutral style and attributes in line with `rating`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: CompetitorId::new(id),
            name: name.into(),
            rating,
            age: 25,
            style: PlayStyle::AllRound,
            attributes: Attributes::for_rating(rating),
            fatigue: 0.0,
            kind: CompetitorKind::Real,
        }
    }

    /// Placeholder used to complete under-sized rosters.
    pub fn ghost(id: impl Into<String>) -> Self {
        Self {
            id: CompetitorId::new(id),
            name: "Forfeit".to_string(),
            rating: 0.0,
            age: 0,
            style: PlayStyle::AllRound,
            attributes: Attributes::default(),
            fatigue: 100.0,
            kind: CompetitorKind::Ghost,
        }
    }

    pub fn with_style(mut self, style: PlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    pub fn is_ghost(&self) -> bool {
        self.kind == CompetitorKind::Ghost
    }

    pub fn is_real(&self) -> bool {
        self.kind == CompetitorKind::Real
    }

    pub fn category(&self) -> AgeCategory {
        AgeCategory::from_age(self.age)
    }

    /// First word of the display name, used in point commentary.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Age bracket shown next to competition results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    Under9,
    Under11,
    Under14,
    Under16,
    Under19,
    #[default]
    Senior,
    Veteran,
}

impl AgeCategory {
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=8 => AgeCategory::Under9,
            9..=10 => AgeCategory::Under11,
            11..=13 => AgeCategory::Under14,
            14..=15 => AgeCategory::Under16,
            16..=18 => AgeCategory::Under19,
            19..=39 => AgeCategory::Senior,
            _ => AgeCategory::Veteran,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeCategory::Under9 => "U9",
            AgeCategory::Under11 => "U11",
            AgeCategory::Under14 => "U14",
            AgeCategory::Under16 => "U16",
            AgeCategory::Under19 => "U19",
            AgeCategory::Senior => "Senior",
            AgeCategory::Veteran => "Veteran",
        }
    }
}
