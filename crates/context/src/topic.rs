use serde::Serialize;
use std::fmt;

/// Closed set of subject domains the context classifier can detect.
///
/// Variant order matters: it is the catalog declaration order, and the
/// classifier breaks score ties by it. Changing the order changes which
/// topic wins a tie and therefore the output of downstream term selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Programming,
    TechCompany,
    Biology,
    Finance,
    Food,
    Entertainment,
    Timepiece,
    Observation,
    Fitness,
    Business,
    Emotion,
    Computer,
    Legal,
    Tools,
    Season,
    Water,
    Mechanical,
    Construction,
    Bird,
    Electrical,
    Payment,
    Military,
    Writing,
    Music,
    Currency,
    Industrial,
    Botany,
    Spy,
    Sports,
    Sales,
    Terrain,
    Social,
    Education,
    Insect,
    Surveillance,
    Fashion,
    Product,
}

impl Topic {
    /// Stable snake_case label, used in logs and cache keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::TechCompany => "tech_company",
            Self::Biology => "biology",
            Self::Finance => "finance",
            Self::Food => "food",
            Self::Entertainment => "entertainment",
            Self::Timepiece => "timepiece",
            Self::Observation => "observation",
            Self::Fitness => "fitness",
            Self::Business => "business",
            Self::Emotion => "emotion",
            Self::Computer => "computer",
            Self::Legal => "legal",
            Self::Tools => "tools",
            Self::Season => "season",
            Self::Water => "water",
            Self::Mechanical => "mechanical",
            Self::Construction => "construction",
            Self::Bird => "bird",
            Self::Electrical => "electrical",
            Self::Payment => "payment",
            Self::Military => "military",
            Self::Writing => "writing",
            Self::Music => "music",
            Self::Currency => "currency",
            Self::Industrial => "industrial",
            Self::Botany => "botany",
            Self::Spy => "spy",
            Self::Sports => "sports",
            Self::Sales => "sales",
            Self::Terrain => "terrain",
            Self::Social => "social",
            Self::Education => "education",
            Self::Insect => "insect",
            Self::Surveillance => "surveillance",
            Self::Fashion => "fashion",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
