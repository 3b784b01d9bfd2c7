use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Attributes the judge is known to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Gender,
    Race,
    Ethnicity,
    Hair,
    Status,
    Franchises,
    Species,
    Protagonist,
}

impl Attribute {
    /// Resolve a wire key, case-insensitively. Portuguese aliases are accepted.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "gender" | "gênero" | "genero" => Some(Self::Gender),
            "race" | "raça" => Some(Self::Race),
            "ethnicity" | "etnia" => Some(Self::Ethnicity),
            "hair" | "cabelo" => Some(Self::Hair),
            "status" | "alivestatus" => Some(Self::Status),
            "franchises" | "franchise" | "paper" => Some(Self::Franchises),
            "species" => Some(Self::Species),
            "isprotagonist" => Some(Self::Protagonist),
            _ => None,
        }
    }

    /// Stable slug used for translation lookups.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Race => "race",
            Self::Ethnicity => "ethnicity",
            Self::Hair => "hair",
            Self::Status => "status",
            Self::Franchises => "franchises",
            Self::Species => "species",
            Self::Protagonist => "protagonist",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Gender => "👤",
            Self::Race | Self::Ethnicity => "👥",
            Self::Hair => "✂️",
            Self::Status => "❤️",
            Self::Franchises => "🎬",
            Self::Species => "⚡",
            Self::Protagonist => "🛡️",
        }
    }
}

/// Table order: known attributes first in declaration order, then the rest
/// alphabetically.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (Attribute::from_key(a), Attribute::from_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
