//! Wire model of the Play Service contract.
use crate::character::PlayCharacter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque play identifier issued by the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(pub u64);

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Single comparable value inside a comparison payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One side of an attribute comparison: a scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl AttributeValue {
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Scalar(Scalar::from(value))
    }

    #[must_use]
    pub fn list<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self::List(values.into_iter().map(Scalar::from).collect())
    }

    /// Scalars carried by this value, a scalar being a one-item slice.
    #[must_use]
    pub fn items(&self) -> &[Scalar] {
        match self {
            Self::List(items) => items,
            Self::Scalar(s) => std::slice::from_ref(s),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Guessed and target values of one attribute. Either side may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AttributePair {
    #[serde(default)]
    pub guessed: Option<AttributeValue>,
    #[serde(default)]
    pub target: Option<AttributeValue>,
}

impl AttributePair {
    #[must_use]
    pub const fn new(guessed: AttributeValue, target: AttributeValue) -> Self {
        Self {
            guessed: Some(guessed),
            target: Some(target),
        }
    }
}

/// Attribute key to pair, as computed by the judge.
pub type Comparison = BTreeMap<String, AttributePair>;

/// One judged attempt. Immutable once appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    #[serde(default)]
    pub attempt_number: u32,
    pub guess: String,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_completed: Option<bool>,
    #[serde(default, rename = "guessedImageUrl1")]
    pub guessed_image_url: Option<String>,
    #[serde(default)]
    pub comparison: Comparison,
    pub tried_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPlayRequest {
    pub mode_config_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPlayResponse {
    pub play_id: PlayId,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub attempts_count: u32,
    pub character: PlayCharacter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<String>,
}

/// Existing play returned by the progress lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaySnapshot {
    pub play_id: PlayId,
    #[serde(default)]
    pub completed: bool,
    pub character: PlayCharacter,
    #[serde(default)]
    pub attempts: Vec<Guess>,
}

/// Answer of the daily progress lookup, tagged on the wire by `alreadyPlayed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDailyProgress", into = "RawDailyProgress")]
pub enum DailyProgress {
    NotPlayed,
    Played(PlaySnapshot),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDailyProgress {
    already_played: bool,
    #[serde(flatten)]
    snapshot: Option<PlaySnapshot>,
}

impl TryFrom<RawDailyProgress> for DailyProgress {
    type Error = String;

    fn try_from(raw: RawDailyProgress) -> Result<Self, Self::Error> {
        match (raw.already_played, raw.snapshot) {
            (false, _) => Ok(Self::NotPlayed),
            (true, Some(snapshot)) => Ok(Self::Played(snapshot)),
            (true, None) => Err("alreadyPlayed is set but the play is missing".to_string()),
        }
    }
}

impl From<DailyProgress> for RawDailyProgress {
    fn from(progress: DailyProgress) -> Self {
        match progress {
            DailyProgress::NotPlayed => Self {
                already_played: false,
                snapshot: None,
            },
            DailyProgress::Played(snapshot) => Self {
                already_played: true,
                snapshot: Some(snapshot),
            },
        }
    }
}
