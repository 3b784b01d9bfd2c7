use serde::{Deserialize, Deserializer, Serialize};

/// Accept ids sent either as JSON numbers or as numeric strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Non-secret view of a play's target character.
///
/// The name is only meaningful to the player once the play is won; emojis and
/// description are the clues for the reveal modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayCharacter {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "imageUrl1")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub emojis: Vec<String>,
}

/// Entry of the autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOption {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "imageUrl1")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AliveStatus {
    Alive,
    Dead,
    #[default]
    Unknown,
}

impl AliveStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "ALIVE",
            Self::Dead => "DEAD",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Full character record as the judge knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emojis: Vec<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub race: Vec<String>,
    #[serde(default)]
    pub ethnicity: Vec<String>,
    #[serde(default)]
    pub hair: String,
    #[serde(default)]
    pub alive_status: AliveStatus,
    #[serde(default, rename = "franchiseNames")]
    pub franchises: Vec<String>,
    #[serde(default, rename = "imageUrl1")]
    pub image_url: Option<String>,
}

impl Character {
    /// View handed out when a play starts.
    #[must_use]
    pub fn to_play_view(&self) -> PlayCharacter {
        PlayCharacter {
            id: self.id,
            name: self.name.clone(),
            description: Some(self.description.clone()).filter(|d| !d.trim().is_empty()),
            image_url: self.image_url.clone(),
            emojis: self.emojis.clone(),
        }
    }

    /// Slimmer view used by progress snapshots, which omit emojis.
    #[must_use]
    pub fn to_progress_view(&self) -> PlayCharacter {
        PlayCharacter {
            emojis: Vec::new(),
            ..self.to_play_view()
        }
    }

    #[must_use]
    pub fn to_option(&self) -> CharacterOption {
        CharacterOption {
            id: self.id,
            name: self.name.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
