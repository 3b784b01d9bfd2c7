use crate::character::PlayCharacter;
use crate::reveal::stage_description;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Play modes offered each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Attribute-by-attribute comparison against the target.
    Classic,
    /// Emojis revealed one at a time.
    Emoji,
    /// Description revealed one sentence at a time.
    Description,
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Emoji, Self::Description];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Emoji => "emoji",
            Self::Description => "description",
        }
    }

    /// Whether the mode is played against a revealable clue list.
    #[must_use]
    pub const fn uses_clues(self) -> bool {
        matches!(self, Self::Emoji | Self::Description)
    }

    /// Ordered clue list for this mode, derived from the target.
    #[must_use]
    pub fn clues_for(self, target: &PlayCharacter) -> Vec<String> {
        match self {
            Self::Classic => Vec::new(),
            Self::Emoji => target
                .emojis
                .iter()
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Description => target
                .description
                .as_deref()
                .map(stage_description)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "emoji" | "emojis" => Ok(Self::Emoji),
            "description" => Ok(Self::Description),
            other => Err(format!("unknown game mode: {other}")),
        }
    }
}

/// Reveal policy of a session, tagged by mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Mode {
    Classic,
    Emoji { total_clues: usize },
    Description { total_clues: usize },
}

impl Mode {
    #[must_use]
    pub const fn new(mode: GameMode, total_clues: usize) -> Self {
        match mode {
            GameMode::Classic => Self::Classic,
            GameMode::Emoji => Self::Emoji { total_clues },
            GameMode::Description => Self::Description { total_clues },
        }
    }

    #[must_use]
    pub const fn game_mode(self) -> GameMode {
        match self {
            Self::Classic => GameMode::Classic,
            Self::Emoji { .. } => GameMode::Emoji,
            Self::Description { .. } => GameMode::Description,
        }
    }

    /// Clue count, `None` for modes without clues.
    #[must_use]
    pub const fn total_clues(self) -> Option<usize> {
        match self {
            Self::Classic => None,
            Self::Emoji { total_clues } | Self::Description { total_clues } => Some(total_clues),
        }
    }
}

/// Backend mode-config ids for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfigIds {
    pub classic: u32,
    pub emoji: u32,
    pub description: u32,
}

impl Default for ModeConfigIds {
    fn default() -> Self {
        Self {
            classic: 1,
            emoji: 2,
            description: 3,
        }
    }
}

impl ModeConfigIds {
    #[must_use]
    pub const fn id_for(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Classic => self.classic,
            GameMode::Emoji => self.emoji,
            GameMode::Description => self.description,
        }
    }

    #[must_use]
    pub fn mode_for(&self, id: u32) -> Option<GameMode> {
        GameMode::ALL.into_iter().find(|mode| self.id_for(*mode) == id)
    }

    /// Parse a `classic,emoji,description` triple such as `"1,2,3"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(',').map(|p| p.trim().parse::<u32>());
        let classic = parts.next()?.ok()?;
        let emoji = parts.next()?.ok()?;
        let description = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            classic,
            emoji,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> PlayCharacter {
        PlayCharacter {
            id: 1,
            name: "Shrek".into(),
            description: Some("Big and green. Lives in a swamp!".into()),
            image_url: None,
            emojis: vec!["🧅".into(), " ".into(), "🟢".into()],
        }
    }

    #[test]
    fn clues_follow_mode() {
        let t = target();
        assert!(GameMode::Classic.clues_for(&t).is_empty());
        assert_eq!(GameMode::Emoji.clues_for(&t), vec!["🧅", "🟢"]);
        assert_eq!(
            GameMode::Description.clues_for(&t),
            vec!["Big and green.", "Lives in a swamp!"]
        );
    }

    #[test]
    fn mode_ids_parse_and_lookup() {
        let ids = ModeConfigIds::parse(" 4, 5 ,6").unwrap();
        assert_eq!(ids.id_for(GameMode::Emoji), 5);
        assert_eq!(ids.mode_for(6), Some(GameMode::Description));
        assert!(ModeConfigIds::parse("1,2").is_none());
        assert!(ModeConfigIds::parse("1,2,3,4").is_none());
        assert!(ModeConfigIds::parse("a,b,c").is_none());
        assert_eq!(ModeConfigIds::default().mode_for(1), Some(GameMode::Classic));
    }

    #[test]
    fn mode_round_trips_through_strings() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>().unwrap(), mode);
        }
        assert!("image".parse::<GameMode>().is_err());
    }

    #[test]
    fn tagged_mode_reports_clues() {
        assert_eq!(Mode::new(GameMode::Classic, 9).total_clues(), None);
        assert_eq!(Mode::new(GameMode::Emoji, 4).total_clues(), Some(4));
        assert_eq!(
            Mode::new(GameMode::Description, 2).game_mode(),
            GameMode::Description
        );
    }
}
