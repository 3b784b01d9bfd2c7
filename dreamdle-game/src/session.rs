use crate::character::PlayCharacter;
use crate::error::SessionError;
use crate::mode::{GameMode, Mode};
use crate::play::{Guess, PlayId, PlaySnapshot, StartPlayResponse};
use crate::reveal::RevealState;
use serde::{Deserialize, Serialize};

/// Where a session sits in its daily lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress { attempts: usize, revealed: usize },
    Won { attempts: usize, revealed: usize },
}

impl SessionPhase {
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// End-of-game summary shown once the target is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictorySummary {
    pub mode: GameMode,
    pub attempts: usize,
    pub target_name: String,
    pub target_image: Option<String>,
    pub clues: Vec<String>,
}

/// Per-day, per-mode play state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    play_id: PlayId,
    mode: GameMode,
    target: PlayCharacter,
    clues: Vec<String>,
    attempts: Vec<Guess>,
    completed: bool,
}

impl Session {
    /// Fresh session from a start-play answer.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DegradedClueSet`] when a clue mode target has no clues.
    pub fn start(mode: GameMode, started: StartPlayResponse) -> Result<Self, SessionError> {
        if started.completed || started.attempts_count > 0 {
            log::debug!(
                "play {} already had {} attempts; starting from an empty history",
                started.play_id,
                started.attempts_count
            );
        }
        Self::build(mode, started.play_id, started.character, Vec::new(), false)
    }

    /// Session adopted as-is from a progress snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DegradedClueSet`] when a clue mode target has no clues.
    pub fn rehydrate(mode: GameMode, snapshot: PlaySnapshot) -> Result<Self, SessionError> {
        let completed = snapshot.completed || snapshot.attempts.iter().any(|g| g.is_correct);
        Self::build(
            mode,
            snapshot.play_id,
            snapshot.character,
            snapshot.attempts,
            completed,
        )
    }

    fn build(
        mode: GameMode,
        play_id: PlayId,
        target: PlayCharacter,
        attempts: Vec<Guess>,
        completed: bool,
    ) -> Result<Self, SessionError> {
        let clues = mode.clues_for(&target);
        if mode.uses_clues() && clues.is_empty() {
            return Err(SessionError::DegradedClueSet { mode });
        }
        Ok(Self {
            play_id,
            mode,
            target: target_view(mode, target),
            clues,
            attempts,
            completed,
        })
    }

    #[must_use]
    pub const fn play_id(&self) -> PlayId {
        self.play_id
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn target(&self) -> &PlayCharacter {
        &self.target
    }

    #[must_use]
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    #[must_use]
    pub fn attempts(&self) -> &[Guess] {
        &self.attempts
    }

    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn reveal_mode(&self) -> Mode {
        Mode::new(self.mode, self.clues.len())
    }

    #[must_use]
    pub fn reveal(&self) -> RevealState {
        RevealState::project(self.reveal_mode(), self.attempts.len(), self.completed)
    }

    /// Clues currently shown to the player.
    #[must_use]
    pub fn visible_clues(&self) -> &[String] {
        self.reveal().visible(&self.clues)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        let attempts = self.attempts.len();
        let revealed = self.reveal().revealed;
        if self.completed {
            SessionPhase::Won { attempts, revealed }
        } else {
            SessionPhase::InProgress { attempts, revealed }
        }
    }

    /// Whether `name` was already submitted, ignoring case and surrounding space.
    #[must_use]
    pub fn has_guessed(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.attempts
            .iter()
            .any(|g| g.guess.trim().to_lowercase() == needle)
    }

    /// Append a judged attempt. Returns `true` when it wins the session.
    ///
    /// Attempts after a win are dropped so `completed` keeps matching history.
    pub fn record(&mut self, guess: Guess) -> bool {
        if self.completed {
            log::warn!("play {} already won; dropping late attempt", self.play_id);
            return false;
        }
        let won = guess.is_correct;
        self.attempts.push(guess);
        if won {
            self.completed = true;
        }
        won
    }

    #[must_use]
    pub fn victory(&self) -> Option<VictorySummary> {
        self.completed.then(|| VictorySummary {
            mode: self.mode,
            attempts: self.attempts.len(),
            target_name: self.target.name.clone(),
            target_image: self.target.image_url.clone(),
            clues: self.clues.clone(),
        })
    }

    /// Attempts newest first, for the guess table.
    #[must_use]
    pub fn attempts_newest_first(&self) -> Vec<&Guess> {
        let mut ordered: Vec<&Guess> = self.attempts.iter().collect();
        ordered.sort_by(|a, b| b.tried_at.cmp(&a.tried_at));
        ordered
    }
}

/// Keep only the target fields `mode` reads, so a session built from a
/// start-play answer equals one built from a progress snapshot.
fn target_view(mode: GameMode, target: PlayCharacter) -> PlayCharacter {
    let PlayCharacter {
        id,
        name,
        description,
        image_url,
        emojis,
    } = target;
    PlayCharacter {
        id,
        name,
        image_url,
        description: description.filter(|_| mode == GameMode::Description),
        emojis: if mode == GameMode::Emoji { emojis } else { Vec::new() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn target() -> PlayCharacter {
        PlayCharacter {
            id: 3,
            name: "Puss".into(),
            description: Some("A cat. With boots.".into()),
            image_url: Some("puss.png".into()),
            emojis: vec!["🐱".into(), "👢".into(), "⚔️".into()],
        }
    }

    fn guess(n: u32, name: &str, correct: bool) -> Guess {
        Guess {
            attempt_number: n,
            guess: name.into(),
            is_correct: correct,
            play_completed: None,
            guessed_image_url: None,
            comparison: Default::default(),
            tried_at: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, n).unwrap(),
        }
    }

    fn started(character: PlayCharacter) -> StartPlayResponse {
        StartPlayResponse {
            play_id: PlayId(9),
            completed: false,
            attempts_count: 0,
            character,
            guest_id: None,
        }
    }

    #[test]
    fn start_begins_in_progress_with_one_clue() {
        let session = Session::start(GameMode::Emoji, started(target())).unwrap();
        assert_eq!(
            session.phase(),
            SessionPhase::InProgress {
                attempts: 0,
                revealed: 1
            }
        );
        assert_eq!(session.visible_clues(), &["🐱".to_string()]);
    }

    #[test]
    fn clue_modes_without_clues_are_degraded() {
        let mut bare = target();
        bare.emojis.clear();
        bare.description = None;
        assert_eq!(
            Session::start(GameMode::Emoji, started(bare.clone())),
            Err(SessionError::DegradedClueSet {
                mode: GameMode::Emoji
            })
        );
        assert!(Session::start(GameMode::Description, started(bare.clone())).is_err());
        assert!(Session::start(GameMode::Classic, started(bare)).is_ok());
    }

    #[test]
    fn recording_a_win_completes_and_reveals_all() {
        let mut session = Session::start(GameMode::Emoji, started(target())).unwrap();
        assert!(!session.record(guess(1, "Shrek", false)));
        assert_eq!(session.reveal().revealed, 2);
        assert!(session.record(guess(2, "Puss", true)));
        assert!(session.completed());
        assert_eq!(session.reveal().revealed, 3);
        assert!(!session.record(guess(3, "Donkey", false)));
        assert_eq!(session.attempts().len(), 2);
        let victory = session.victory().unwrap();
        assert_eq!(victory.attempts, 2);
        assert_eq!(victory.target_name, "Puss");
    }

    #[test]
    fn rehydrate_derives_completion_from_attempts() {
        let snapshot = PlaySnapshot {
            play_id: PlayId(2),
            completed: false,
            character: target(),
            attempts: vec![guess(1, "Fiona", false), guess(2, "Puss", true)],
        };
        let session = Session::rehydrate(GameMode::Description, snapshot).unwrap();
        assert!(session.completed());
        assert!(session.phase().is_won());
        assert_eq!(session.visible_clues().len(), 2);
    }

    #[test]
    fn rehydrate_trusts_the_completed_flag() {
        let snapshot = PlaySnapshot {
            play_id: PlayId(4),
            completed: true,
            character: target(),
            attempts: vec![guess(1, "Fiona", false)],
        };
        let mut session = Session::rehydrate(GameMode::Emoji, snapshot).unwrap();
        assert_eq!(
            session.phase(),
            SessionPhase::Won {
                attempts: 1,
                revealed: 3
            }
        );
        assert!(!session.record(guess(2, "Puss", true)));
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn target_keeps_only_fields_the_mode_reads() {
        let live = Session::start(GameMode::Classic, started(target())).unwrap();
        assert!(live.target().emojis.is_empty());
        assert_eq!(live.target().description, None);
        assert_eq!(live.target().image_url.as_deref(), Some("puss.png"));

        let mut slim = target();
        slim.emojis.clear();
        let reloaded = Session::rehydrate(
            GameMode::Classic,
            PlaySnapshot {
                play_id: PlayId(9),
                completed: false,
                character: slim,
                attempts: Vec::new(),
            },
        )
        .unwrap();
        assert_eq!(reloaded, live);

        let emoji = Session::start(GameMode::Emoji, started(target())).unwrap();
        assert_eq!(emoji.target().emojis.len(), 3);
        assert_eq!(emoji.target().description, None);
    }

    #[test]
    fn repeat_detection_ignores_case_and_space() {
        let mut session = Session::start(GameMode::Classic, started(target())).unwrap();
        session.record(guess(1, "Lord Farquaad", false));
        assert!(session.has_guessed("  lord farquaad "));
        assert!(!session.has_guessed("Farquaad"));
    }

    #[test]
    fn newest_attempts_come_first() {
        let mut session = Session::start(GameMode::Classic, started(target())).unwrap();
        session.record(guess(1, "A", false));
        session.record(guess(2, "B", false));
        let names: Vec<&str> = session
            .attempts_newest_first()
            .iter()
            .map(|g| g.guess.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
