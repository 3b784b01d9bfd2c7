//! In-memory Play Service.
//!
//! Judges guesses against a fixed roster with one target per mode config,
//! the way the backend does for a single day. Used by the tests and by the
//! tester binary; it can inject latency and failures.
use crate::character::{Character, CharacterOption};
use crate::error::PlayError;
use crate::play::{
    AttributePair, AttributeValue, Comparison, DailyProgress, Guess, PlayId, PlaySnapshot,
    StartPlayResponse,
};
use crate::service::PlayService;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

const SAMPLE_ROSTER: &str = include_str!("../data/roster.json");

/// Bundled roster used by the tester and the engine tests.
///
/// # Errors
///
/// Returns [`PlayError::Decode`] if the bundled JSON does not parse.
pub fn sample_roster() -> Result<Vec<Character>, PlayError> {
    Ok(serde_json::from_str(SAMPLE_ROSTER)?)
}

#[derive(Debug, Clone)]
struct JudgedPlay {
    id: PlayId,
    mode_config_id: u32,
    target: u64,
    attempts: Vec<Guess>,
    completed: bool,
}

/// Pends exactly once so other futures on the same executor get polled.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Debug)]
pub struct MemoryJudge {
    roster: Vec<Character>,
    targets: BTreeMap<u32, u64>,
    plays: RefCell<BTreeMap<u32, JudgedPlay>>,
    next_play: Cell<u64>,
    clock: Cell<i64>,
    epoch: DateTime<Utc>,
    latency_ticks: Cell<usize>,
    failing_guesses: Cell<usize>,
    failing_progress: Cell<bool>,
    guess_calls: Cell<usize>,
}

impl MemoryJudge {
    #[must_use]
    pub fn new(roster: Vec<Character>) -> Self {
        Self {
            roster,
            targets: BTreeMap::new(),
            plays: RefCell::new(BTreeMap::new()),
            next_play: Cell::new(1),
            clock: Cell::new(0),
            epoch: Utc
                .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            latency_ticks: Cell::new(0),
            failing_guesses: Cell::new(0),
            failing_progress: Cell::new(false),
            guess_calls: Cell::new(0),
        }
    }

    /// Set the daily target of a mode config by character id.
    #[must_use]
    pub fn with_target(mut self, mode_config_id: u32, character_id: u64) -> Self {
        self.targets.insert(mode_config_id, character_id);
        self
    }

    /// Yield to the executor this many times before answering a guess.
    pub fn set_latency(&self, ticks: usize) {
        self.latency_ticks.set(ticks);
    }

    /// Make the next `count` guess calls fail with a 503.
    pub fn fail_next_guesses(&self, count: usize) {
        self.failing_guesses.set(count);
    }

    pub fn set_progress_failing(&self, failing: bool) {
        self.failing_progress.set(failing);
    }

    /// Number of guess calls received, failed ones included.
    pub fn guess_calls(&self) -> usize {
        self.guess_calls.get()
    }

    pub fn roster(&self) -> &[Character] {
        &self.roster
    }

    pub fn target_of(&self, mode_config_id: u32) -> Option<&Character> {
        let id = self.targets.get(&mode_config_id)?;
        self.character(*id)
    }

    fn character(&self, id: u64) -> Option<&Character> {
        self.roster.iter().find(|c| c.id == id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Character> {
        let needle = name.trim().to_lowercase();
        self.roster
            .iter()
            .find(|c| c.name.trim().to_lowercase() == needle)
    }

    fn tick(&self) -> DateTime<Utc> {
        let now = self.clock.get() + 1;
        self.clock.set(now);
        self.epoch + Duration::seconds(now)
    }

    fn started_view(&self, play: &JudgedPlay) -> Result<StartPlayResponse, PlayError> {
        let target = self
            .character(play.target)
            .ok_or_else(|| PlayError::status(404, "target character missing"))?;
        Ok(StartPlayResponse {
            play_id: play.id,
            completed: play.completed,
            attempts_count: u32::try_from(play.attempts.len()).unwrap_or(u32::MAX),
            character: target.to_play_view(),
            guest_id: None,
        })
    }

    async fn pause(&self) {
        for _ in 0..self.latency_ticks.get() {
            YieldNow(false).await;
        }
    }
}

/// Server-side comparison between a guessed character and the target.
#[must_use]
pub fn compare_characters(guessed: &Character, target: &Character) -> Comparison {
    let text = AttributeValue::text;
    let list = |values: &[String]| AttributeValue::list(values.iter().map(String::as_str));

    let mut comparison = Comparison::new();
    comparison.insert(
        "gender".into(),
        AttributePair::new(text(guessed.gender.as_str()), text(target.gender.as_str())),
    );
    comparison.insert(
        "race".into(),
        AttributePair::new(list(&guessed.race), list(&target.race)),
    );
    comparison.insert(
        "ethnicity".into(),
        AttributePair::new(list(&guessed.ethnicity), list(&target.ethnicity)),
    );
    comparison.insert(
        "hair".into(),
        AttributePair::new(text(&guessed.hair), text(&target.hair)),
    );
    comparison.insert(
        "aliveStatus".into(),
        AttributePair::new(
            text(guessed.alive_status.as_str()),
            text(target.alive_status.as_str()),
        ),
    );
    comparison.insert(
        "franchises".into(),
        AttributePair::new(list(&guessed.franchises), list(&target.franchises)),
    );
    comparison
}

#[async_trait(?Send)]
impl PlayService for MemoryJudge {
    async fn start_play(&self, mode_config_id: u32) -> Result<StartPlayResponse, PlayError> {
        if let Some(play) = self.plays.borrow().get(&mode_config_id) {
            return self.started_view(play);
        }
        let target = self
            .targets
            .get(&mode_config_id)
            .copied()
            .ok_or_else(|| PlayError::status(404, "no daily character for this mode"))?;
        let id = PlayId(self.next_play.get());
        self.next_play.set(id.0 + 1);
        let play = JudgedPlay {
            id,
            mode_config_id,
            target,
            attempts: Vec::new(),
            completed: false,
        };
        let started = self.started_view(&play)?;
        self.plays.borrow_mut().insert(mode_config_id, play);
        Ok(started)
    }

    async fn daily_progress(&self, mode_config_id: u32) -> Result<DailyProgress, PlayError> {
        if self.failing_progress.get() {
            return Err(PlayError::Network("progress lookup unreachable".into()));
        }
        let plays = self.plays.borrow();
        let Some(play) = plays.get(&mode_config_id) else {
            return Ok(DailyProgress::NotPlayed);
        };
        let target = self
            .character(play.target)
            .ok_or_else(|| PlayError::status(404, "target character missing"))?;
        Ok(DailyProgress::Played(PlaySnapshot {
            play_id: play.id,
            completed: play.completed,
            character: target.to_progress_view(),
            attempts: play.attempts.clone(),
        }))
    }

    async fn make_guess(&self, play_id: PlayId, guess: &str) -> Result<Guess, PlayError> {
        self.guess_calls.set(self.guess_calls.get() + 1);
        self.pause().await;
        if self.failing_guesses.get() > 0 {
            self.failing_guesses.set(self.failing_guesses.get() - 1);
            return Err(PlayError::status(503, "judge unavailable"));
        }

        let mut plays = self.plays.borrow_mut();
        let play = plays
            .values_mut()
            .find(|p| p.id == play_id)
            .ok_or_else(|| PlayError::status(404, format!("play {play_id} not found")))?;
        if play.completed {
            return Err(PlayError::status(409, "play already completed"));
        }
        let guessed = self
            .find_by_name(guess)
            .ok_or_else(|| PlayError::status(404, format!("no character named {guess}")))?;
        let target = self
            .character(play.target)
            .ok_or_else(|| PlayError::status(404, "target character missing"))?;

        let is_correct = guessed.id == target.id;
        let judged = Guess {
            attempt_number: u32::try_from(play.attempts.len() + 1).unwrap_or(u32::MAX),
            guess: guessed.name.clone(),
            is_correct,
            play_completed: Some(is_correct),
            guessed_image_url: guessed.image_url.clone(),
            comparison: compare_characters(guessed, target),
            tried_at: self.tick(),
        };
        log::debug!(
            "play {play_id} (mode config {}) attempt {}: {}",
            play.mode_config_id,
            judged.attempt_number,
            judged.guess
        );
        play.attempts.push(judged.clone());
        play.completed = is_correct;
        Ok(judged)
    }

    async fn list_characters(&self) -> Result<Vec<CharacterOption>, PlayError> {
        Ok(self.roster.iter().map(Character::to_option).collect())
    }

    async fn play_attempts(&self, play_id: PlayId) -> Result<Vec<Guess>, PlayError> {
        self.plays
            .borrow()
            .values()
            .find(|p| p.id == play_id)
            .map(|p| p.attempts.clone())
            .ok_or_else(|| PlayError::status(404, format!("play {play_id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{AliveStatus, Gender};
    use crate::comparator::{Verdict, classify_comparison};
    use futures::executor::block_on;

    fn character(id: u64, name: &str, race: &[&str]) -> Character {
        Character {
            id,
            name: name.into(),
            description: format!("{name} is somebody. Guess who."),
            emojis: vec!["🎬".into(), "⭐".into()],
            gender: Gender::Male,
            race: race.iter().map(|r| r.to_string()).collect(),
            ethnicity: Vec::new(),
            hair: "None".into(),
            alive_status: AliveStatus::Alive,
            franchises: vec!["Shrek".into()],
            image_url: None,
        }
    }

    fn judge() -> MemoryJudge {
        MemoryJudge::new(vec![
            character(1, "Shrek", &["Ogre"]),
            character(2, "Lord Farquaad", &["Human"]),
            character(3, "Fiona", &["Human", "Ogre"]),
        ])
        .with_target(1, 3)
    }

    #[test]
    fn bundled_roster_parses() {
        let roster = sample_roster().unwrap();
        assert!(roster.len() >= 10);
        let bare = roster.iter().find(|c| c.name == "Gingy").unwrap();
        assert!(bare.emojis.is_empty());
        assert!(bare.to_play_view().description.is_none());
    }

    #[test]
    fn progress_reports_existing_play_without_emojis() {
        let judge = judge();
        assert_eq!(block_on(judge.daily_progress(1)).unwrap(), DailyProgress::NotPlayed);
        let started = block_on(judge.start_play(1)).unwrap();
        assert_eq!(started.character.emojis.len(), 2);
        let again = block_on(judge.start_play(1)).unwrap();
        assert_eq!(again.play_id, started.play_id);

        match block_on(judge.daily_progress(1)).unwrap() {
            DailyProgress::Played(snapshot) => {
                assert_eq!(snapshot.play_id, started.play_id);
                assert!(snapshot.character.emojis.is_empty());
            }
            DailyProgress::NotPlayed => panic!("play should exist"),
        }
    }

    #[test]
    fn guesses_are_numbered_and_compared() {
        let judge = judge();
        let play = block_on(judge.start_play(1)).unwrap().play_id;
        let first = block_on(judge.make_guess(play, "lord farquaad")).unwrap();
        assert_eq!(first.attempt_number, 1);
        assert_eq!(first.guess, "Lord Farquaad");
        assert!(!first.is_correct);
        let row = classify_comparison(&first.comparison);
        let race = row.iter().find(|c| c.key == "race").unwrap();
        assert_eq!(race.verdict, Verdict::Partial);

        let second = block_on(judge.make_guess(play, "Fiona")).unwrap();
        assert!(second.is_correct);
        assert!(second.tried_at > first.tried_at);
        assert_eq!(
            block_on(judge.make_guess(play, "Shrek")),
            Err(PlayError::status(409, "play already completed"))
        );
        assert_eq!(block_on(judge.play_attempts(play)).unwrap().len(), 2);
        assert_eq!(judge.guess_calls(), 3);
    }

    #[test]
    fn unknown_names_and_modes_are_rejected() {
        let judge = judge();
        assert!(matches!(
            block_on(judge.start_play(9)),
            Err(PlayError::Status { status: 404, .. })
        ));
        let play = block_on(judge.start_play(1)).unwrap().play_id;
        assert!(matches!(
            block_on(judge.make_guess(play, "Donkey")),
            Err(PlayError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn injected_failures_are_consumed() {
        let judge = judge();
        let play = block_on(judge.start_play(1)).unwrap().play_id;
        judge.fail_next_guesses(1);
        assert!(block_on(judge.make_guess(play, "Shrek")).is_err());
        assert!(block_on(judge.make_guess(play, "Shrek")).is_ok());
        judge.set_progress_failing(true);
        assert!(matches!(
            block_on(judge.daily_progress(1)),
            Err(PlayError::Network(_))
        ));
    }
}
