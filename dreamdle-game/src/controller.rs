//! Session controller: one per mode, shared by the UI and the tester.
//!
//! The controller owns its [`Session`] and serializes submissions with an
//! in-flight flag. Interior mutability is single-threaded (`Cell`/`RefCell`)
//! and no borrow is ever held across an `.await`.
use crate::error::{PlayError, SessionError};
use crate::mode::GameMode;
use crate::play::{DailyProgress, Guess, PlayId, PlaySnapshot};
use crate::reveal::RevealState;
use crate::service::PlayService;
use crate::session::{Session, SessionPhase, VictorySummary};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// Why a submission was dropped without reaching the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    EmptyInput,
    NotInitialized,
    Completed,
    InFlight,
    AlreadyGuessed,
    Disposed,
    /// The session was replaced while the guess was being judged.
    Superseded,
}

/// Result of a call to [`SessionController::submit_guess`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Recorded {
        guess: Guess,
        victory: Option<VictorySummary>,
    },
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }

    #[must_use]
    pub const fn is_victory(&self) -> bool {
        matches!(
            self,
            Self::Recorded {
                victory: Some(_),
                ..
            }
        )
    }
}

/// Clears the in-flight flag however the submission ends.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct SessionController<S> {
    service: S,
    mode: GameMode,
    mode_config_id: u32,
    session: RefCell<Option<Session>>,
    /// Bumped whenever `initialize` swaps the session in.
    generation: Cell<u64>,
    in_flight: Cell<bool>,
    disposed: Cell<bool>,
}

impl<S: PlayService> SessionController<S> {
    pub const fn new(service: S, mode: GameMode, mode_config_id: u32) -> Self {
        Self {
            service,
            mode,
            mode_config_id,
            session: RefCell::new(None),
            generation: Cell::new(0),
            in_flight: Cell::new(false),
            disposed: Cell::new(false),
        }
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    pub const fn mode_config_id(&self) -> u32 {
        self.mode_config_id
    }

    /// Load today's play: adopt an existing one or start a new one.
    ///
    /// A failure leaves any previously loaded session in place.
    ///
    /// # Errors
    ///
    /// [`SessionError::Initialization`] when the service fails, and
    /// [`SessionError::DegradedClueSet`] when a clue mode target has no clues.
    pub async fn initialize(&self) -> Result<SessionPhase, SessionError> {
        let progress = self
            .service
            .daily_progress(self.mode_config_id)
            .await
            .map_err(|source| self.init_failed(source))?;

        let session = match progress {
            DailyProgress::NotPlayed => {
                let started = self
                    .service
                    .start_play(self.mode_config_id)
                    .await
                    .map_err(|source| self.init_failed(source))?;
                log::debug!("{} play {} started", self.mode, started.play_id);
                Session::start(self.mode, started)
            }
            DailyProgress::Played(snapshot) => {
                let snapshot = self.complete_snapshot(snapshot).await?;
                log::debug!(
                    "{} play {} resumed with {} attempts",
                    self.mode,
                    snapshot.play_id,
                    snapshot.attempts.len()
                );
                Session::rehydrate(self.mode, snapshot)
            }
        }
        .inspect_err(|err| log::error!("{err}"))?;

        if self.disposed.get() {
            log::debug!("{} controller disposed during initialization", self.mode);
            return Ok(self.phase());
        }
        let phase = session.phase();
        self.session.replace(Some(session));
        self.generation.set(self.generation.get() + 1);
        Ok(phase)
    }

    /// Progress snapshots may omit the emoji list. Clue modes fetch the full
    /// target through `start_play`, which returns the existing play.
    async fn complete_snapshot(&self, snapshot: PlaySnapshot) -> Result<PlaySnapshot, SessionError> {
        if !self.mode.uses_clues() || !self.mode.clues_for(&snapshot.character).is_empty() {
            return Ok(snapshot);
        }
        let started = self
            .service
            .start_play(self.mode_config_id)
            .await
            .map_err(|source| self.init_failed(source))?;
        if started.play_id != snapshot.play_id {
            log::warn!(
                "start returned play {} while progress reported {}",
                started.play_id,
                snapshot.play_id
            );
        }
        Ok(PlaySnapshot {
            character: started.character,
            ..snapshot
        })
    }

    fn init_failed(&self, source: PlayError) -> SessionError {
        let err = SessionError::Initialization {
            mode: self.mode,
            source,
        };
        log::error!("{err}");
        err
    }

    /// Send one guess to the judge and record the verdict.
    ///
    /// Input is trimmed; empty input, repeats, submissions while another is
    /// pending and submissions after a win are ignored without a judge call.
    /// A verdict that lands after `initialize` reloaded the session is dropped,
    /// since the reloaded history may already hold it.
    ///
    /// # Errors
    ///
    /// [`SessionError::Submission`] when the judge call fails. Nothing is
    /// appended in that case.
    pub async fn submit_guess(&self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        let guess = raw.trim();
        let play_id = match self.admit(guess) {
            Ok(play_id) => play_id,
            Err(reason) => {
                log::warn!("{} guess {guess:?} ignored: {reason:?}", self.mode);
                return Ok(SubmitOutcome::Ignored(reason));
            }
        };

        let generation = self.generation.get();
        let _guard = InFlight::enter(&self.in_flight);
        let judged = self
            .service
            .make_guess(play_id, guess)
            .await
            .map_err(|source| {
                log::error!("guess {guess:?} for play {play_id} failed: {source}");
                SessionError::Submission(source)
            })?;

        if self.disposed.get() {
            return Ok(SubmitOutcome::Ignored(IgnoreReason::Disposed));
        }
        if self.generation.get() != generation {
            log::debug!("{} guess {guess:?} landed after a reload", self.mode);
            return Ok(SubmitOutcome::Ignored(IgnoreReason::Superseded));
        }
        let mut slot = self.session.borrow_mut();
        let Some(session) = slot.as_mut() else {
            return Ok(SubmitOutcome::Ignored(IgnoreReason::Superseded));
        };
        let won = session.record(judged.clone());
        log::debug!(
            "{} attempt {} {guess:?}: {}",
            self.mode,
            session.attempts().len(),
            if won { "correct" } else { "wrong" }
        );
        Ok(SubmitOutcome::Recorded {
            guess: judged,
            victory: if won { session.victory() } else { None },
        })
    }

    fn admit(&self, guess: &str) -> Result<PlayId, IgnoreReason> {
        if self.disposed.get() {
            return Err(IgnoreReason::Disposed);
        }
        if guess.is_empty() {
            return Err(IgnoreReason::EmptyInput);
        }
        if self.in_flight.get() {
            return Err(IgnoreReason::InFlight);
        }
        match &*self.session.borrow() {
            None => Err(IgnoreReason::NotInitialized),
            Some(s) if s.completed() => Err(IgnoreReason::Completed),
            Some(s) if s.has_guessed(guess) => Err(IgnoreReason::AlreadyGuessed),
            Some(s) => Ok(s.play_id()),
        }
    }

    /// Copy of the current session, if one is loaded.
    pub fn snapshot(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn with_session<R>(&self, f: impl FnOnce(Option<&Session>) -> R) -> R {
        f(self.session.borrow().as_ref())
    }

    pub fn phase(&self) -> SessionPhase {
        self.with_session(|s| s.map_or(SessionPhase::NotStarted, Session::phase))
    }

    pub fn reveal(&self) -> RevealState {
        self.with_session(|s| s.map(Session::reveal).unwrap_or_default())
    }

    pub fn is_initialized(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Stop applying results of pending calls, e.g. when the view unmounts.
    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }
}
