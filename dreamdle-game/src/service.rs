//! Play Service seam and its REST binding.
use crate::character::CharacterOption;
use crate::error::PlayError;
use crate::play::{DailyProgress, Guess, GuessRequest, PlayId, StartPlayRequest, StartPlayResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

/// The external judge: picks the daily target and decides correctness.
///
/// Futures are not `Send`; implementations run on the browser event loop or a
/// current-thread executor.
#[async_trait(?Send)]
pub trait PlayService {
    /// Start today's play for a mode, or recover the existing one.
    async fn start_play(&self, mode_config_id: u32) -> Result<StartPlayResponse, PlayError>;

    /// Look up whether a play already exists today for a mode.
    async fn daily_progress(&self, mode_config_id: u32) -> Result<DailyProgress, PlayError>;

    /// Submit one guess for judgement.
    async fn make_guess(&self, play_id: PlayId, guess: &str) -> Result<Guess, PlayError>;

    /// Characters offered by the autocomplete.
    async fn list_characters(&self) -> Result<Vec<CharacterOption>, PlayError>;

    /// Attempt history of a play, oldest first.
    async fn play_attempts(&self, play_id: PlayId) -> Result<Vec<Guess>, PlayError>;
}

#[async_trait(?Send)]
impl<T: PlayService + ?Sized> PlayService for Rc<T> {
    async fn start_play(&self, mode_config_id: u32) -> Result<StartPlayResponse, PlayError> {
        (**self).start_play(mode_config_id).await
    }

    async fn daily_progress(&self, mode_config_id: u32) -> Result<DailyProgress, PlayError> {
        (**self).daily_progress(mode_config_id).await
    }

    async fn make_guess(&self, play_id: PlayId, guess: &str) -> Result<Guess, PlayError> {
        (**self).make_guess(play_id, guess).await
    }

    async fn list_characters(&self) -> Result<Vec<CharacterOption>, PlayError> {
        (**self).list_characters().await
    }

    async fn play_attempts(&self, play_id: PlayId) -> Result<Vec<Guess>, PlayError> {
        (**self).play_attempts(play_id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Raw request capability. Credential attachment lives behind this trait so the
/// engine never touches tokens or storage.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, PlayError>;
}

/// Play Service speaking the backend's REST routes through a [`Transport`].
#[derive(Debug, Clone)]
pub struct RestPlayService<T> {
    transport: T,
}

impl<T: Transport> RestPlayService<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R, PlayError> {
        let value = self.transport.request(method, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait(?Send)]
impl<T: Transport> PlayService for RestPlayService<T> {
    async fn start_play(&self, mode_config_id: u32) -> Result<StartPlayResponse, PlayError> {
        let body = serde_json::to_value(StartPlayRequest { mode_config_id })?;
        self.call(Method::Post, "/plays/start", Some(body)).await
    }

    async fn daily_progress(&self, mode_config_id: u32) -> Result<DailyProgress, PlayError> {
        self.call(Method::Get, &format!("/plays/progress/{mode_config_id}"), None)
            .await
    }

    async fn make_guess(&self, play_id: PlayId, guess: &str) -> Result<Guess, PlayError> {
        let body = serde_json::to_value(GuessRequest {
            guess: guess.to_string(),
        })?;
        self.call(Method::Post, &format!("/plays/{play_id}/guess"), Some(body))
            .await
    }

    async fn list_characters(&self) -> Result<Vec<CharacterOption>, PlayError> {
        self.call(Method::Get, "/characters", None).await
    }

    async fn play_attempts(&self, play_id: PlayId) -> Result<Vec<Guess>, PlayError> {
        self.call(Method::Get, &format!("/plays/{play_id}/attempts"), None)
            .await
    }
}
