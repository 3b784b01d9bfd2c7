//! Error types shared by the play service client and the session controller.
use crate::mode::GameMode;
use thiserror::Error;

/// Failure talking to the Play Service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),
    /// The judge answered with a non-success status.
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl PlayError {
    /// Build a status error from a code and whatever body text the server sent.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Failure surfaced by the session controller.
///
/// Every variant leaves the session consistent: a failed initialization keeps
/// the controller uninitialized and a failed submission never appends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("could not start the {mode} game: {source}")]
    Initialization {
        mode: GameMode,
        #[source]
        source: PlayError,
    },
    #[error("could not submit guess: {0}")]
    Submission(#[source] PlayError),
    #[error("the {mode} target has no clues configured")]
    DegradedClueSet { mode: GameMode },
}

impl SessionError {
    /// Translation key used by front-ends to show a friendly message.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Initialization { .. } => "error.init",
            Self::Submission(_) => "error.submit",
            Self::DegradedClueSet { mode } => match mode {
                GameMode::Description => "error.no_description",
                GameMode::Classic | GameMode::Emoji => "error.no_emojis",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_context() {
        let err = SessionError::Initialization {
            mode: GameMode::Emoji,
            source: PlayError::status(500, "boom"),
        };
        assert_eq!(
            err.to_string(),
            "could not start the emoji game: server responded with status 500: boom"
        );
        assert_eq!(err.message_key(), "error.init");
    }

    #[test]
    fn degraded_clue_keys_follow_mode() {
        let desc = SessionError::DegradedClueSet {
            mode: GameMode::Description,
        };
        let emoji = SessionError::DegradedClueSet {
            mode: GameMode::Emoji,
        };
        assert_eq!(desc.message_key(), "error.no_description");
        assert_eq!(emoji.message_key(), "error.no_emojis");
    }

    #[test]
    fn json_errors_become_decode_failures() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(PlayError::from(err), PlayError::Decode(_)));
    }
}
