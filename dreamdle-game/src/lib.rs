//! Dreamdle Game Engine
//!
//! Platform-agnostic core of the Dreamdle daily guessing game: the Play
//! Service wire model and client seam, the attribute comparator, the clue
//! reveal scheduler and the per-mode session controller. No UI or browser
//! dependencies live here.

pub mod attributes;
pub mod autocomplete;
pub mod character;
pub mod comparator;
pub mod controller;
pub mod error;
pub mod judge;
pub mod mode;
pub mod play;
pub mod reveal;
pub mod service;
pub mod session;
pub mod share;

// Re-export commonly used types
pub use attributes::{Attribute, compare_keys};
pub use autocomplete::{SuggestionAction, SuggestionKey, Suggestions, filter_options};
pub use character::{AliveStatus, Character, CharacterOption, Gender, PlayCharacter};
pub use comparator::{
    AttributeVerdict, Verdict, VerdictRow, classify, classify_comparison, classify_pair,
};
pub use controller::{IgnoreReason, SessionController, SubmitOutcome};
pub use error::{PlayError, SessionError};
pub use judge::{MemoryJudge, compare_characters, sample_roster};
pub use mode::{GameMode, Mode, ModeConfigIds};
pub use play::{
    AttributePair, AttributeValue, Comparison, DailyProgress, Guess, GuessRequest, PlayId,
    PlaySnapshot, Scalar, StartPlayRequest, StartPlayResponse,
};
pub use reveal::{RevealState, reveal_count, reveal_count_after, stage_description};
pub use service::{Method, PlayService, RestPlayService, Transport};
pub use session::{Session, SessionPhase, VictorySummary};
pub use share::share_text;
