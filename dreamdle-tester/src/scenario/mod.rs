mod checks;
mod fixture;

use anyhow::Result;
use dreamdle_game::Character;
use fixture::Fixture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Smoke,
    RehydrationIdempotent,
    RevealMonotonic,
    DoubleSubmit,
    WinFreezes,
    RepeatGuess,
    DegradedClues,
    SubmissionFailure,
}

impl Scenario {
    pub const ALL: [Self; 8] = [
        Self::Smoke,
        Self::RehydrationIdempotent,
        Self::RevealMonotonic,
        Self::DoubleSubmit,
        Self::WinFreezes,
        Self::RepeatGuess,
        Self::DegradedClues,
        Self::SubmissionFailure,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Smoke => "smoke",
            Self::RehydrationIdempotent => "rehydration-idempotent",
            Self::RevealMonotonic => "reveal-monotonic",
            Self::DoubleSubmit => "double-submit",
            Self::WinFreezes => "win-freezes",
            Self::RepeatGuess => "repeat-guess",
            Self::DegradedClues => "degraded-clues",
            Self::SubmissionFailure => "submission-failure",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Smoke => "Win every mode after one wrong guess",
            Self::RehydrationIdempotent => "Reloading a session twice yields identical state",
            Self::RevealMonotonic => "Clue reveal grows by one per miss and completes on win",
            Self::DoubleSubmit => "Concurrent submissions reach the judge once",
            Self::WinFreezes => "Guesses after a win change nothing",
            Self::RepeatGuess => "Repeated names are ignored client-side",
            Self::DegradedClues => "Clue modes without clues report a degraded set",
            Self::SubmissionFailure => "A failed guess appends nothing and can be retried",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Run one iteration against a fixture seeded with `seed`.
    pub async fn run(self, roster: &[Character], seed: u64) -> Result<()> {
        match self {
            Self::Smoke => checks::smoke(Fixture::new(roster, seed)?).await,
            Self::RehydrationIdempotent => {
                checks::rehydration_idempotent(Fixture::new(roster, seed)?).await
            }
            Self::RevealMonotonic => checks::reveal_monotonic(Fixture::new(roster, seed)?).await,
            Self::DoubleSubmit => checks::double_submit(Fixture::new(roster, seed)?).await,
            Self::WinFreezes => checks::win_freezes(Fixture::new(roster, seed)?).await,
            Self::RepeatGuess => checks::repeat_guess(Fixture::new(roster, seed)?).await,
            Self::DegradedClues => checks::degraded_clues(Fixture::degraded(roster, seed)?).await,
            Self::SubmissionFailure => {
                checks::submission_failure(Fixture::new(roster, seed)?).await
            }
        }
    }
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    Scenario::ALL.into_iter().map(|s| (s.key(), s.description()))
}
