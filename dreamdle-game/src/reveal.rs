//! Progressive clue reveal for the emoji and description modes.
//!
//! The visible count is a pure projection of `(attempts, completed)`: nothing
//! here is persisted, so a reload reconstructs the same count from the
//! session snapshot alone.
use crate::mode::Mode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?…]+[.!?…]*").expect("sentence pattern is valid"));

/// Split a description into sentence fragments, keeping terminators.
#[must_use]
pub fn stage_description(text: &str) -> Vec<String> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clues visible after `incorrect_attempts` wrong guesses.
///
/// One clue is shown before the first guess and one more after each miss,
/// saturating at `total_clues`. No clues configured always yields zero.
#[must_use]
pub const fn reveal_count_after(incorrect_attempts: usize, total_clues: usize) -> usize {
    if total_clues == 0 {
        return 0;
    }
    let next = incorrect_attempts.saturating_add(1);
    if next < total_clues { next } else { total_clues }
}

/// Visible clue count for a session in `mode`.
#[must_use]
pub const fn reveal_count(mode: Mode, attempts: usize, completed: bool) -> usize {
    match mode.total_clues() {
        None => 0,
        Some(total) if completed => total,
        Some(total) => reveal_count_after(attempts, total),
    }
}

/// Snapshot of how much of the clue list is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RevealState {
    pub revealed: usize,
    pub total: usize,
}

impl RevealState {
    #[must_use]
    pub const fn project(mode: Mode, attempts: usize, completed: bool) -> Self {
        let total = match mode.total_clues() {
            Some(total) => total,
            None => 0,
        };
        Self {
            revealed: reveal_count(mode, attempts, completed),
            total,
        }
    }

    #[must_use]
    pub const fn hidden(&self) -> usize {
        self.total.saturating_sub(self.revealed)
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.revealed == self.total
    }

    /// Leading clues currently visible.
    #[must_use]
    pub fn visible<'a, T>(&self, clues: &'a [T]) -> &'a [T] {
        &clues[..self.revealed.min(clues.len())]
    }
}
