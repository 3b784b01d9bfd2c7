use crate::comparator::{Verdict, classify_comparison};
use crate::mode::GameMode;
use crate::session::Session;

/// Wordle-style share text for a session.
///
/// Classic rows carry one square per attribute, the winning row included;
/// clue modes carry one square per attempt on a single line.
#[must_use]
pub fn share_text(session: &Session) -> String {
    let attempts = session.attempts();
    let score = if session.completed() {
        attempts.len().to_string()
    } else {
        "X".to_string()
    };
    let mut out = format!("Dreamdle {} {score}", session.mode());

    match session.mode() {
        GameMode::Classic => {
            for guess in attempts {
                out.push('\n');
                for cell in classify_comparison(&guess.comparison) {
                    out.push_str(cell.verdict.square());
                }
            }
        }
        GameMode::Emoji | GameMode::Description => {
            out.push('\n');
            for guess in attempts {
                let verdict = if guess.is_correct {
                    Verdict::Exact
                } else {
                    Verdict::None
                };
                out.push_str(verdict.square());
            }
        }
    }
    out
}
