//! Suggestion filtering and keyboard highlight for the guess input.
use crate::character::CharacterOption;

/// Options matching `query`: names starting with it first, then names
/// containing it, each group in list order. Names in `guessed` are skipped.
#[must_use]
pub fn filter_options<'a>(
    options: &'a [CharacterOption],
    query: &str,
    guessed: &[String],
) -> Vec<&'a CharacterOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let taken: Vec<String> = guessed.iter().map(|g| g.trim().to_lowercase()).collect();

    let (mut prefix, mut infix) = (Vec::new(), Vec::new());
    for option in options {
        let name = option.name.to_lowercase();
        if taken.iter().any(|t| *t == name.trim()) {
            continue;
        }
        if name.starts_with(&needle) {
            prefix.push(option);
        } else if name.contains(&needle) {
            infix.push(option);
        }
    }
    prefix.extend(infix);
    prefix
}

/// Key presses the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl SuggestionKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Enter),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// What the input should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Only the highlight moved.
    Moved,
    /// Submit this text.
    Submit(String),
    /// Hide the list.
    Close,
}

/// Open/closed state and highlighted row of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Suggestions {
    pub open: bool,
    pub highlighted: usize,
}

impl Suggestions {
    /// State after the query text changed.
    #[must_use]
    pub const fn reset(has_matches: bool) -> Self {
        Self {
            open: has_matches,
            highlighted: 0,
        }
    }

    /// Apply a key. `names` are the visible suggestions in display order and
    /// `raw` is the typed text, submitted when nothing is highlighted.
    pub fn press(&mut self, key: SuggestionKey, names: &[&str], raw: &str) -> SuggestionAction {
        match key {
            SuggestionKey::Down if self.open && !names.is_empty() => {
                self.highlighted = (self.highlighted + 1).min(names.len() - 1);
                SuggestionAction::Moved
            }
            SuggestionKey::Up if self.open && !names.is_empty() => {
                self.highlighted = self.highlighted.saturating_sub(1);
                SuggestionAction::Moved
            }
            SuggestionKey::Down | SuggestionKey::Up => {
                self.open = !names.is_empty();
                self.highlighted = 0;
                SuggestionAction::Moved
            }
            SuggestionKey::Enter => {
                let pick = if self.open {
                    names.get(self.highlighted).copied()
                } else {
                    None
                };
                self.open = false;
                self.highlighted = 0;
                SuggestionAction::Submit(pick.unwrap_or(raw).to_string())
            }
            SuggestionKey::Escape => {
                self.open = false;
                SuggestionAction::Close
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(names: &[&str]) -> Vec<CharacterOption> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| CharacterOption {
                id: i as u64,
                name: (*name).to_string(),
                image_url: None,
            })
            .collect()
    }

    fn names<'a>(found: &[&'a CharacterOption]) -> Vec<&'a str> {
        found.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn prefix_matches_come_before_contains_matches() {
        let roster = options(&["Donkey", "Dragon", "King Harold", "Prince Charming", "Doris"]);
        let found = filter_options(&roster, "  DO ", &[]);
        assert_eq!(names(&found), vec!["Donkey", "Doris"]);
        let found = filter_options(&roster, "ar", &[]);
        assert_eq!(names(&found), vec!["King Harold", "Prince Charming"]);
        let found = filter_options(&roster, "d", &[]);
        assert_eq!(
            names(&found),
            vec!["Donkey", "Dragon", "Doris", "King Harold"]
        );
    }

    #[test]
    fn empty_query_and_guessed_names_yield_nothing() {
        let roster = options(&["Shrek", "Shrek the Third"]);
        assert!(filter_options(&roster, "   ", &[]).is_empty());
        let found = filter_options(&roster, "shr", &["shrek ".to_string()]);
        assert_eq!(names(&found), vec!["Shrek the Third"]);
    }

    #[test]
    fn arrows_stop_at_list_ends_and_enter_submits_highlight() {
        let visible = ["Donkey", "Doris"];
        let mut state = Suggestions::reset(true);
        assert_eq!(state.press(SuggestionKey::Up, &visible, "do"), SuggestionAction::Moved);
        assert_eq!(state.highlighted, 0);
        state.press(SuggestionKey::Down, &visible, "do");
        assert_eq!(state.highlighted, 1);
        state.press(SuggestionKey::Down, &visible, "do");
        assert_eq!(state.highlighted, 1);
        assert_eq!(
            state.press(SuggestionKey::Enter, &visible, "do"),
            SuggestionAction::Submit("Doris".into())
        );
        assert!(!state.open);
    }

    #[test]
    fn enter_without_open_list_submits_raw_text() {
        let mut state = Suggestions::reset(true);
        assert_eq!(state.press(SuggestionKey::Escape, &["Fiona"], "fi"), SuggestionAction::Close);
        assert_eq!(
            state.press(SuggestionKey::Enter, &["Fiona"], "fi"),
            SuggestionAction::Submit("fi".into())
        );
        assert_eq!(SuggestionKey::from_dom_key("ArrowDown"), Some(SuggestionKey::Down));
        assert_eq!(SuggestionKey::from_dom_key("a"), None);
    }
}
