use crate::i18n::t;
use dreamdle_game::{
    CharacterOption, SuggestionAction, SuggestionKey, Suggestions, filter_options,
};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const MAX_SUGGESTIONS: usize = 8;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Rc<Vec<CharacterOption>>,
    /// Names already submitted; hidden from the suggestions.
    #[prop_or_default]
    pub guessed: Vec<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub submitting: bool,
    pub on_submit: Callback<String>,
}

fn visible_matches(options: &[CharacterOption], query: &str, guessed: &[String]) -> Vec<String> {
    filter_options(options, query, guessed)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|o| o.name.clone())
        .collect()
}

#[function_component(GuessInput)]
pub fn guess_input(props: &Props) -> Html {
    let query = use_state(String::new);
    let list = use_state(Suggestions::default);
    let matches = visible_matches(&props.options, &query, &props.guessed);

    let submit = {
        let on_submit = props.on_submit.clone();
        let query = query.clone();
        let list = list.clone();
        Callback::from(move |text: String| {
            if text.trim().is_empty() {
                return;
            }
            on_submit.emit(text);
            query.set(String::new());
            list.set(Suggestions::default());
        })
    };

    let oninput = {
        let query = query.clone();
        let list = list.clone();
        let options = props.options.clone();
        let guessed = props.guessed.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let has_matches = !filter_options(&options, &value, &guessed).is_empty();
            list.set(Suggestions::reset(has_matches));
            query.set(value);
        })
    };

    let onkeydown = {
        let query = query.clone();
        let list = list.clone();
        let submit = submit.clone();
        let matches = matches.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(key) = SuggestionKey::from_dom_key(&e.key()) else {
                return;
            };
            e.prevent_default();
            let names: Vec<&str> = matches.iter().map(String::as_str).collect();
            let mut state = *list;
            match state.press(key, &names, &query) {
                SuggestionAction::Submit(text) => submit.emit(text),
                SuggestionAction::Moved | SuggestionAction::Close => list.set(state),
            }
        })
    };

    let onsubmit = {
        let query = query.clone();
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit((*query).clone());
        })
    };

    let open = list.open && !matches.is_empty();
    let suggestions = matches.iter().enumerate().map(|(idx, name)| {
        let highlighted = idx == list.highlighted;
        let pick = {
            let submit = submit.clone();
            let name = name.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                submit.emit(name.clone());
            })
        };
        html! {
            <li
                role="option"
                class={classes!("suggestion", highlighted.then_some("highlighted"))}
                aria-selected={highlighted.to_string()}
                onmousedown={pick}
            >
                { name.clone() }
            </li>
        }
    });

    html! {
        <form class="guess-input" onsubmit={onsubmit}>
            <input
                id="guess-input"
                type="text"
                autocomplete="off"
                placeholder={t("play.placeholder")}
                value={(*query).clone()}
                disabled={props.disabled}
                aria-autocomplete="list"
                aria-controls="guess-suggestions"
                aria-expanded={open.to_string()}
                oninput={oninput}
                onkeydown={onkeydown}
            />
            <button type="submit" disabled={props.disabled}>
                { if props.submitting { t("play.submitting") } else { t("play.submit") } }
            </button>
            if open {
                <ul id="guess-suggestions" role="listbox" aria-label={t("play.suggestions")}>
                    { for suggestions }
                </ul>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str) -> CharacterOption {
        CharacterOption {
            id: 0,
            name: name.into(),
            image_url: None,
        }
    }

    #[test]
    fn matches_are_capped_and_skip_guesses() {
        let options: Vec<CharacterOption> = (0..12).map(|i| option(&format!("Ogre {i}"))).collect();
        assert_eq!(visible_matches(&options, "ogre", &[]).len(), MAX_SUGGESTIONS);
        let found = visible_matches(&options, "ogre 1", &["Ogre 1".to_string()]);
        assert_eq!(found, vec!["Ogre 10", "Ogre 11"]);
    }
}
