use crate::i18n::{attribute_label, t, value_text};
use dreamdle_game::{AttributeVerdict, GameMode, Guess, classify_comparison};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub guess: Guess,
    pub mode: GameMode,
}

fn cell(verdict: &AttributeVerdict) -> Html {
    let label = attribute_label(&verdict.key);
    let icon = verdict.attribute.map_or("•", |a| a.icon());
    let value = verdict
        .guessed
        .as_ref()
        .map_or_else(|| "?".to_string(), value_text);
    html! {
        <div
            class={classes!("guess-cell", verdict.verdict.css_class())}
            data-attr={verdict.key.clone()}
            title={label.clone()}
        >
            <span class="cell-icon" aria-hidden="true">{ icon }</span>
            <span class="sr-only">{ label }</span>
            <span class="cell-value">{ value }</span>
        </div>
    }
}

/// One judged attempt. Classic shows a verdict cell per attribute; clue
/// modes only show whether the name was right.
#[function_component(GuessCard)]
pub fn guess_card(props: &Props) -> Html {
    let guess = &props.guess;
    let outcome = if guess.is_correct { "correct" } else { "wrong" };
    let portrait = guess.guessed_image_url.as_ref().map(|src| {
        html! { <img class="guess-portrait" src={src.clone()} alt={guess.guess.clone()} /> }
    });

    let body = match props.mode {
        GameMode::Classic => {
            let row = classify_comparison(&guess.comparison);
            html! { <div class="guess-cells">{ for row.iter().map(cell) }</div> }
        }
        GameMode::Emoji | GameMode::Description => html! {
            <span class="guess-result">
                { if guess.is_correct { t("guess.correct") } else { t("guess.wrong") } }
            </span>
        },
    };

    html! {
        <li class={classes!("guess-card", outcome)} data-attempt={guess.attempt_number.to_string()}>
            <div class="guess-name">
                { for portrait }
                <span>{ guess.guess.clone() }</span>
            </div>
            { body }
        </li>
    }
}
