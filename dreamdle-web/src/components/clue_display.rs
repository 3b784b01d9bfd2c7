use crate::i18n::{t, tr};
use dreamdle_game::{GameMode, RevealState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: GameMode,
    pub clues: Vec<String>,
    pub reveal: RevealState,
}

/// Emoji row or staged description, with unrevealed clues masked.
#[function_component(ClueDisplay)]
pub fn clue_display(props: &Props) -> Html {
    let revealed = props.reveal.visible(&props.clues);
    let hidden = props.clues.len().saturating_sub(revealed.len());
    let counter = tr(
        "play.clues_revealed",
        &[
            ("revealed", &revealed.len().to_string()),
            ("total", &props.clues.len().to_string()),
        ],
    );

    let body = match props.mode {
        GameMode::Emoji => html! {
            <div class="emoji-row">
                { for revealed.iter().map(|e| html! { <span class="emoji">{ e.clone() }</span> }) }
                { for (0..hidden).map(|_| html! {
                    <span class="emoji hidden" aria-label={t("play.hidden_clue")}>{ "❓" }</span>
                }) }
            </div>
        },
        GameMode::Description => html! {
            <blockquote class="description">
                { for revealed.iter().map(|s| html! { <p>{ s.clone() }</p> }) }
                { for (0..hidden).map(|_| html! {
                    <p class="hidden" aria-label={t("play.hidden_clue")}>{ "…" }</p>
                }) }
            </blockquote>
        },
        GameMode::Classic => return Html::default(),
    };

    html! {
        <section class={classes!("clues", props.mode.slug())} aria-live="polite">
            { body }
            <p class="clue-counter">{ counter }</p>
        </section>
    }
}
