use crate::components::guess_card::GuessCard;
use crate::i18n::{attribute_label, t};
use dreamdle_game::{GameMode, Guess, classify_comparison};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Attempts in display order, newest first.
    pub attempts: Vec<Guess>,
    pub mode: GameMode,
}

#[function_component(GuessTable)]
pub fn guess_table(props: &Props) -> Html {
    if props.attempts.is_empty() {
        return Html::default();
    }

    let header = (props.mode == GameMode::Classic).then(|| {
        let columns = props
            .attempts
            .first()
            .map(|g| classify_comparison(&g.comparison))
            .unwrap_or_default();
        html! {
            <div class="guess-header" aria-hidden="true">
                <span>{ t("guess.character") }</span>
                { for columns.iter().map(|c| html! { <span>{ attribute_label(&c.key) }</span> }) }
            </div>
        }
    });

    html! {
        <section class="guess-table">
            { for header }
            <ol class="guess-list">
                { for props.attempts.iter().map(|g| html! {
                    <GuessCard key={g.attempt_number.to_string()} guess={g.clone()} mode={props.mode} />
                }) }
            </ol>
        </section>
    }
}
