use crate::i18n::t;
use dreamdle_game::GameMode;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_select: Callback<GameMode>,
}

/// Landing page with one card per game mode.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let card = |mode: GameMode| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(mode));
        html! {
            <li class={classes!("mode-card", mode.slug())} data-mode={mode.slug()}>
                <h2>{ t(&format!("mode.{}.title", mode.slug())) }</h2>
                <p>{ t(&format!("mode.{}.blurb", mode.slug())) }</p>
                <button type="button" onclick={onclick}>{ t("home.play") }</button>
            </li>
        }
    };

    html! {
        <section class="panel home">
            <h1>{ t("app.title") }</h1>
            <p class="tagline">{ t("app.tagline") }</p>
            <h2 class="sr-only">{ t("home.pick_mode") }</h2>
            <ul class="mode-cards">
                { for GameMode::ALL.into_iter().map(card) }
            </ul>
        </section>
    }
}
