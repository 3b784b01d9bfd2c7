use crate::i18n::t;
use dreamdle_game::GameMode;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AboutPageProps {
    pub on_back: Callback<()>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_back.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <section class="panel about" data-testid="about-screen" tabindex="0" onkeydown={on_keydown}>
            <h1>{ t("about.title") }</h1>
            <p>{ t("about.body") }</p>
            <p>{ t("about.modes") }</p>
            <dl class="about-modes">
                { for GameMode::ALL.into_iter().map(|mode| html! {
                    <>
                        <dt>{ t(&format!("mode.{}.title", mode.slug())) }</dt>
                        <dd>{ t(&format!("mode.{}.blurb", mode.slug())) }</dd>
                    </>
                }) }
            </dl>
            <button type="button" onclick={on_back} data-testid="about-back">
                { t("not_found.back") }
            </button>
        </section>
    }
}
