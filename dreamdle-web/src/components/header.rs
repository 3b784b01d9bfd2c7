use crate::i18n::{locales, t};
use crate::router::Route;
use dreamdle_game::GameMode;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::Routable;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let link = |route: Route, label: String| {
        let cb = p.on_navigate.clone();
        let target = route.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(target.clone());
        });
        html! { <a href={route.to_path()} onclick={onclick}>{ label }</a> }
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                { link(Route::Home, t("app.title")) }
                <nav aria-label="Modes" class="header-modes">
                    { for GameMode::ALL.into_iter().map(|mode| link(Route::for_mode(mode), t(&format!("nav.{}", mode.slug())))) }
                    { link(Route::About, t("nav.about")) }
                </nav>
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                    }) }
                </select>
            </div>
        </header>
    }
}
