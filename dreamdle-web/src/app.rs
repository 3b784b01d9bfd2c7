#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
#[cfg(target_arch = "wasm32")]
use crate::pages::{
    about::AboutPage, home::HomePage, not_found::NotFound, play::PlayPage,
};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use dreamdle_game::GameMode;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let navigator = use_navigator();
    let lang = use_state(crate::i18n::current_lang);

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |route: Route| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };
    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| {
            crate::i18n::set_lang(&code);
            lang.set(crate::i18n::current_lang());
        })
    };

    let switch = {
        let on_navigate = on_navigate.clone();
        move |route: Route| -> Html {
            let go_home = {
                let nav = on_navigate.clone();
                Callback::from(move |()| nav.emit(Route::Home))
            };
            if let Some(mode) = route.mode() {
                return html! { <PlayPage key={mode.slug()} mode={mode} /> };
            }
            match route {
                Route::Home => {
                    let nav = on_navigate.clone();
                    let on_select = Callback::from(move |mode: GameMode| nav.emit(Route::for_mode(mode)));
                    html! { <HomePage on_select={on_select} /> }
                }
                Route::About => html! { <AboutPage on_back={go_home} /> },
                _ => html! { <NotFound on_go_home={go_home} /> },
            }
        }
    };

    html! {
        <div class="app-shell" lang={(*lang).clone()}>
            <Header
                current_lang={(*lang).clone()}
                on_lang_change={on_lang_change}
                on_navigate={on_navigate}
            />
            // Keyed on the language so pages re-render their text after a switch.
            <main key={(*lang).clone()}>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}
