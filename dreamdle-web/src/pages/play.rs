use crate::components::clue_display::ClueDisplay;
use crate::components::guess_input::GuessInput;
use crate::components::guess_table::GuessTable;
use crate::components::victory_modal::VictoryModal;
use crate::hooks::{GameSessionHandle, SessionView, use_character_options, use_game_session};
use crate::i18n::{t, tc};
use dreamdle_game::{CharacterOption, GameMode, Guess, Session, share_text};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PlayPageProps {
    pub mode: GameMode,
}

/// Play page for one mode, wired to the Play Service.
#[function_component(PlayPage)]
pub fn play_page(props: &PlayPageProps) -> Html {
    let GameSessionHandle {
        view,
        submit,
        dismiss_victory,
        retry,
    } = use_game_session(props.mode);
    let options = use_character_options();

    html! {
        <PlayView
            mode={props.mode}
            view={(*view).clone()}
            options={options}
            on_submit={submit}
            on_retry={retry}
            on_dismiss_victory={dismiss_victory}
        />
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct PlayViewProps {
    pub mode: GameMode,
    pub view: SessionView,
    pub options: Rc<Vec<CharacterOption>>,
    pub on_submit: Callback<String>,
    pub on_retry: Callback<()>,
    pub on_dismiss_victory: Callback<()>,
}

fn won_banner(session: &Session) -> Html {
    let Some(victory) = session.victory() else {
        return Html::default();
    };
    let text = tc(
        "play.won_banner",
        victory.attempts,
        &[("name", victory.target_name.as_str())],
    );
    html! {
        <div class="won-banner" role="status">
            <p>{ text }</p>
            <p class="come-back">{ t("play.come_back") }</p>
        </div>
    }
}

/// Stateless rendering of a session view.
#[function_component(PlayView)]
pub fn play_view(props: &PlayViewProps) -> Html {
    let mode = props.mode;
    let view = &props.view;
    let title = t(&format!("mode.{}.title", mode.slug()));

    let error = view.error.as_ref().map(|err| {
        let retry = {
            let cb = props.on_retry.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        // A failed guess leaves the loaded session usable; only load failures offer a retry.
        let can_retry = view.session.is_none();
        html! {
            <div class="error" role="alert">
                <p>{ t(err.message_key()) }</p>
                if can_retry {
                    <button type="button" onclick={retry}>{ t("error.retry") }</button>
                }
            </div>
        }
    });

    let body = if view.loading {
        html! { <p class="loading" aria-busy="true">{ t("play.loading") }</p> }
    } else if let Some(session) = view.session.as_ref() {
        let attempts: Vec<Guess> = session
            .attempts_newest_first()
            .into_iter()
            .cloned()
            .collect();
        let share = AttrValue::from(share_text(session));
        let modal = view.fresh_victory.clone().map(|summary| {
            let close = props.on_dismiss_victory.clone();
            html! { <VictoryModal open=true summary={summary} share={share.clone()} on_close={close} /> }
        });
        html! {
            <>
                if mode.uses_clues() {
                    <ClueDisplay mode={mode} clues={session.clues().to_vec()} reveal={session.reveal()} />
                }
                if session.completed() {
                    { won_banner(session) }
                } else {
                    <GuessInput
                        options={props.options.clone()}
                        guessed={view.guessed_names()}
                        disabled={view.submitting}
                        submitting={view.submitting}
                        on_submit={props.on_submit.clone()}
                    />
                }
                <p class="attempt-count">{ tc("play.attempts", session.attempts().len(), &[]) }</p>
                <GuessTable attempts={attempts} mode={mode} />
                { for modal }
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <section id="main" class={classes!("panel", "play", mode.slug())} data-mode={mode.slug()}>
            <h1>{ title }</h1>
            { for error }
            { body }
        </section>
    }
}
