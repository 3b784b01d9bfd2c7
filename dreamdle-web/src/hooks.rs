//! Yew bindings for the session controller.
use crate::api::{self, WebPlayService};
use crate::dom;
use dreamdle_game::{
    CharacterOption, GameMode, PlayService, Session, SessionController, SessionError,
    SubmitOutcome, VictorySummary,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type WebController = SessionController<Rc<WebPlayService>>;

/// Render-ready copy of the controller state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionView {
    pub loading: bool,
    pub submitting: bool,
    pub session: Option<Session>,
    pub error: Option<SessionError>,
    /// Set when a guess wins; cleared when the victory modal is dismissed.
    pub fresh_victory: Option<VictorySummary>,
}

impl SessionView {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn read<S: PlayService>(controller: &SessionController<S>) -> Self {
        Self {
            loading: false,
            submitting: controller.is_submitting(),
            session: controller.snapshot(),
            error: None,
            fresh_victory: None,
        }
    }

    #[must_use]
    pub fn guessed_names(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|s| s.attempts().iter().map(|g| g.guess.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GameSessionHandle {
    pub view: UseStateHandle<SessionView>,
    pub submit: Callback<String>,
    pub dismiss_victory: Callback<()>,
    pub retry: Callback<()>,
}

fn load(controller: Rc<WebController>, view: UseStateHandle<SessionView>) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = controller.initialize().await;
        if controller.is_disposed() {
            return;
        }
        let mut next = SessionView::read(&controller);
        if let Err(err) = result {
            dom::console_error(&err.to_string());
            next.error = Some(err);
        }
        view.set(next);
    });
}

/// Drive one mode's session: load on mount, submit guesses, dispose on unmount.
#[hook]
pub fn use_game_session(mode: GameMode) -> GameSessionHandle {
    let controller = use_memo(mode, |mode| {
        let ids = crate::paths::mode_config_ids();
        SessionController::new(api::play_service(), *mode, ids.id_for(*mode))
    });
    let view = use_state(SessionView::loading);

    {
        let view = view.clone();
        let controller = controller.clone();
        use_effect_with(mode, move |_| {
            view.set(SessionView::loading());
            load(controller.clone(), view);
            move || controller.dispose()
        });
    }

    let submit = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |guess: String| {
            let controller = controller.clone();
            let view = view.clone();
            view.set(SessionView {
                submitting: true,
                error: None,
                ..(*view).clone()
            });
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.submit_guess(&guess).await;
                if controller.is_disposed() {
                    return;
                }
                let mut next = SessionView::read(&controller);
                match outcome {
                    Ok(SubmitOutcome::Recorded { victory, .. }) => next.fresh_victory = victory,
                    Ok(SubmitOutcome::Ignored(reason)) => {
                        log::debug!("guess {guess:?} ignored: {reason:?}");
                    }
                    Err(err) => {
                        dom::console_error(&err.to_string());
                        next.error = Some(err);
                    }
                }
                view.set(next);
            });
        })
    };

    let dismiss_victory = {
        let view = view.clone();
        Callback::from(move |()| {
            view.set(SessionView {
                fresh_victory: None,
                ..(*view).clone()
            });
        })
    };

    let retry = {
        let controller = controller.clone();
        let view = view.clone();
        Callback::from(move |()| {
            view.set(SessionView::loading());
            load(controller.clone(), view.clone());
        })
    };

    GameSessionHandle {
        view,
        submit,
        dismiss_victory,
        retry,
    }
}

thread_local! {
    static CHARACTERS: RefCell<Option<Rc<Vec<CharacterOption>>>> = const { RefCell::new(None) };
}

fn cached_characters() -> Option<Rc<Vec<CharacterOption>>> {
    CHARACTERS.with(|cell| cell.borrow().clone())
}

fn cache_characters(list: Vec<CharacterOption>) -> Rc<Vec<CharacterOption>> {
    let list = Rc::new(list);
    CHARACTERS.with(|cell| cell.replace(Some(Rc::clone(&list))));
    list
}

/// Autocomplete roster. Fetched on the first mount and then served from a
/// per-app cache, so switching modes or languages does not refetch it.
/// A failed fetch is not cached and is retried on the next mount.
#[hook]
pub fn use_character_options() -> Rc<Vec<CharacterOption>> {
    let cached = cached_characters();
    let options = use_state({
        let cached = cached.clone();
        move || cached.unwrap_or_default()
    });
    {
        let options = options.clone();
        use_effect_with((), move |()| {
            if cached.is_none() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::play_service().list_characters().await {
                        Ok(list) => options.set(cache_characters(list)),
                        Err(err) => log::error!("could not load characters: {err}"),
                    }
                });
            }
            || {}
        });
    }
    (*options).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreamdle_game::{MemoryJudge, ModeConfigIds, sample_roster};
    use futures::executor::block_on;

    #[test]
    fn view_reads_controller_state() {
        let ids = ModeConfigIds::default();
        let judge = MemoryJudge::new(sample_roster().unwrap()).with_target(ids.classic, 2);
        let controller = SessionController::new(judge, GameMode::Classic, ids.classic);
        assert!(SessionView::read(&controller).session.is_none());

        block_on(controller.initialize()).unwrap();
        block_on(controller.submit_guess("Donkey")).unwrap();
        let view = SessionView::read(&controller);
        assert!(!view.loading);
        assert!(!view.submitting);
        assert_eq!(view.guessed_names(), vec!["Donkey".to_string()]);
    }

    #[test]
    fn character_list_is_cached_after_first_load() {
        let stored = cache_characters(vec![CharacterOption {
            id: 4,
            name: "Puss".into(),
            image_url: None,
        }]);
        let again = cached_characters().unwrap();
        assert!(Rc::ptr_eq(&stored, &again));
        assert_eq!(again[0].name, "Puss");
    }

    #[test]
    fn loading_view_has_no_session() {
        let view = SessionView::loading();
        assert!(view.loading);
        assert!(view.guessed_names().is_empty());
    }
}
