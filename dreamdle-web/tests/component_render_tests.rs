use dreamdle_game::{
    GameMode, MemoryJudge, ModeConfigIds, Session, SessionController, SessionError,
    sample_roster,
};
use dreamdle_web::components::clue_display::{ClueDisplay, Props as ClueProps};
use dreamdle_web::components::header::{Header, Props as HeaderProps};
use dreamdle_web::hooks::SessionView;
use dreamdle_web::pages::{
    about::{AboutPage, AboutPageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
    play::{PlayView, PlayViewProps},
};
use futures::executor::block_on;
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

const SHREK: u64 = 1;
const FIONA: u64 = 2;

/// Play `guesses` against a fresh in-memory judge and return the session.
fn played(mode: GameMode, guesses: &[&str]) -> Session {
    let ids = ModeConfigIds::default();
    let judge = MemoryJudge::new(sample_roster().unwrap())
        .with_target(ids.classic, FIONA)
        .with_target(ids.emoji, SHREK);
    let controller = SessionController::new(judge, mode, ids.id_for(mode));
    block_on(controller.initialize()).unwrap();
    for guess in guesses {
        block_on(controller.submit_guess(guess)).unwrap();
    }
    controller.snapshot().unwrap()
}

fn play_props(mode: GameMode, view: SessionView) -> PlayViewProps {
    PlayViewProps {
        mode,
        view,
        options: Rc::new(Vec::new()),
        on_submit: Callback::noop(),
        on_retry: Callback::noop(),
        on_dismiss_victory: Callback::noop(),
    }
}

#[test]
fn not_found_page_offers_way_home() {
    dreamdle_web::i18n::set_lang("en");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}

#[test]
fn home_page_lists_every_mode() {
    dreamdle_web::i18n::set_lang("en");
    let props = HomePageProps {
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    for slug in ["classic", "emoji", "description"] {
        assert!(html.contains(&format!("data-mode=\"{slug}\"")), "{slug} card missing");
    }
    assert!(html.contains("Dreamdle"));
}

#[test]
fn about_page_describes_modes() {
    dreamdle_web::i18n::set_lang("en");
    let props = AboutPageProps {
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AboutPage>::with_props(props).render());
    assert!(html.contains("About Dreamdle"));
    assert!(html.contains("One more emoji appears after each wrong guess."));
}

#[test]
fn header_renders_language_picker_and_modes() {
    dreamdle_web::i18n::set_lang("en");
    let props = HeaderProps {
        current_lang: "pt".into(),
        on_lang_change: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("lang-select"));
    assert!(html.contains("Português"));
    assert!(html.contains("href=\"/description\""));
}

#[test]
fn clue_display_masks_hidden_emojis() {
    dreamdle_web::i18n::set_lang("en");
    let session = played(GameMode::Emoji, &["Donkey"]);
    let props = ClueProps {
        mode: GameMode::Emoji,
        clues: session.clues().to_vec(),
        reveal: session.reveal(),
    };
    let html = block_on(LocalServerRenderer::<ClueDisplay>::with_props(props).render());
    assert!(html.contains("2 of 5 clues revealed"));
    assert_eq!(html.matches('❓').count(), 3);
    assert!(html.contains(session.clues()[1].as_str()));
    assert!(!html.contains(session.clues()[2].as_str()));
}

#[test]
fn play_view_shows_loading_state() {
    dreamdle_web::i18n::set_lang("en");
    let props = play_props(GameMode::Classic, SessionView::loading());
    let html = block_on(LocalServerRenderer::<PlayView>::with_props(props).render());
    assert!(html.contains("aria-busy=\"true\""));
    assert!(!html.contains("guess-input"));
}

#[test]
fn play_view_offers_retry_when_loading_failed() {
    dreamdle_web::i18n::set_lang("en");
    let view = SessionView {
        error: Some(SessionError::DegradedClueSet {
            mode: GameMode::Emoji,
        }),
        ..SessionView::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlayView>::with_props(play_props(GameMode::Emoji, view)).render(),
    );
    assert!(html.contains("has no emojis yet"));
    assert!(html.contains("Retry"));
}

#[test]
fn play_view_renders_attempts_and_input() {
    dreamdle_web::i18n::set_lang("en");
    let view = SessionView {
        session: Some(played(GameMode::Classic, &["Donkey", "Lord Farquaad"])),
        ..SessionView::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlayView>::with_props(play_props(GameMode::Classic, view)).render(),
    );
    assert!(html.contains("guess-input"));
    assert!(html.contains("2 attempts"));
    assert!(html.contains("Lord Farquaad"));
    let newest = html.find("Lord Farquaad").unwrap();
    let oldest = html.find("Donkey").unwrap();
    assert!(newest < oldest, "newest attempt should render first");
}

#[test]
fn won_session_hides_input_and_shows_victory() {
    dreamdle_web::i18n::set_lang("en");
    let session = played(GameMode::Classic, &["Fiona"]);
    let view = SessionView {
        fresh_victory: session.victory(),
        session: Some(session),
        ..SessionView::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlayView>::with_props(play_props(GameMode::Classic, view)).render(),
    );
    assert!(!html.contains("guess-input"));
    assert!(html.contains("You found Fiona in 1 attempt!"));
    assert!(html.contains("It was Fiona. You got it in 1 attempt."));
    assert!(html.contains("Victory!"));
    assert!(html.contains("Dreamdle classic 1"));
}

#[test]
fn victory_texts_use_plural_attempts() {
    dreamdle_web::i18n::set_lang("en");
    let session = played(GameMode::Classic, &["Donkey", "Po", "Fiona"]);
    let view = SessionView {
        fresh_victory: session.victory(),
        session: Some(session),
        ..SessionView::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlayView>::with_props(play_props(GameMode::Classic, view)).render(),
    );
    assert!(html.contains("You found Fiona in 3 attempts!"));
    assert!(html.contains("You got it in 3 attempts."));
    assert!(!html.contains("1 attempts"));
}

#[test]
fn rehydrated_win_shows_banner_without_modal() {
    dreamdle_web::i18n::set_lang("en");
    let view = SessionView {
        session: Some(played(GameMode::Emoji, &["Shrek"])),
        ..SessionView::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlayView>::with_props(play_props(GameMode::Emoji, view)).render(),
    );
    assert!(html.contains("You found Shrek in 1 attempt!"));
    assert!(!html.contains("Victory!"));
    assert!(html.contains("5 of 5 clues revealed"));
}
