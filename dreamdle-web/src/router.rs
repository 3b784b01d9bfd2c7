use dreamdle_game::GameMode;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[at("/emoji")]
    Emoji,
    #[at("/description")]
    Description,
    #[at("/about")]
    About,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Classic => Self::Classic,
            GameMode::Emoji => Self::Emoji,
            GameMode::Description => Self::Description,
        }
    }

    /// Game mode served by this route, if it is a play page.
    #[must_use]
    pub const fn mode(&self) -> Option<GameMode> {
        match self {
            Self::Classic => Some(GameMode::Classic),
            Self::Emoji => Some(GameMode::Emoji),
            Self::Description => Some(GameMode::Description),
            Self::Home | Self::About | Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_routes_round_trip() {
        for mode in GameMode::ALL {
            assert_eq!(Route::for_mode(mode).mode(), Some(mode));
        }
        assert_eq!(Route::Home.mode(), None);
        assert_eq!(Route::NotFound.mode(), None);
    }

    #[test]
    fn paths_match_mode_slugs() {
        for mode in GameMode::ALL {
            assert_eq!(Route::for_mode(mode).to_path(), format!("/{}", mode.slug()));
        }
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
