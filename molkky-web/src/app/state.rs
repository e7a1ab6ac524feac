use crate::app::phase::Phase;
use crate::game::{GameHistory, GameState};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub game: UseStateHandle<GameState>,
    pub history: UseStateHandle<GameHistory>,
    /// i18n key of the last rejected action, shown inline until the next one.
    pub error: UseStateHandle<Option<AttrValue>>,
    pub boot_ready: UseStateHandle<bool>,
    pub show_settings: UseStateHandle<bool>,
    pub show_penalty: UseStateHandle<bool>,
    pub high_contrast: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Setup),
        game: use_state(GameState::new),
        history: use_state(GameHistory::default),
        error: use_state(|| None::<AttrValue>),
        boot_ready: use_state(|| false),
        show_settings: use_state(|| false),
        show_penalty: use_state(|| false),
        high_contrast: use_state(crate::a11y::high_contrast_enabled),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Whether anything worth keeping is in the session yet.
    #[must_use]
    pub fn session_in_progress(&self) -> bool {
        !self.game.players.is_empty() || !self.history.is_empty()
    }
}
