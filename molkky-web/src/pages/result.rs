use yew::prelude::*;

use crate::components::ui::winner_screen::WinnerScreen;
use crate::game::GameState;

#[derive(Properties, Clone)]
pub struct ResultPageProps {
    pub game: GameState,
    pub on_rematch: Callback<()>,
    pub on_new_game: Callback<()>,
}

impl PartialEq for ResultPageProps {
    fn eq(&self, other: &Self) -> bool {
        self.game == other.game
    }
}

#[function_component(ResultPage)]
pub fn result_page(props: &ResultPageProps) -> Html {
    html! {
        <div class="page result-page">
            <WinnerScreen
                game={props.game.clone()}
                on_rematch={props.on_rematch.clone()}
                on_new_game={props.on_new_game.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn result_page_wraps_the_winner_screen() {
        crate::i18n::set_lang("en");
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        game.add_player("Bertta").unwrap();
        game.start_game(0).unwrap();
        game.players[0].card.score = 44;
        game.record_throw(6).unwrap();

        let props = ResultPageProps {
            game,
            on_rematch: Callback::noop(),
            on_new_game: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ResultPage>::with_props(props).render());
        assert!(html.contains("Aino wins!"));
        assert!(html.contains("rematch-btn"));
    }

    #[test]
    fn props_eq_tracks_the_game_only() {
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        let a = ResultPageProps {
            game: game.clone(),
            on_rematch: Callback::noop(),
            on_new_game: Callback::noop(),
        };
        let b = ResultPageProps {
            game: game.clone(),
            on_rematch: Callback::noop(),
            on_new_game: Callback::noop(),
        };
        assert!(a == b);
        game.add_player("Bertta").unwrap();
        let c = ResultPageProps {
            game,
            on_rematch: Callback::noop(),
            on_new_game: Callback::noop(),
        };
        assert!(a != c);
    }
}
