use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::phase::{Phase, phase_for_state};
use crate::app::state::AppState;
use crate::components::ui::penalty_dialog::PenaltyDialog;
use crate::components::ui::settings_dialog::SettingsDialog;
use crate::routes::Route;

fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        return html! { <crate::pages::not_found::NotFoundPage /> };
    }
    match *state.phase {
        Phase::Setup => html! {
            <crate::pages::setup::SetupPage
                game={(*state.game).clone()}
                error={(*state.error).clone()}
                on_add_player={handlers.add_player.clone()}
                on_remove_player={handlers.remove_player.clone()}
                on_set_mode={handlers.set_mode.clone()}
                on_add_team={handlers.add_team.clone()}
                on_remove_team={handlers.remove_team.clone()}
                on_assign_player={handlers.assign_player.clone()}
                on_shuffle={handlers.shuffle.clone()}
                on_start={handlers.start.clone()}
            />
        },
        Phase::Play => {
            let show_penalty = state.show_penalty.clone();
            let open_penalty = Callback::from(move |()| show_penalty.set(true));
            html! {
                <crate::pages::play::PlayPage
                    game={(*state.game).clone()}
                    error={(*state.error).clone()}
                    on_throw={handlers.throw.clone()}
                    on_open_penalty={open_penalty}
                />
            }
        }
        Phase::Result => html! {
            <crate::pages::result::ResultPage
                game={(*state.game).clone()}
                on_rematch={handlers.rematch.clone()}
                on_new_game={handlers.new_game.clone()}
            />
        },
        Phase::History => {
            let back = {
                let phase = state.phase.clone();
                let game = state.game.clone();
                Callback::from(move |()| phase.set(phase_for_state(&game)))
            };
            html! {
                <crate::pages::history::HistoryPage
                    history={(*state.history).clone()}
                    on_clear={handlers.clear_history.clone()}
                    on_back={back}
                />
            }
        }
    }
}

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = render_main_view(state, &handlers, route);

    let open_settings = {
        let show_settings = state.show_settings.clone();
        Callback::from(move |()| show_settings.set(true))
    };
    let on_close_settings = {
        let show_settings = state.show_settings.clone();
        Callback::from(move |()| show_settings.set(false))
    };
    let on_close_penalty = {
        let show_penalty = state.show_penalty.clone();
        Callback::from(move |()| show_penalty.set(false))
    };
    let penalty = {
        let cb = handlers.penalty.clone();
        let show_penalty = state.show_penalty.clone();
        Callback::from(move |target: crate::game::ContenderId| {
            show_penalty.set(false);
            cb.emit(target);
        })
    };
    let out_of_turn = {
        let cb = handlers.out_of_turn.clone();
        let show_penalty = state.show_penalty.clone();
        Callback::from(move |target: crate::game::ContenderId| {
            show_penalty.set(false);
            cb.emit(target);
        })
    };

    html! {
        <>
            <crate::components::header::Header
                on_open_settings={open_settings}
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="game-status" class="sr-only" aria-live="polite"></div>
                <SettingsDialog
                    open={*state.show_settings}
                    high_contrast={*state.high_contrast}
                    on_close={on_close_settings}
                    on_hc_changed={handlers.toggle_hc.clone()}
                    on_reset={handlers.reset_session.clone()}
                />
                <PenaltyDialog
                    open={*state.show_penalty}
                    game={(*state.game).clone()}
                    on_close={on_close_penalty}
                    on_penalty={penalty}
                    on_out_of_turn={out_of_turn}
                />
                { main_view }
                <crate::components::footer::Footer />
            </main>
        </>
    }
}
