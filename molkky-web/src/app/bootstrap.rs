#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::phase_for_state;
#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::SessionSnapshot;

/// Push a restored (or fresh) snapshot into the live handles.
#[cfg(any(target_arch = "wasm32", test))]
fn apply_snapshot(state: &AppState, snapshot: SessionSnapshot) {
    if let Some(game) = snapshot.game {
        state.phase.set(phase_for_state(&game));
        state.game.set(game);
    }
    state.history.set(snapshot.history);
    state.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(state: &AppState) {
    use yew::prelude::use_effect_with;

    let state = state.clone();
    use_effect_with((), move |()| {
        let snapshot = crate::game::create_session_manager()
            .restore()
            .unwrap_or_else(|err| {
                log::warn!("failed to restore session: {err}");
                SessionSnapshot::default()
            });
        apply_snapshot(&state, snapshot);
        crate::app::test_bridge::maybe_install();
        || {}
    });
}

#[cfg(target_arch = "wasm32")]
use yew::prelude::hook;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameHistory, GameRecord, GameState};
    use futures::executor::block_on;
    use yew::prelude::*;
    use yew::LocalServerRenderer;

    fn sample_snapshot() -> SessionSnapshot {
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        game.add_player("Bertta").unwrap();
        game.start_game(7).unwrap();
        game.record_throw(9).unwrap();

        let mut finished = GameState::new();
        finished.add_player("Celia").unwrap();
        finished.add_player("Daniela").unwrap();
        finished.start_game(1).unwrap();
        finished.players[0].card.score = 44;
        finished.record_throw(6).unwrap();
        let mut history = GameHistory::default();
        history.push(GameRecord::from_state(&finished).unwrap());
        SessionSnapshot::new(Some(game), history)
    }

    #[function_component(RestoreHarness)]
    fn restore_harness() -> Html {
        let state = crate::app::state::use_app_state();
        let applied = use_state(|| false);
        if !*applied {
            applied.set(true);
            apply_snapshot(&state, sample_snapshot());
        }
        let summary = format!(
            "phase={:?} players={} history={} ready={}",
            *state.phase,
            state.game.players.len(),
            state.history.len(),
            *state.boot_ready,
        );
        html! { <p>{ summary }</p> }
    }

    #[test]
    fn snapshot_restores_into_handles() {
        let html = block_on(LocalServerRenderer::<RestoreHarness>::new().render());
        assert!(html.contains("phase=Play"), "got: {html}");
        assert!(html.contains("players=2"), "got: {html}");
        assert!(html.contains("history=1"), "got: {html}");
        assert!(html.contains("ready=true"), "got: {html}");
    }
}
