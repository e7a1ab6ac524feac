use yew::prelude::*;

use crate::a11y;
use crate::app::phase::{Phase, phase_for_state};
use crate::app::state::AppState;
use crate::dom;
use crate::game::{
    self, ContenderId, GameError, GameHistory, GamePhase, GameRecord, GameState, PlayerId,
    PlayMode, TeamId,
};
use crate::i18n;

/// Shared mutation context cloned into every callback.
#[derive(Clone)]
struct Ctx {
    phase: UseStateHandle<Phase>,
    game: UseStateHandle<GameState>,
    history: UseStateHandle<GameHistory>,
    error: UseStateHandle<Option<AttrValue>>,
}

impl Ctx {
    fn from_state(state: &AppState) -> Self {
        Self {
            phase: state.phase.clone(),
            game: state.game.clone(),
            history: state.history.clone(),
            error: state.error.clone(),
        }
    }

    /// Accept a mutated game: persist, announce, and re-derive the phase.
    fn commit(&self, mut game: GameState) {
        let mut history = (*self.history).clone();
        if game.phase == GamePhase::Finished && game.ended_at_ms.is_none() {
            game.mark_finished_at(dom::now_ms());
            if let Some(record) = GameRecord::from_state(&game) {
                history.push(record);
                self.history.set(history.clone());
            }
        }
        game::persist_session(&game, &history);
        if let Some(key) = game.logs.last() {
            a11y::set_status(&i18n::t(key));
        }
        self.error.set(None);
        self.phase.set(phase_for_state(&game));
        self.game.set(game);
    }

    fn fail(&self, err: &GameError) {
        let key = err.key();
        a11y::set_status(&i18n::t(key));
        self.error.set(Some(AttrValue::from(key)));
    }

    fn apply<R>(&self, op: impl FnOnce(&mut GameState) -> Result<R, GameError>) {
        let mut game = (*self.game).clone();
        match op(&mut game) {
            Ok(_) => self.commit(game),
            Err(err) => self.fail(&err),
        }
    }
}

/// Every callback the pages and panels need, built once per render.
#[derive(Clone)]
pub struct AppHandlers {
    pub add_player: Callback<String>,
    pub remove_player: Callback<PlayerId>,
    pub set_mode: Callback<PlayMode>,
    pub add_team: Callback<String>,
    pub remove_team: Callback<TeamId>,
    pub assign_player: Callback<(TeamId, String)>,
    pub shuffle: Callback<()>,
    pub start: Callback<()>,
    pub throw: Callback<i32>,
    pub penalty: Callback<ContenderId>,
    pub out_of_turn: Callback<ContenderId>,
    pub rematch: Callback<()>,
    pub new_game: Callback<()>,
    pub clear_history: Callback<()>,
    pub reset_session: Callback<()>,
    pub lang_change: Callback<String>,
    pub toggle_hc: Callback<bool>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let ctx = Ctx::from_state(state);

        let add_player = {
            let ctx = ctx.clone();
            Callback::from(move |name: String| ctx.apply(|g| g.add_player(&name)))
        };
        let remove_player = {
            let ctx = ctx.clone();
            Callback::from(move |id: PlayerId| ctx.apply(|g| g.remove_player(id)))
        };
        let set_mode = {
            let ctx = ctx.clone();
            Callback::from(move |mode: PlayMode| ctx.apply(|g| g.set_mode(mode)))
        };
        let add_team = {
            let ctx = ctx.clone();
            Callback::from(move |name: String| ctx.apply(|g| g.add_team(&name)))
        };
        let remove_team = {
            let ctx = ctx.clone();
            Callback::from(move |id: TeamId| ctx.apply(|g| g.remove_team(id)))
        };
        let assign_player = {
            let ctx = ctx.clone();
            Callback::from(move |(team, name): (TeamId, String)| {
                ctx.apply(|g| g.assign_player(team, &name));
            })
        };
        let shuffle = {
            let ctx = ctx.clone();
            Callback::from(move |()| ctx.apply(|g| g.shuffle_order(dom::now_ms())))
        };
        let start = {
            let ctx = ctx.clone();
            Callback::from(move |()| ctx.apply(|g| g.start_game(dom::now_ms())))
        };
        let throw = {
            let ctx = ctx.clone();
            Callback::from(move |points: i32| ctx.apply(|g| g.record_throw(points)))
        };
        let penalty = {
            let ctx = ctx.clone();
            Callback::from(move |target: ContenderId| ctx.apply(|g| g.apply_penalty(target)))
        };
        let out_of_turn = {
            let ctx = ctx.clone();
            Callback::from(move |target: ContenderId| {
                ctx.apply(|g| g.report_out_of_turn(target));
            })
        };
        let rematch = {
            let ctx = ctx.clone();
            Callback::from(move |()| {
                ctx.apply(|g| {
                    g.reset_for_rematch();
                    g.start_game(dom::now_ms())
                });
            })
        };
        let new_game = {
            let ctx = ctx.clone();
            Callback::from(move |()| ctx.commit(GameState::new()))
        };
        let clear_history = {
            let ctx = ctx.clone();
            Callback::from(move |()| {
                let mut history = (*ctx.history).clone();
                history.clear();
                game::persist_session(&ctx.game, &history);
                ctx.history.set(history);
            })
        };
        let reset_session = {
            let ctx = ctx.clone();
            Callback::from(move |()| {
                if let Err(err) = game::create_session_manager().clear() {
                    log::warn!("failed to clear session: {err}");
                }
                ctx.history.set(GameHistory::default());
                ctx.error.set(None);
                ctx.phase.set(Phase::Setup);
                ctx.game.set(GameState::new());
            })
        };
        let lang_change = {
            let current_language = state.current_language.clone();
            Callback::from(move |lang: String| {
                i18n::set_lang(&lang);
                current_language.set(lang);
            })
        };
        let toggle_hc = {
            let high_contrast = state.high_contrast.clone();
            Callback::from(move |enabled: bool| {
                a11y::set_high_contrast(enabled);
                high_contrast.set(enabled);
            })
        };

        Self {
            add_player,
            remove_player,
            set_mode,
            add_team,
            remove_team,
            assign_player,
            shuffle,
            start,
            throw,
            penalty,
            out_of_turn,
            rematch,
            new_game,
            clear_history,
            reset_session,
            lang_change,
            toggle_hc,
        }
    }
}
