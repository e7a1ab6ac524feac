use std::collections::BTreeMap;

use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::ui::score_pad::ScorePad;
use crate::components::ui::scoreboard::Scoreboard;
use crate::game::{ContenderId, GamePhase, GameState};
use crate::i18n::{fmt_number, t, tr};

#[derive(Properties, Clone)]
pub struct PlayPageProps {
    pub game: GameState,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_throw: Callback<i32>,
    pub on_open_penalty: Callback<()>,
}

impl PartialEq for PlayPageProps {
    fn eq(&self, other: &Self) -> bool {
        self.game == other.game && self.error == other.error
    }
}

fn turn_banner(game: &GameState) -> Html {
    let Some(thrower) = game.active_thrower() else {
        return Html::default();
    };
    let text = match game.active_id() {
        Some(ContenderId::Team(_)) => {
            let team = game
                .active_id()
                .and_then(|id| game.name_of(id))
                .unwrap_or_default();
            let mut args = BTreeMap::new();
            args.insert("team", team.as_str());
            args.insert("name", thrower.as_str());
            tr("play.team_turn", Some(&args))
        }
        _ => {
            let mut args = BTreeMap::new();
            args.insert("name", thrower.as_str());
            tr("play.turn", Some(&args))
        }
    };
    let round = {
        let round = fmt_number(f64::from(game.turn.round));
        let mut args = BTreeMap::new();
        args.insert("round", round.as_str());
        tr("play.round", Some(&args))
    };
    html! {
        <div class="turn-banner" role="status">
            <p class="turn-name" id="turn-banner">{ text }</p>
            <p class="turn-round muted">{ round }</p>
        </div>
    }
}

#[function_component(PlayPage)]
pub fn play_page(props: &PlayPageProps) -> Html {
    let on_open_penalty = {
        let cb = props.on_open_penalty.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let pad_disabled = props.game.phase != GamePhase::Playing;

    html! {
        <div class="page play-page">
            <h1>{ t("play.title") }</h1>
            { turn_banner(&props.game) }
            <Scoreboard rows={props.game.contender_views()} />
            <ScorePad disabled={pad_disabled} on_throw={props.on_throw.clone()} />
            { props.error.as_ref().map(|key| html! {
                <p class="form-error" role="alert">{ t(key) }</p>
            }).unwrap_or_default() }
            <div class="play-actions">
                <Button
                    id="penalty-open-btn"
                    kind={ButtonKind::Secondary}
                    label={t("play.penalty")}
                    onclick={on_open_penalty}
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayMode;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props_for(game: GameState) -> PlayPageProps {
        PlayPageProps {
            game,
            error: None,
            on_throw: Callback::noop(),
            on_open_penalty: Callback::noop(),
        }
    }

    #[test]
    fn banner_names_the_active_player() {
        crate::i18n::set_lang("en");
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        game.add_player("Bertta").unwrap();
        game.start_game(0).unwrap();
        let html = block_on(LocalServerRenderer::<PlayPage>::with_props(props_for(game)).render());
        assert!(html.contains("Aino to throw"));
        assert!(html.contains("Round 1"));
        assert!(html.contains("penalty-open-btn"));
    }

    #[test]
    fn team_banner_names_team_and_thrower() {
        crate::i18n::set_lang("en");
        let mut game = GameState::new();
        game.set_mode(PlayMode::Teams).unwrap();
        for name in ["Aino", "Bertta"] {
            game.add_player(name).unwrap();
        }
        let reds = game.add_team("Reds").unwrap();
        let blues = game.add_team("Blues").unwrap();
        game.assign_player(reds, "Aino").unwrap();
        game.assign_player(blues, "Bertta").unwrap();
        game.start_game(0).unwrap();
        let html = block_on(LocalServerRenderer::<PlayPage>::with_props(props_for(game)).render());
        assert!(html.contains("Reds: Aino to throw"));
    }
}
