use std::collections::BTreeMap;

use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::ui::scoreboard::Scoreboard;
use crate::game::GameState;
use crate::i18n::{t, tr};

#[derive(Properties, Clone)]
pub struct Props {
    pub game: GameState,
    pub on_rematch: Callback<()>,
    pub on_new_game: Callback<()>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.game == other.game
    }
}

#[function_component(WinnerScreen)]
pub fn winner_screen(props: &Props) -> Html {
    let headline = props.game.winner_name().map_or_else(
        || t("result.draw"),
        |name| {
            let mut args = BTreeMap::new();
            args.insert("name", name.as_str());
            tr("result.winner", Some(&args))
        },
    );
    let celebrate = props.game.winner.is_some();

    let on_rematch = {
        let cb = props.on_rematch.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_new_game = {
        let cb = props.on_new_game.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="panel result-screen" aria-label={t("result.title")}>
            <h2>{ t("result.title") }</h2>
            <p class={classes!("result-headline", celebrate.then_some("result-celebrate"))} role="status">
                { headline }
            </p>
            <h3>{ t("result.final_standings") }</h3>
            <Scoreboard rows={props.game.contender_views()} />
            <div class="result-actions">
                <Button id="rematch-btn" label={t("result.rematch")} onclick={on_rematch} />
                <Button
                    id="new-game-btn"
                    kind={ButtonKind::Secondary}
                    label={t("result.new_game")}
                    onclick={on_new_game}
                />
            </div>
        </section>
    }
}
