use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::ui::roster_editor::RosterEditor;
use crate::components::ui::team_builder::TeamBuilder;
use crate::game::{GameState, PlayMode, PlayerId, TeamId};
use crate::i18n::t;

#[derive(Properties, Clone)]
pub struct SetupPageProps {
    pub game: GameState,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_add_player: Callback<String>,
    pub on_remove_player: Callback<PlayerId>,
    pub on_set_mode: Callback<PlayMode>,
    pub on_add_team: Callback<String>,
    pub on_remove_team: Callback<TeamId>,
    pub on_assign_player: Callback<(TeamId, String)>,
    pub on_shuffle: Callback<()>,
    pub on_start: Callback<()>,
}

impl PartialEq for SetupPageProps {
    fn eq(&self, other: &Self) -> bool {
        self.game == other.game && self.error == other.error
    }
}

#[function_component(SetupPage)]
pub fn setup_page(props: &SetupPageProps) -> Html {
    let on_mode_change = {
        let cb = props.on_set_mode.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let mode = if sel.value() == "teams" {
                    PlayMode::Teams
                } else {
                    PlayMode::FreeForAll
                };
                cb.emit(mode);
            }
        })
    };
    let on_shuffle = {
        let cb = props.on_shuffle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let teams_mode = props.game.mode.is_teams();

    html! {
        <div class="page setup-page">
            <h1>{ t("setup.title") }</h1>
            <p class="muted">{ t("setup.hint") }</p>
            <div class="mode-select">
                <label for="mode-select">{ t("setup.mode_label") }</label>
                <select id="mode-select" onchange={on_mode_change}>
                    <option value="free_for_all" selected={!teams_mode}>{ t("setup.mode_ffa") }</option>
                    <option value="teams" selected={teams_mode}>{ t("setup.mode_teams") }</option>
                </select>
            </div>
            <RosterEditor
                players={props.game.players.clone()}
                error={props.error.clone()}
                on_add={props.on_add_player.clone()}
                on_remove={props.on_remove_player.clone()}
            />
            { if teams_mode {
                html! {
                    <TeamBuilder
                        teams={props.game.teams.clone()}
                        unassigned={props.game.unassigned_players()}
                        on_add_team={props.on_add_team.clone()}
                        on_remove_team={props.on_remove_team.clone()}
                        on_assign={props.on_assign_player.clone()}
                    />
                }
            } else {
                Html::default()
            } }
            <div class="setup-actions">
                <Button
                    id="shuffle-btn"
                    kind={ButtonKind::Secondary}
                    label={t("setup.shuffle")}
                    onclick={on_shuffle}
                />
                <Button id="start-btn" label={t("setup.start")} onclick={on_start} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props_for(game: GameState) -> SetupPageProps {
        SetupPageProps {
            game,
            error: None,
            on_add_player: Callback::noop(),
            on_remove_player: Callback::noop(),
            on_set_mode: Callback::noop(),
            on_add_team: Callback::noop(),
            on_remove_team: Callback::noop(),
            on_assign_player: Callback::noop(),
            on_shuffle: Callback::noop(),
            on_start: Callback::noop(),
        }
    }

    #[test]
    fn free_for_all_hides_the_team_builder() {
        crate::i18n::set_lang("en");
        let mut game = GameState::new();
        game.add_player("Aino").unwrap();
        let html =
            block_on(LocalServerRenderer::<SetupPage>::with_props(props_for(game)).render());
        assert!(html.contains("start-btn"));
        assert!(html.contains("shuffle-btn"));
        assert!(!html.contains("team-name-input"));
    }

    #[test]
    fn teams_mode_shows_the_team_builder() {
        crate::i18n::set_lang("en");
        let mut game = GameState::new();
        game.set_mode(PlayMode::Teams).unwrap();
        game.add_player("Aino").unwrap();
        game.add_team("Reds").unwrap();
        let html =
            block_on(LocalServerRenderer::<SetupPage>::with_props(props_for(game)).render());
        assert!(html.contains("team-name-input"));
        assert!(html.contains("Reds"));
    }
}
