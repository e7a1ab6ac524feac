use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::phase::is_player_name_valid;
use crate::components::button::{Button, ButtonKind};
use crate::game::{Team, TeamId};
use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub teams: Vec<Team>,
    pub unassigned: Vec<String>,
    pub on_add_team: Callback<String>,
    pub on_remove_team: Callback<TeamId>,
    pub on_assign: Callback<(TeamId, String)>,
}

fn team_panel(team: &Team, p: &Props) -> Html {
    let remove_label = {
        let mut args = BTreeMap::new();
        args.insert("name", team.name.as_str());
        tr("setup.remove_team", Some(&args))
    };
    let on_remove = {
        let cb = p.on_remove_team.clone();
        let id = team.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    html! {
        <div class="team-panel">
            <div class="team-head">
                <h3>{ team.name.clone() }</h3>
                <Button kind={ButtonKind::Danger} label={remove_label} onclick={on_remove} />
            </div>
            <ul role="list">
                { for team.members.iter().map(|m| html! { <li role="listitem">{ m.clone() }</li> }) }
            </ul>
        </div>
    }
}

fn unassigned_row(name: &str, p: &Props) -> Html {
    html! {
        <li class="unassigned-row" role="listitem">
            <span>{ name.to_string() }</span>
            { for p.teams.iter().map(|team| {
                let label = {
                    let mut args = BTreeMap::new();
                    args.insert("team", team.name.as_str());
                    tr("setup.assign_to", Some(&args))
                };
                let on_assign = {
                    let cb = p.on_assign.clone();
                    let id = team.id;
                    let name = name.to_string();
                    Callback::from(move |_: MouseEvent| cb.emit((id, name.clone())))
                };
                html! {
                    <Button kind={ButtonKind::Secondary} label={label} onclick={on_assign} />
                }
            }) }
        </li>
    }
}

#[function_component(TeamBuilder)]
pub fn team_builder(p: &Props) -> Html {
    let draft = use_state(String::new);

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                draft.set(input.value());
            }
        })
    };
    let on_add = {
        let draft = draft.clone();
        let cb = p.on_add_team.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit((*draft).clone());
            draft.set(String::new());
        })
    };
    let can_add = is_player_name_valid(&draft);

    html! {
        <section class="panel team-panelgroup" aria-label={t("setup.mode_teams")}>
            <h2>{ t("setup.mode_teams") }</h2>
            <div class="team-add">
                <label for="team-name-input" class="sr-only">{ t("setup.team_name") }</label>
                <input
                    id="team-name-input"
                    type="text"
                    placeholder={t("setup.team_name")}
                    value={(*draft).clone()}
                    oninput={on_input}
                />
                <Button id="add-team-btn" label={t("setup.add_team")} disabled={!can_add} onclick={on_add} />
            </div>
            <div class="team-grid">
                { for p.teams.iter().map(|team| team_panel(team, p)) }
            </div>
            { if p.unassigned.is_empty() { Html::default() } else { html! {
                <>
                    <h3>{ t("setup.unassigned") }</h3>
                    <ul class="unassigned-list" role="list">
                        { for p.unassigned.iter().map(|name| unassigned_row(name, p)) }
                    </ul>
                </>
            } } }
        </section>
    }
}
