use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::phase::is_player_name_valid;
use crate::components::button::{Button, ButtonKind};
use crate::game::{Player, PlayerId};
use crate::i18n::{t, tr};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub players: Vec<Player>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<PlayerId>,
}

#[function_component(RosterEditor)]
pub fn roster_editor(p: &Props) -> Html {
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
    let submit = {
        let draft = draft.clone();
        let on_add = p.on_add.clone();
        Callback::from(move |()| {
            on_add.emit((*draft).clone());
            draft.set(String::new());
        })
    };
    let on_add_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let can_add = is_player_name_valid(&draft);

    html! {
        <section class="panel roster-panel" aria-label={t("setup.players")}>
            <h2>{ t("setup.players") }</h2>
            <div class="roster-add">
                <label for="player-name-input" class="sr-only">{ t("setup.player_name") }</label>
                <input
                    id="player-name-input"
                    type="text"
                    placeholder={t("setup.player_name")}
                    value={(*draft).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <Button
                    id="add-player-btn"
                    label={t("setup.add")}
                    disabled={!can_add}
                    onclick={on_add_click}
                />
            </div>
            { p.error.as_ref().map(|key| html! {
                <p class="form-error" role="alert">{ t(key) }</p>
            }).unwrap_or_default() }
            <ul class="roster-list" role="list">
                { for p.players.iter().map(|player| {
                    let remove_label = {
                        let mut args = BTreeMap::new();
                        args.insert("name", player.name.as_str());
                        tr("setup.remove", Some(&args))
                    };
                    let on_remove = {
                        let cb = p.on_remove.clone();
                        let id = player.id;
                        Callback::from(move |_: MouseEvent| cb.emit(id))
                    };
                    html! {
                        <li class="roster-row" role="listitem">
                            <span class="roster-name">{ player.name.clone() }</span>
                            <Button
                                kind={ButtonKind::Danger}
                                label={remove_label}
                                onclick={on_remove}
                            />
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
