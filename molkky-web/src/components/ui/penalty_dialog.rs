use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::modal::Modal;
use crate::game::{ContenderId, GameState};
use crate::i18n::t;

#[derive(Properties, Clone)]
pub struct Props {
    pub open: bool,
    pub game: GameState,
    pub on_close: Callback<()>,
    pub on_penalty: Callback<ContenderId>,
    pub on_out_of_turn: Callback<ContenderId>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.open == other.open && self.game == other.game
    }
}

#[function_component(PenaltyDialog)]
pub fn penalty_dialog(props: &Props) -> Html {
    let selected = use_state(|| None::<ContenderId>);

    if !props.open {
        return Html::default();
    }

    let candidates: Vec<_> = props
        .game
        .contender_views()
        .into_iter()
        .filter(|v| !v.card.eliminated)
        .collect();

    let on_pick = |id: ContenderId| {
        let selected = selected.clone();
        Callback::from(move |_: Event| selected.set(Some(id)))
    };
    let emit_and_clear = |cb: &Callback<ContenderId>| {
        let cb = cb.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(target) = *selected {
                selected.set(None);
                cb.emit(target);
            }
        })
    };
    let on_penalty = emit_and_clear(&props.on_penalty);
    let on_out_of_turn = emit_and_clear(&props.on_out_of_turn);
    let on_cancel = {
        let cb = props.on_close.clone();
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(None);
            cb.emit(());
        })
    };
    let nothing_picked = selected.is_none();

    html! {
        <Modal
            open={props.open}
            title={t("penalty.title")}
            description={Some(AttrValue::from(t("penalty.pick")))}
            on_close={props.on_close.clone()}
        >
            <ul class="penalty-candidates" role="radiogroup" aria-label={t("penalty.pick")}>
                { for candidates.iter().map(|view| {
                    let checked = *selected == Some(view.id);
                    html! {
                        <li>
                            <label class="penalty-candidate">
                                <input
                                    type="radio"
                                    name="penalty-target"
                                    checked={checked}
                                    onchange={on_pick(view.id)}
                                />
                                { view.name.clone() }
                            </label>
                        </li>
                    }
                }) }
            </ul>
            <div class="penalty-actions">
                <Button
                    id="penalty-manual-btn"
                    kind={ButtonKind::Danger}
                    label={t("penalty.manual")}
                    disabled={nothing_picked}
                    onclick={on_penalty}
                />
                <Button
                    id="penalty-oot-btn"
                    kind={ButtonKind::Danger}
                    label={t("penalty.out_of_turn")}
                    disabled={nothing_picked}
                    onclick={on_out_of_turn}
                />
                <Button
                    kind={ButtonKind::Secondary}
                    label={t("penalty.cancel")}
                    onclick={on_cancel}
                />
            </div>
        </Modal>
    }
}
