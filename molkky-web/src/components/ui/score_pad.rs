use yew::prelude::*;

use crate::game::MAX_THROW_POINTS;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub disabled: bool,
    pub on_throw: Callback<i32>,
}

#[function_component(ScorePad)]
pub fn score_pad(p: &Props) -> Html {
    let point_button = |points: i32| {
        let onclick = {
            let cb = p.on_throw.clone();
            Callback::from(move |_: MouseEvent| cb.emit(points))
        };
        html! {
            <button
                type="button"
                class="pad-btn"
                data-points={points.to_string()}
                disabled={p.disabled}
                {onclick}
            >
                { points.to_string() }
            </button>
        }
    };

    let on_miss = {
        let cb = p.on_throw.clone();
        Callback::from(move |_: MouseEvent| cb.emit(0))
    };

    html! {
        <div class="score-pad" role="group" aria-label={t("play.pad_label")}>
            <button
                type="button"
                id="miss-btn"
                class="pad-btn pad-miss"
                data-points="0"
                disabled={p.disabled}
                onclick={on_miss}
            >
                { t("play.miss") }
            </button>
            <div class="pad-grid">
                { for (1..=MAX_THROW_POINTS).map(point_button) }
            </div>
        </div>
    }
}
