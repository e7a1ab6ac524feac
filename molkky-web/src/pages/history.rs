use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::ui::history_panel::HistoryPanel;
use crate::game::GameHistory;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct HistoryPageProps {
    pub history: GameHistory,
    pub on_clear: Callback<()>,
    pub on_back: Callback<()>,
}

#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="page history-page">
            <HistoryPanel history={props.history.clone()} on_clear={props.on_clear.clone()} />
            <Button
                id="history-back-btn"
                kind={ButtonKind::Secondary}
                label={t("history.back")}
                onclick={on_back}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn history_page_wraps_the_panel_with_a_way_back() {
        crate::i18n::set_lang("en");
        let props = HistoryPageProps {
            history: GameHistory::default(),
            on_clear: Callback::noop(),
            on_back: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<HistoryPage>::with_props(props).render());
        assert!(html.contains(&t("history.title")));
        assert!(html.contains("history-back-btn"));
    }
}
