use yew::prelude::*;

use crate::i18n::t;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo" class="app-footer">
            <p class="muted">{ t("app.tagline") }</p>
        </footer>
    }
}
