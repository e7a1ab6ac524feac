use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found-page">
            <h1>{ "404" }</h1>
            <p><a href="/">{ crate::i18n::t("history.back") }</a></p>
        </div>
    }
}
