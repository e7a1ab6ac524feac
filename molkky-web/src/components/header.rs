use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{locales, t};
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_open_settings: Callback<()>,
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let open_settings = {
        let cb = p.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("nav.skip_to_content") }</a>
            <div class="header-content">
                <p class="header-title">{ t("app.title") }</p>
                <nav aria-label={t("nav.language")} class="header-left">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} value={p.current_lang.clone()} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                        }) }
                    </select>
                </nav>
                <div class="header-right">
                    <Link<Route> to={Route::History} classes="header-link">
                        { t("nav.history") }
                    </Link<Route>>
                    <button id="settings-open-btn" onclick={open_settings}>{ t("nav.settings") }</button>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(HeaderHarness)]
    fn header_harness() -> Html {
        use yew_router::history::{AnyHistory, MemoryHistory};
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <yew_router::Router history={history}>
                <Header
                    on_open_settings={Callback::noop()}
                    on_lang_change={Callback::noop()}
                    current_lang={String::from("en")}
                />
            </yew_router::Router>
        }
    }

    #[test]
    fn header_lists_locales_and_actions() {
        crate::i18n::set_lang("en");
        let html = block_on(LocalServerRenderer::<HeaderHarness>::new().render());
        assert!(html.contains("Suomi"));
        assert!(html.contains("English"));
        assert!(html.contains(&t("nav.settings")));
        assert!(html.contains(&t("app.title")));
    }
}
