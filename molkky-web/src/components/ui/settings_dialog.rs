use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::button::{Button, ButtonKind};
use crate::components::modal::Modal;
use crate::i18n::t;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub high_contrast: bool,
    pub on_close: Callback<()>,
    pub on_hc_changed: Callback<bool>,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsDialog)]
pub fn settings_dialog(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_hc_toggle = {
        let cb = props.on_hc_changed.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.checked());
            }
        })
    };
    let on_reset = {
        let cb = props.on_reset.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            close.emit(());
        })
    };
    let on_close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal open={props.open} title={t("settings.title")} on_close={props.on_close.clone()}>
            <label class="settings-row">
                <input
                    id="hc-toggle"
                    type="checkbox"
                    checked={props.high_contrast}
                    onchange={on_hc_toggle}
                />
                { t("settings.high_contrast") }
            </label>
            <div class="settings-row">
                <Button
                    id="reset-session-btn"
                    kind={ButtonKind::Danger}
                    label={t("settings.reset")}
                    onclick={on_reset}
                />
                <p class="muted">{ t("settings.reset_hint") }</p>
            </div>
            <Button kind={ButtonKind::Secondary} label={t("settings.close")} onclick={on_close_click} />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn settings_show_contrast_and_reset() {
        crate::i18n::set_lang("en");
        let props = Props {
            open: true,
            high_contrast: true,
            on_close: Callback::noop(),
            on_hc_changed: Callback::noop(),
            on_reset: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SettingsDialog>::with_props(props).render());
        assert!(html.contains(&t("settings.high_contrast")));
        assert!(html.contains("reset-session-btn"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn closed_settings_render_nothing() {
        let props = Props {
            open: false,
            high_contrast: false,
            on_close: Callback::noop(),
            on_hc_changed: Callback::noop(),
            on_reset: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<SettingsDialog>::with_props(props).render());
        assert!(!html.contains("hc-toggle"));
    }
}
