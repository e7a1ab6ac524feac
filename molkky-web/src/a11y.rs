// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the
/// page load. Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #2F6FED;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #game-status element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("game-status"))
        {
            node.set_text_content(Some(msg));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}

/// Toggle high-contrast mode for accessibility
///
/// Adds or removes the 'hc' class from the HTML element and persists the
/// choice so it survives reloads.
pub fn set_high_contrast(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };

        if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
            let _ = if enabled {
                html.class_list().add_1("hc")
            } else {
                html.class_list().remove_1("hc")
            };
        }

        if let Some(storage) = win.local_storage().ok().flatten() {
            let _ = storage.set_item("molkky.hc", if enabled { "1" } else { "0" });
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Check if high-contrast mode is currently enabled
///
/// Reads the saved preference to determine if high-contrast styling should be
/// active. Returns false if no preference is stored.
#[must_use]
pub fn high_contrast_enabled() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item("molkky.hc").ok().flatten())
            .is_some_and(|v| v == "1")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Move keyboard focus to the element with the given id, if it exists.
pub fn focus_element(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn focus_css_covers_ring_and_sr_only() {
        let css = visible_focus_css();
        assert!(css.contains(":focus"));
        assert!(css.contains(".sr-only"));
    }

    #[test]
    fn helpers_are_noops_off_browser() {
        set_status("safe without a window");
        set_high_contrast(true);
        focus_element("main");
        assert!(!high_contrast_enabled());
    }
}
