//! QA bridge exposed as `window.__molkkyTest` when the page is loaded with
//! `?test=1`. Read-only except for `reset`; the browser tester drives the UI
//! through ordinary DOM interaction and uses the bridge for state assertions.

#[cfg(target_arch = "wasm32")]
pub fn maybe_install() {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let enabled = crate::dom::window()
        .location()
        .search()
        .map(|s| s.contains("test=1"))
        .unwrap_or(false);
    if !enabled {
        return;
    }

    let bridge = js_sys::Object::new();

    let state_fn = Closure::<dyn Fn() -> JsValue>::new(current_state);
    let phase_fn = Closure::<dyn Fn() -> JsValue>::new(|| {
        JsValue::from_str(&current_phase())
    });
    let reset_fn = Closure::<dyn Fn()>::new(|| {
        if let Err(err) = crate::game::create_session_manager().clear() {
            log::warn!("bridge reset failed: {err}");
        }
    });
    let version_fn = Closure::<dyn Fn() -> JsValue>::new(|| {
        JsValue::from_str(env!("CARGO_PKG_VERSION"))
    });

    let entries = [
        ("state", state_fn.into_js_value()),
        ("phase", phase_fn.into_js_value()),
        ("reset", reset_fn.into_js_value()),
        ("version", version_fn.into_js_value()),
    ];
    for (name, value) in entries {
        let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str(name), &value);
    }
    let window: JsValue = crate::dom::window().into();
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__molkkyTest"), &bridge);
    log::info!("test bridge installed");
}

#[cfg(target_arch = "wasm32")]
fn current_snapshot() -> Option<crate::game::SessionSnapshot> {
    use molkky_game::SnapshotStore;
    crate::game::WebSnapshotStore.load().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn current_state() -> wasm_bindgen::JsValue {
    current_snapshot()
        .and_then(|snapshot| serde_wasm_bindgen::to_value(&snapshot).ok())
        .unwrap_or(wasm_bindgen::JsValue::NULL)
}

#[cfg(target_arch = "wasm32")]
fn current_phase() -> String {
    current_snapshot()
        .and_then(|snapshot| snapshot.game)
        .map_or_else(|| String::from("setup"), |game| game.phase.to_string())
}

/// Off-wasm the bridge does not exist; keep the call site uniform.
#[cfg(not(target_arch = "wasm32"))]
pub fn maybe_install() {}
