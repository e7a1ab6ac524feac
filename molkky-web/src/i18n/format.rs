#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = {
                let arr = js_sys::Array::new();
                arr.push(&JsValue::from_str(&bundle.lang));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Format an epoch-milliseconds stamp as a locale date-time (browser-side)
#[must_use]
pub fn fmt_date_ms(epoch_ms: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            #[allow(clippy::cast_precision_loss)]
            let date = Date::new(&JsValue::from_f64(epoch_ms as f64));
            date.to_locale_string(&bundle.lang, &JsValue::UNDEFINED)
                .as_string()
                .unwrap_or_else(|| epoch_ms.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        epoch_ms.to_string()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn number_formatter_uses_host_fallback() {
        assert_eq!(fmt_number(12.5), "12.5");
        assert_eq!(fmt_number(50.0), "50");
    }

    #[test]
    fn date_formatter_echoes_stamp_on_host() {
        assert_eq!(fmt_date_ms(1_700_000_000_000), "1700000000000");
    }
}
