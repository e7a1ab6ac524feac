use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        match rules.select(count).as_string() {
            Some(selected) => selected,
            None => host_plural_category(count),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        host_plural_category(count)
    }
}

fn host_plural_category(count: f64) -> String {
    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else if count.abs() < f64::EPSILON {
        "zero".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(count_str) = args.and_then(|m| m.get("count")).copied() {
                if let Ok(count) = count_str.parse::<f64>() {
                    let category = plural_category(lang, count);
                    if let Some(s) = map.get(&category).and_then(Value::as_str) {
                        s.to_string()
                    } else if let Some(default) = map.get("other").and_then(Value::as_str) {
                        default.to_string()
                    } else {
                        return None;
                    }
                } else {
                    map.get("other")
                        .and_then(Value::as_str)
                        .map(std::string::ToString::to_string)?
                }
            } else if let Some(default) = map.get("other").and_then(Value::as_str) {
                default.to_string()
            } else {
                return None;
            }
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let placeholder = format!("{{{k}}}");
            text = text.replace(&placeholder, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Simple translation without variable substitution.
/// Falls back to English if the key is missing from the current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format `{key}`; plural forms
/// are selected from the `count` argument.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
