use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "fi",
        name: "Suomi",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("fi", include_str!("../../i18n/fi.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_parses() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("locale parses");
            assert!(value.is_object(), "{} is not an object", meta.code);
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let fallback = load_translations("xx").expect("fallback parses");
        assert_eq!(
            fallback
                .get("app")
                .and_then(|a| a.get("title"))
                .and_then(Value::as_str),
            Some("Mölkky Scorekeeper")
        );
    }

    #[test]
    fn locales_share_the_same_key_set() {
        fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
            if let Value::Object(map) = value {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    if v.is_object() && v.get("other").is_none() {
                        keys(v, &path, out);
                    } else {
                        out.push(path);
                    }
                }
            }
        }

        let en = load_translations("en").unwrap();
        let fi = load_translations("fi").unwrap();
        let mut en_keys = Vec::new();
        let mut fi_keys = Vec::new();
        keys(&en, "", &mut en_keys);
        keys(&fi, "", &mut fi_keys);
        en_keys.sort();
        fi_keys.sort();
        assert_eq!(en_keys, fi_keys);
    }
}
