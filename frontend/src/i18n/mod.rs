use std::collections::HashMap;
use leptos::*;

type Translations = HashMap<String, String>;

/// Translation lookup shared through the component tree.
///
/// The table is a stored value, so the context is `Copy` and can be moved
/// into any number of view closures.
#[derive(Clone, Copy)]
pub struct I18nContext {
    translations: StoredValue<Translations>,
}

impl I18nContext {
    pub fn new(language: &str) -> Self {
        Self {
            translations: store_value(load_translations(language)),
        }
    }

    /// Returns the key itself when no translation exists.
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with_value(|translations| translations.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }
}

fn normalize_language(language: &str) -> &'static str {
    match language.split(['-', '_']).next().unwrap_or_default() {
        "de" => "de",
        _ => "en",
    }
}

fn load_translations(language: &str) -> Translations {
    let json = match normalize_language(language) {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

/// Picks the browser language when it is supported.
pub fn browser_language() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|language| normalize_language(&language).to_string())
        .unwrap_or_else(|| "en".to_string())
}

pub fn provide_i18n(language: &str) {
    provide_context(I18nContext::new(language));
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
