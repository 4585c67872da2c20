//! Document-level helpers: bootstrap data, theme attribute, dialogs.

use gloo::utils::{document, document_element, window};
use shared::config::{PageConfig, PAGE_DATA_ELEMENT_ID};
use shared::theme::{self, Theme, ThemePreference, INITIAL_THEME_ATTRIBUTE, THEME_ATTRIBUTE, THEME_STORAGE_KEY};

use super::date_utils::get_current_time;
use super::logging::Logger;
use super::storage;

/// Read the embedded page-data document, falling back to defaults.
pub fn load_page_config() -> PageConfig {
    let raw = document()
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();

    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            Logger::error_with_component("page", &e.to_string());
            PageConfig::default()
        }
    }
}

/// Resolve and apply the theme once for this page load.
pub fn apply_initial_theme() -> Theme {
    let initial = document_element().get_attribute(INITIAL_THEME_ATTRIBUTE);
    let stored = storage::get_item(THEME_STORAGE_KEY);
    let theme = theme::resolve_theme(initial.as_deref(), stored.as_deref(), &get_current_time());
    set_theme_attribute(theme);
    theme
}

/// Persist a preference chosen by the user and apply it right away.
pub fn save_theme_preference(preference: ThemePreference) -> Theme {
    if !storage::set_item(THEME_STORAGE_KEY, preference.as_str()) {
        Logger::warn_with_component("theme", "Could not persist theme preference");
    }
    let theme = preference.resolve(&get_current_time());
    set_theme_attribute(theme);
    theme
}

pub fn stored_theme_preference() -> ThemePreference {
    theme::effective_preference(None, storage::get_item(THEME_STORAGE_KEY).as_deref())
}

fn set_theme_attribute(theme: Theme) {
    if let Err(e) = document_element().set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        gloo::console::error!("Failed to set theme attribute:", e);
    }
}

/// Blocking alert dialog
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        gloo::console::error!("Failed to reload page:", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_initial_attribute_overrides_storage() {
        storage::set_item(THEME_STORAGE_KEY, "light");
        document_element()
            .set_attribute(INITIAL_THEME_ATTRIBUTE, "dark")
            .unwrap();

        assert_eq!(apply_initial_theme(), Theme::Dark);
        assert_eq!(document_element().get_attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));

        document_element().remove_attribute(INITIAL_THEME_ATTRIBUTE).unwrap();
        LocalStorage::delete(THEME_STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn test_saved_preference_is_applied_and_stored() {
        assert_eq!(save_theme_preference(ThemePreference::Light), Theme::Light);
        assert_eq!(storage::get_item(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(stored_theme_preference(), ThemePreference::Light);
        assert_eq!(document_element().get_attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
        LocalStorage::delete(THEME_STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn test_missing_page_data_uses_defaults() {
        assert_eq!(load_page_config(), PageConfig::default());
    }
}
