//! `localStorage`-backed preferences.
use crate::dom::{js_error_message, local_storage, set_body_class};
use wordle_assist_core::{PreferenceStore, Preferences, Theme};

const DARK_MODE_CLASS: &str = "dark-mode";

/// Browser preference store. Reads fall back to "unset" and writes are
/// dropped (with a warning) when storage is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPrefs;

impl PreferenceStore for LocalPrefs {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            log::warn!("no storage; {key} not saved");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("could not persist {key}: {}", js_error_message(&err));
        }
    }
}

#[must_use]
pub fn saved_preferences() -> Preferences {
    Preferences::load(&LocalPrefs)
}

/// Reflect the theme into the page's `dark-mode` body class.
pub fn apply_theme(theme: Theme) {
    set_body_class(DARK_MODE_CLASS, theme.is_dark());
}

