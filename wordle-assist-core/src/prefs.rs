//! Persisted page preferences.
use crate::constants::{
    FLAG_FALSE, FLAG_TRUE, PREF_INCLUDE_EXTENDED_KEY, PREF_THEME_KEY, THEME_DARK, THEME_LIGHT,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => THEME_LIGHT,
            Self::Dark => THEME_DARK,
        }
    }

    /// Anything other than `"dark"` (including nothing) reads as light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(THEME_DARK) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Key/value storage that survives page loads (`localStorage` in a browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and environments without persistent storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// A pending write to the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefWrite {
    pub key: &'static str,
    pub value: &'static str,
}

impl PrefWrite {
    pub fn apply<S: PreferenceStore + ?Sized>(self, store: &mut S) {
        store.set(self.key, self.value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub include_extended: bool,
}

impl Preferences {
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            theme: Theme::from_stored(store.get(PREF_THEME_KEY).as_deref()),
            include_extended: store.get(PREF_INCLUDE_EXTENDED_KEY).as_deref() == Some(FLAG_TRUE),
        }
    }

    #[must_use]
    pub const fn theme_write(&self) -> PrefWrite {
        PrefWrite {
            key: PREF_THEME_KEY,
            value: self.theme.as_str(),
        }
    }

    #[must_use]
    pub const fn include_extended_write(&self) -> PrefWrite {
        PrefWrite {
            key: PREF_INCLUDE_EXTENDED_KEY,
            value: if self.include_extended {
                FLAG_TRUE
            } else {
                FLAG_FALSE
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_defaults() {
        let prefs = Preferences::load(&MemoryStore::default());
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.include_extended);
    }

    #[test]
    fn stored_values_round_trip_through_writes() {
        let mut store = MemoryStore::default();
        let prefs = Preferences {
            theme: Theme::Dark,
            include_extended: true,
        };
        prefs.theme_write().apply(&mut store);
        prefs.include_extended_write().apply(&mut store);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("includeExtended").as_deref(), Some("true"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn unexpected_values_fall_back() {
        let mut store = MemoryStore::default();
        store.set("theme", "solarized");
        store.set("includeExtended", "yes");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.include_extended);
    }
}
