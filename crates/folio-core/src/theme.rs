//! Light/dark theme preference.

use crate::constants::THEME_STORAGE_KEY;
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value store holding the theme flag.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used when `localStorage` is missing and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Stored preference wins; otherwise follow the system setting.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            });
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip and persist. A failed write is logged; the new theme still applies.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("[theme] could not persist preference: {}", e);
        }
    }
}
