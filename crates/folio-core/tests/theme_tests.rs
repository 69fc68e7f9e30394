// Host-side tests for theme persistence.

use folio_core::constants::THEME_STORAGE_KEY;
use folio_core::{MemoryStore, PreferenceStore, StoreError, Theme, ThemeController};

#[test]
fn toggling_twice_restores_and_persists_final_value() {
    let mut ctl = ThemeController::load(MemoryStore::default(), false);
    let original = ctl.current();

    assert_eq!(ctl.toggle(), original.toggled());
    assert_eq!(ctl.toggle(), original);
    assert_eq!(ctl.current(), original);
    assert_eq!(
        ctl.store().get(THEME_STORAGE_KEY).as_deref(),
        Some(original.as_str())
    );
}

#[test]
fn stored_preference_beats_system_setting() {
    let mut store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "light").unwrap();
    let ctl = ThemeController::load(store, true);
    assert_eq!(ctl.current(), Theme::Light);
}

#[test]
fn system_setting_used_without_valid_stored_value() {
    assert_eq!(ThemeController::load(MemoryStore::default(), true).current(), Theme::Dark);

    let mut store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "sepia").unwrap();
    assert_eq!(ThemeController::load(store, false).current(), Theme::Light);
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[test]
fn failing_store_still_switches_theme() {
    let mut ctl = ThemeController::load(BrokenStore, false);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn theme_strings() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
}
