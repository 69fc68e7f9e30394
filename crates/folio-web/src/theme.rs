use crate::constants::THEME_TOGGLE_ID;
use crate::dom;
use folio_core::{PreferenceStore, StoreError, Theme, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`. Private browsing can make it throw; reads then miss
/// and writes report `StoreError`.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Option<web::Storage> {
        web::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_owned(),
            reason: format!("{:?}", e),
        })
    }
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let pressed = if theme == Theme::Dark { "true" } else { "false" };
        _ = toggle.set_attribute("aria-pressed", pressed);
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let controller = ThemeController::load(LocalStorageStore, dom::media_matches(PREFERS_DARK_QUERY));
    apply(document, controller.current());
    log::info!("[theme] {}", controller.current().as_str());

    let controller = Rc::new(RefCell::new(controller));
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let theme = controller.borrow_mut().toggle();
        apply(&doc, theme);
    });
    Ok(())
}
