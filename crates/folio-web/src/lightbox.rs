use crate::constants::{LIGHTBOX_CLOSE_ID, LIGHTBOX_ID, LIGHTBOX_IMG_ID, LIGHTBOX_TITLE_ID};
use crate::dom;
use folio_core::{Lightbox, LightboxImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Returns false, touching nothing, when the page has no `#lightbox`.
pub fn show(document: &web::Document, image: &LightboxImage) -> bool {
    let Some(modal) = document.get_element_by_id(LIGHTBOX_ID) else {
        return false;
    };
    if let Some(img) = document.get_element_by_id(LIGHTBOX_IMG_ID) {
        _ = img.set_attribute("src", &image.src);
        _ = img.set_attribute("alt", &image.alt);
    }
    if let Some(title) = document.get_element_by_id(LIGHTBOX_TITLE_ID) {
        title.set_text_content(Some(&image.title));
    }
    _ = modal.class_list().add_1("active");
    _ = modal.set_attribute("aria-hidden", "false");
    dom::set_body_overflow(document, "hidden");
    if let Some(close) = dom::html_element_by_id(document, LIGHTBOX_CLOSE_ID) {
        _ = close.focus();
    }
    true
}

pub fn hide(document: &web::Document) {
    if let Some(img) = document.get_element_by_id(LIGHTBOX_IMG_ID) {
        // dropping src aborts any pending decode
        _ = img.remove_attribute("src");
    }
    if let Some(modal) = document.get_element_by_id(LIGHTBOX_ID) {
        _ = modal.class_list().remove_1("active");
        _ = modal.set_attribute("aria-hidden", "true");
    }
    dom::set_body_overflow(document, "");
}

pub fn open(document: &web::Document, state: &Rc<RefCell<Lightbox>>, image: LightboxImage) {
    if show(document, &image) {
        state.borrow_mut().open(image);
    }
}

/// Close control and backdrop clicks. Escape is handled with the global keydown.
pub fn wire(document: &web::Document, state: Rc<RefCell<Lightbox>>) {
    let Some(modal) = document.get_element_by_id(LIGHTBOX_ID) else {
        log::info!("[lightbox] no #{}; carousel images will not open", LIGHTBOX_ID);
        return;
    };

    let doc_close = document.clone();
    let state_close = state.clone();
    dom::add_click_listener(document, LIGHTBOX_CLOSE_ID, move || {
        if state_close.borrow_mut().close() {
            hide(&doc_close);
        }
    });

    let doc_backdrop = document.clone();
    let modal_js = JsValue::from(modal.clone());
    dom::on_event(&modal, "click", move |ev| {
        let on_backdrop = ev
            .target()
            .map(|t| JsValue::from(t) == modal_js)
            .unwrap_or(false);
        if on_backdrop && state.borrow_mut().close() {
            hide(&doc_backdrop);
        }
    });
}
