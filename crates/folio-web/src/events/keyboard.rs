use crate::dom;
use crate::lightbox;
use folio_core::Lightbox;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    lightbox_state: &Rc<RefCell<Lightbox>>,
) {
    let key = ev.key();
    let closed = lightbox_state.borrow_mut().handle_key(&key);
    if closed {
        lightbox::hide(document);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(document: &web::Document, lightbox_state: Rc<RefCell<Lightbox>>) {
    let doc = document.clone();
    dom::on_event(document, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, &doc, &lightbox_state);
        }
    });
}
