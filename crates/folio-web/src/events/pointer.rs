use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window for the particle parallax.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::on_event(&window, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let mut p = pointer.borrow_mut();
            p.x = ev.client_x() as f32;
            p.y = ev.client_y() as f32;
        }
    });
}
