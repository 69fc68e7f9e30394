use crate::constants::{CONTACT_FORM_ID, FORM_SUCCESS_ID};
use crate::dom;
use folio_core::{ContactForm, Field, SubmitOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(document: &web::Document, field: Field) -> String {
    let Some(el) = document.get_element_by_id(field.id()) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn render_errors(document: &web::Document, form: &ContactForm) {
    for field in Field::ALL {
        let Some(slot) = document.get_element_by_id(&format!("{}-error", field.id())) else {
            continue;
        };
        let error = form.error_for(field);
        let text = error.map(|e| e.to_string());
        slot.set_text_content(text.as_deref());
        _ = slot.class_list().toggle_with_force("show", error.is_some());
        if let Some(input) = document.get_element_by_id(field.id()) {
            _ = input.set_attribute("aria-invalid", if error.is_some() { "true" } else { "false" });
        }
    }
}

fn set_notice(document: &web::Document, visible: bool) {
    if let Some(notice) = document.get_element_by_id(FORM_SUCCESS_ID) {
        _ = notice.class_list().toggle_with_force("show", visible);
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(form_el) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::info!("[contact] no #{}; skipping", CONTACT_FORM_ID);
        return Ok(());
    };
    let state = Rc::new(RefCell::new(ContactForm::new()));

    for field in Field::ALL {
        let Some(input) = document.get_element_by_id(field.id()) else {
            log::warn!("[contact] missing #{}", field.id());
            continue;
        };
        let doc = document.clone();
        let state = state.clone();
        dom::on_event(&input, "input", move |_| {
            let mut form = state.borrow_mut();
            let had_error = form.error_for(field).is_some();
            form.edit(field, field_value(&doc, field));
            if had_error {
                render_errors(&doc, &form);
            }
        });
    }

    let doc = document.clone();
    let form_reset = form_el.clone();
    let notice_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::on_event(&form_el, "submit", move |ev| {
        ev.prevent_default();
        let mut form = state.borrow_mut();
        for field in Field::ALL {
            form.fields.set(field, field_value(&doc, field));
        }
        let outcome = form.submit();
        render_errors(&doc, &form);
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                log::debug!("[contact] rejected: {} field(s)", errors.len());
            }
            SubmitOutcome::Sent { notice_ms } => {
                form_reset.reset();
                set_notice(&doc, true);
                if let Some(handle) = notice_timer.take() {
                    dom::clear_timeout(handle);
                }
                let doc_hide = doc.clone();
                let state_hide = state.clone();
                notice_timer.set(dom::set_timeout(notice_ms, move || {
                    state_hide.borrow_mut().dismiss_notice();
                    set_notice(&doc_hide, false);
                }));
            }
        }
    });
    log::info!("[contact] ready");
    Ok(())
}
