use crate::constants::TYPEWRITER_SELECTOR;
use crate::dom;
use folio_core::Typewriter;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn schedule(el: web::Element, writer: Rc<RefCell<Typewriter>>, delay_ms: i32) {
    dom::set_timeout(delay_ms, move || {
        let step = writer.borrow_mut().step();
        match step {
            Some(step) => {
                el.set_text_content(Some(&step.text));
                schedule(el, writer, step.delay_ms);
            }
            None => {
                // stopped mid-way: show everything
                let full = writer.borrow().full_text();
                el.set_text_content(Some(&full));
            }
        }
    });
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let reduced_motion = dom::media_matches(REDUCED_MOTION_QUERY);
    let targets = dom::query_all(document, TYPEWRITER_SELECTOR);
    for el in targets.iter().cloned() {
        let text = el
            .get_attribute("data-typewriter")
            .filter(|t| !t.trim().is_empty())
            .or_else(|| el.text_content())
            .unwrap_or_default();
        let mut writer = Typewriter::new(&text);
        _ = el.set_attribute("aria-label", &writer.full_text());
        if reduced_motion {
            writer.stop();
            el.set_text_content(Some(&writer.full_text()));
            continue;
        }
        el.set_text_content(Some(""));
        let delay = writer.start_delay_ms();
        schedule(el, Rc::new(RefCell::new(writer)), delay);
    }
    if !targets.is_empty() {
        log::info!("[typewriter] {} element(s), reduced_motion={}", targets.len(), reduced_motion);
    }
    Ok(())
}
