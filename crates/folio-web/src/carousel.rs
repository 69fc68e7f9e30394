use crate::constants::{CAROUSEL_ID, CAROUSEL_ITEM_SELECTOR, CAROUSEL_TRACK_SELECTOR, LAZY_IMAGE_SELECTOR};
use crate::dom::{self, js_err};
use crate::frame::{self, CarouselFrameContext};
use crate::{lazy, lightbox};
use folio_core::constants::RESIZE_RELOAD_DEBOUNCE_MS;
use folio_core::{parse_px, CarouselLoop, CarouselParams, Lightbox, LightboxImage};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document, lightbox_state: Rc<RefCell<Lightbox>>) -> anyhow::Result<()> {
    let Some(container) = dom::html_element_by_id(document, CAROUSEL_ID) else {
        log::info!("[carousel] no #{}; skipping", CAROUSEL_ID);
        return Ok(());
    };
    let track = container
        .query_selector(CAROUSEL_TRACK_SELECTOR)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CAROUSEL_TRACK_SELECTOR))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_item_clicks(document, &track, lightbox_state);

    // carousel images are needed for measurement, so skip lazy loading
    for img in dom::query_all_in(&track, LAZY_IMAGE_SELECTOR) {
        lazy::load_image(&img);
    }
    let track_ready = track.clone();
    when_images_settled(&track, move || setup_loop(container, track_ready));

    wire_resize_reload();
    Ok(())
}

/// Run `on_ready` once every image in `root` has loaded or failed.
fn when_images_settled(root: &web::Element, on_ready: impl FnOnce() + 'static) {
    let pending: Vec<web::HtmlImageElement> = dom::query_all_in(root, "img")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        .filter(|img| !img.complete())
        .collect();
    if pending.is_empty() {
        on_ready();
        return;
    }

    let remaining = Rc::new(Cell::new(pending.len()));
    let on_ready: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_ready))));
    for img in &pending {
        let settled = Rc::new(Cell::new(false));
        for event in ["load", "error"] {
            let settled = settled.clone();
            let remaining = remaining.clone();
            let on_ready = on_ready.clone();
            dom::on_event(img, event, move |_| {
                if settled.replace(true) {
                    return;
                }
                remaining.set(remaining.get().saturating_sub(1));
                if remaining.get() == 0 {
                    let ready = on_ready.borrow_mut().take();
                    if let Some(ready) = ready {
                        ready();
                    }
                }
            });
        }
    }
}

fn setup_loop(container: web::HtmlElement, track: web::HtmlElement) {
    let originals = dom::query_all_in(&track, CAROUSEL_ITEM_SELECTOR);
    for item in &originals {
        match item.clone_node_with_deep(true) {
            Ok(clone) => {
                if let Some(el) = clone.dyn_ref::<web::Element>() {
                    _ = el.set_attribute("aria-hidden", "true");
                }
                _ = track.append_child(&clone);
            }
            Err(e) => log::warn!("[carousel] clone failed: {:?}", e),
        }
    }
    // the frame loop owns the motion
    dom::set_style(&track, "animation", "none");

    let widths: Vec<f64> = originals
        .iter()
        .map(|el| el.get_bounding_client_rect().width())
        .collect();
    let params = CarouselParams::default();
    let carousel = CarouselLoop::from_measurements(&widths, track_gap(&track), &params);
    dom::set_style(&track, "box-sizing", "content-box");
    dom::set_style(&track, "width", &format!("{}px", carousel.track_width()));
    log::info!(
        "[carousel] items={} set_width={:.0}px speed={}px/s",
        originals.len(),
        carousel.single_set_width(),
        carousel.speed()
    );

    let carousel = Rc::new(RefCell::new(carousel));
    wire_pause(&container, &carousel);
    frame::start_carousel_loop(Rc::new(RefCell::new(CarouselFrameContext {
        carousel,
        track,
        last_instant: Instant::now(),
    })));
}

/// Horizontal gap between items from the computed style; 0 when unset.
fn track_gap(track: &web::HtmlElement) -> f64 {
    let Some(style) = web::window().and_then(|w| w.get_computed_style(track).ok().flatten()) else {
        return 0.0;
    };
    ["column-gap", "gap"]
        .iter()
        .filter_map(|p| style.get_property_value(p).ok())
        .find_map(|v| parse_px(&v))
        .unwrap_or(0.0)
}

fn wire_pause(container: &web::HtmlElement, carousel: &Rc<RefCell<CarouselLoop>>) {
    for (event, running) in [
        ("pointerenter", false),
        ("focusin", false),
        ("pointerleave", true),
        ("focusout", true),
    ] {
        let carousel = carousel.clone();
        dom::on_event(container, event, move |_| {
            carousel.borrow_mut().set_running(running);
        });
    }
}

/// Clicks on originals and clones alike open the lightbox.
fn wire_item_clicks(
    document: &web::Document,
    track: &web::HtmlElement,
    lightbox_state: Rc<RefCell<Lightbox>>,
) {
    let doc = document.clone();
    dom::on_event(track, "click", move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        let Some(item) = target.closest(CAROUSEL_ITEM_SELECTOR).ok().flatten() else {
            return;
        };
        let Some(img) = item
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            return;
        };
        let src = img
            .get_attribute("data-full")
            .unwrap_or_else(|| img.current_src());
        let alt = img.alt();
        let title = item
            .get_attribute("data-title")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| alt.clone());
        lightbox::open(&doc, &lightbox_state, LightboxImage { src, alt, title });
    });
}

/// Layout-dependent widths are not re-measured live; the page reloads once
/// resizing settles.
fn wire_resize_reload() {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::on_event(&window, "resize", move |_| {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(handle);
        }
        pending.set(dom::set_timeout(RESIZE_RELOAD_DEBOUNCE_MS, || {
            if let Some(w) = web::window() {
                log::info!("[carousel] viewport resized; reloading");
                _ = w.location().reload();
            }
        }));
    });
}
