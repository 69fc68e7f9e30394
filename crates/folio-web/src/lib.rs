#![cfg(target_arch = "wasm32")]
pub mod carousel;
pub mod constants;
mod contact;
pub mod dom;
mod events;
mod frame;
pub mod input;
mod lazy;
pub mod lightbox;
mod nav;
mod render;
mod theme;
mod typewriter;

pub use theme::LocalStorageStore;

use crate::constants::PARTICLES_CANVAS_ID;
use crate::input::PointerState;
use folio_core::{FieldParams, Lightbox, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// A failing feature is logged and skipped; the rest of the page still wires up.
fn run_feature(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::warn!("[{}] disabled: {:?}", name, e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    run_feature("theme", theme::init(&document));
    run_feature("nav", nav::init(&document));
    run_feature("typewriter", typewriter::init(&document));
    run_feature("contact", contact::init(&document));

    let lightbox_state = Rc::new(RefCell::new(Lightbox::new()));
    lightbox::wire(&document, lightbox_state.clone());
    events::wire_global_keydown(&document, lightbox_state.clone());
    run_feature("carousel", carousel::init(&document, lightbox_state));
    run_feature("lazy", lazy::init(&document));

    run_feature("particles", init_particles(&document));
    Ok(())
}

fn init_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(PARTICLES_CANVAS_ID) else {
        log::info!("[particles] no #{}; skipping", PARTICLES_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the WebGPU surface at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        dom::on_event(&window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas_resize)
        });
    }

    let pointer = Rc::new(RefCell::new(PointerState::centered(input::viewport_css_px())));
    events::wire_pointer_tracking(pointer.clone());

    let field = ParticleField::new(FieldParams::default(), rand::random());
    log::info!("[particles] {} particles", field.len());

    let document = document.clone();
    spawn_local(async move {
        let renderer = frame::init_renderer(&canvas, field.len()).await;
        let ctx = frame::ParticleFrameContext::new(field, renderer, canvas, pointer);
        frame::start_particle_loop(Rc::new(RefCell::new(ctx)), &document);
    });
    Ok(())
}
