use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::input::{self, PointerState};
use crate::render;
use folio_core::{
    Camera, CarouselLoop, FrameAction, FrameInput, LoopGate, NullRenderer, ParticleField,
    PointRenderer,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub struct ParticleFrameContext {
    pub field: ParticleField,
    pub renderer: Box<dyn PointRenderer>,
    pub camera: Camera,
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub started: Instant,
    pub backing_size: (u32, u32),
}

impl ParticleFrameContext {
    pub fn new(
        field: ParticleField,
        mut renderer: Box<dyn PointRenderer>,
        canvas: web::HtmlCanvasElement,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Self {
        renderer.upload_attributes(field.attributes());
        Self {
            field,
            renderer,
            camera: Camera::default(),
            canvas,
            pointer,
            started: Instant::now(),
            // forces a resize + camera upload on the first frame
            backing_size: (0, 0),
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let input = FrameInput {
            elapsed_sec: elapsed,
            pointer: self.pointer.borrow().as_vec2(),
            viewport: input::viewport_css_px(),
        };
        self.field.advance(&input);
        self.field.sync_to(self.renderer.as_mut());
        self.renderer.set_time(elapsed);

        let size = (self.canvas.width(), self.canvas.height());
        if size != self.backing_size {
            self.backing_size = size;
            self.camera.set_viewport(size.0, size.1);
            self.renderer.set_camera(&self.camera);
            self.renderer.resize(size.0, size.1);
        }
        if let Err(e) = self.renderer.render() {
            log::error!("render error: {:?}", e);
        }
    }
}

/// WebGPU if available; otherwise the field animates without drawing.
pub async fn init_renderer(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Box<dyn PointRenderer> {
    match render::GpuPoints::new(canvas, capacity, dom::pixel_ratio() as f32).await {
        Ok(g) => Box::new(g),
        Err(e) => {
            log::warn!("[particles] WebGPU unavailable, rendering disabled: {:?}", e);
            Box::new(NullRenderer::default())
        }
    }
}

/// Particle loop: suspends while the page is hidden and resumes once when it returns.
pub fn start_particle_loop(frame_ctx: Rc<RefCell<ParticleFrameContext>>, document: &web::Document) {
    let gate = Rc::new(RefCell::new(LoopGate::new(!document.hidden())));
    let tick: FrameCallback = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let gate_tick = gate.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if gate_tick.borrow_mut().on_frame() == FrameAction::Suspend {
            log::debug!("[particles] suspended");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));

    let doc = document.clone();
    let gate_vis = gate.clone();
    let tick_vis = tick.clone();
    dom::on_event(document, "visibilitychange", move |_| {
        let resume = gate_vis.borrow_mut().set_visible(!doc.hidden());
        if resume {
            log::debug!("[particles] resumed");
            request_frame(&tick_vis);
        }
    });

    if let Some(window) = web::window() {
        let gate_hide = gate.clone();
        dom::on_event(&window, "pagehide", move |_| gate_hide.borrow_mut().stop());

        // back/forward cache restore
        let gate_show = gate.clone();
        let tick_show = tick.clone();
        dom::on_event(&window, "pageshow", move |ev| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .is_some_and(|e| e.persisted());
            if !persisted {
                return;
            }
            let resume = gate_show.borrow_mut().start();
            if resume {
                log::debug!("[particles] restored from cache");
                request_frame(&tick_show);
            }
        });
    }

    let first = gate.borrow_mut().start();
    if first {
        request_frame(&tick);
    }
}

pub struct CarouselFrameContext {
    pub carousel: Rc<RefCell<CarouselLoop>>,
    pub track: web::HtmlElement,
    pub last_instant: Instant,
}

impl CarouselFrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let mut carousel = self.carousel.borrow_mut();
        if !carousel.is_running() {
            return;
        }
        carousel.tick(dt_sec);
        dom::set_style(&self.track, "transform", &carousel.transform());
    }
}

/// Carousel loop: always reschedules; the pause flag only freezes the offset.
pub fn start_carousel_loop(frame_ctx: Rc<RefCell<CarouselFrameContext>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
