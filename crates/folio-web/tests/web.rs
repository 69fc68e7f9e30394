#![cfg(target_arch = "wasm32")]

use folio_core::{
    parse_px, FieldParams, FrameInput, Lightbox, LightboxImage, NullRenderer, ParticleField,
    PreferenceStore, Theme, ThemeController,
};
use folio_web::{carousel, dom, lightbox, LocalStorageStore};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn field_updates_without_gpu() {
    let mut field = ParticleField::new(FieldParams::default(), 3);
    let mut renderer = NullRenderer::default();
    let viewport = Vec2::new(800.0, 600.0);
    for frame in 0..30 {
        field.advance(&FrameInput::centered(frame as f32 / 60.0, viewport));
        field.sync_to(&mut renderer);
    }
    assert!(renderer.uploads > 0);
}

#[wasm_bindgen_test]
fn computed_gap_parses_as_pixels() {
    let document = dom::window_document().unwrap();
    let track = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    dom::set_style(&track, "display", "flex");
    dom::set_style(&track, "column-gap", "24px");
    document.body().unwrap().append_child(&track).unwrap();

    let style = web_sys::window()
        .unwrap()
        .get_computed_style(&track)
        .unwrap()
        .unwrap();
    let gap = style.get_property_value("column-gap").unwrap();
    assert_eq!(parse_px(&gap), Some(24.0));
    track.remove();
}

#[wasm_bindgen_test]
fn local_storage_theme_round_trip() {
    let mut store = LocalStorageStore;
    store.set("theme", "light").unwrap();

    let mut controller = ThemeController::load(store, false);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(
        LocalStorageStore.get("theme").as_deref(),
        Some(Theme::Dark.as_str())
    );

    let reloaded = ThemeController::load(LocalStorageStore, false);
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[wasm_bindgen_test]
fn query_all_collects_matching_elements() {
    let document = dom::window_document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(r#"<img data-src="a.jpg"><img src="b.jpg"><img data-src="c.jpg">"#);
    document.body().unwrap().append_child(&root).unwrap();

    let lazy = dom::query_all_in(&root, "img[data-src]");
    assert_eq!(lazy.len(), 2);
    root.remove();
}

const PIXEL_GIF: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

const LIGHTBOX_HTML: &str = r#"<div id="lightbox" aria-hidden="true">
  <button id="lightbox-close">x</button>
  <img id="lightbox-img" alt="">
  <p id="lightbox-title"></p>
</div>"#;

fn mount(html: &str) -> web_sys::Element {
    let document = dom::window_document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn body_overflow() -> String {
    let body = dom::window_document().unwrap().body().unwrap();
    body.style().get_property_value("overflow").unwrap()
}

fn image() -> LightboxImage {
    LightboxImage {
        src: PIXEL_GIF.into(),
        alt: "Project one".into(),
        title: "Project One".into(),
    }
}

#[wasm_bindgen_test]
fn lightbox_focuses_close_and_cleans_up_on_backdrop_click() {
    let document = dom::window_document().unwrap();
    let root = mount(LIGHTBOX_HTML);
    let state = Rc::new(RefCell::new(Lightbox::new()));
    lightbox::wire(&document, state.clone());

    lightbox::open(&document, &state, image());
    assert!(state.borrow().is_open());
    let modal = document
        .get_element_by_id("lightbox")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert!(modal.class_list().contains("active"));
    assert_eq!(body_overflow(), "hidden");
    assert_eq!(
        document.active_element().map(|el| el.id()).as_deref(),
        Some("lightbox-close")
    );
    let title = document.get_element_by_id("lightbox-title").unwrap();
    assert_eq!(title.text_content().as_deref(), Some("Project One"));

    // click lands on the backdrop itself
    modal.click();
    assert!(!state.borrow().is_open());
    assert!(!modal.class_list().contains("active"));
    let img = document.get_element_by_id("lightbox-img").unwrap();
    assert!(!img.has_attribute("src"));
    assert_eq!(body_overflow(), "");
    root.remove();
}

#[wasm_bindgen_test]
fn missing_lightbox_leaves_page_scrollable() {
    let document = dom::window_document().unwrap();
    assert!(document.get_element_by_id("lightbox").is_none());
    let state = Rc::new(RefCell::new(Lightbox::new()));

    lightbox::open(&document, &state, image());
    assert!(!state.borrow().is_open());
    assert_ne!(body_overflow(), "hidden");
}

#[wasm_bindgen_test]
async fn carousel_doubles_strip_after_images_settle() {
    let document = dom::window_document().unwrap();
    let lightbox_root = mount(LIGHTBOX_HTML);
    let item = |title: &str, img: &str| {
        format!(
            r#"<div class="carousel-item" data-title="{}" style="flex: 0 0 100px; width: 100px; height: 50px">{}</div>"#,
            title, img
        )
    };
    let html = format!(
        r#"<div id="carousel"><div class="carousel-track" style="display: flex; column-gap: 10px">{}{}{}</div></div>"#,
        item("One", &format!(r#"<img src="{}" alt="one" width="100" height="50">"#, PIXEL_GIF)),
        item("Two", &format!(r#"<img src="{}" alt="two" width="100" height="50">"#, PIXEL_GIF)),
        // broken and lazily declared: still counts as settled
        item("Three", r#"<img data-src="nonexistent.jpg" alt="three" width="100" height="50">"#),
    );
    let root = mount(&html);
    let state = Rc::new(RefCell::new(Lightbox::new()));
    carousel::init(&document, state.clone()).unwrap();

    let track = document
        .query_selector(".carousel-track")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let mut items = Vec::new();
    for _ in 0..100 {
        items = dom::query_all_in(&track, ".carousel-item");
        if items.len() == 6 {
            break;
        }
        sleep(50).await;
    }
    assert_eq!(items.len(), 6, "strip should hold every item twice");
    let hidden = items
        .iter()
        .filter(|el| el.get_attribute("aria-hidden").as_deref() == Some("true"))
        .count();
    assert_eq!(hidden, 3);
    assert!(items[..3].iter().all(|el| !el.has_attribute("aria-hidden")));

    let style = track.style();
    assert_eq!(style.get_property_value("animation-name").unwrap(), "none");
    // three items of 100px, each followed by a 10px gap, twice
    assert_eq!(style.get_property_value("width").unwrap(), "660px");

    // clicks on a clone open the lightbox with the original's title
    let clone_img = items[3]
        .query_selector("img")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    clone_img.click();
    assert!(state.borrow().is_open());
    let title = document.get_element_by_id("lightbox-title").unwrap();
    assert_eq!(title.text_content().as_deref(), Some("One"));

    lightbox::hide(&document);
    root.remove();
    lightbox_root.remove();
}
