use crate::constants::{LAZY_IMAGE_SELECTOR, LAZY_ROOT_MARGIN};
use crate::dom::{self, js_err};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Swap `data-src` into `src`. No-op for images already loaded.
pub fn load_image(img: &web::Element) {
    if let Some(src) = img.get_attribute("data-src") {
        _ = img.set_attribute("src", &src);
        _ = img.remove_attribute("data-src");
    }
}

fn observer_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    if !observer_supported(&window) {
        log::info!("[lazy] IntersectionObserver missing; loading {} images now", images.len());
        images.iter().for_each(load_image);
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                load_image(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(LAZY_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    on_intersect.forget();

    for img in &images {
        observer.observe(img);
    }
    log::info!("[lazy] observing {} images", images.len());
    Ok(())
}
