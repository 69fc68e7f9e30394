use crate::constants::{NAVBAR_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID};
use crate::dom;
use folio_core::{anchor_target, navbar_scrolled, ScrollSpy, Section};
use wasm_bindgen::JsCast;
use web_sys as web;

fn page_sections(document: &web::Document) -> Vec<Section> {
    dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| Section {
            id: el.id(),
            top: el.offset_top() as f64,
        })
        .collect()
}

fn set_menu_open(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(NAV_MENU_ID) {
        _ = menu.class_list().toggle_with_force("active", open);
    }
    if let Some(toggle) = document.get_element_by_id(NAV_TOGGLE_ID) {
        _ = toggle.class_list().toggle_with_force("active", open);
        _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

fn highlight(links: &[web::Element], active: Option<&str>) {
    for link in links {
        let is_active = link
            .get_attribute("href")
            .as_deref()
            .and_then(anchor_target)
            .is_some_and(|id| Some(id) == active);
        _ = link.class_list().toggle_with_force("active", is_active);
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let links = dom::query_all(document, NAV_LINK_SELECTOR);

    // mobile menu
    let doc_toggle = document.clone();
    dom::add_click_listener(document, NAV_TOGGLE_ID, move || {
        let open = doc_toggle
            .get_element_by_id(NAV_MENU_ID)
            .map(|m| !m.class_list().contains("active"))
            .unwrap_or(false);
        set_menu_open(&doc_toggle, open);
    });

    for link in &links {
        let Some(target_id) = link
            .get_attribute("href")
            .as_deref()
            .and_then(anchor_target)
            .map(str::to_owned)
        else {
            continue;
        };
        let doc = document.clone();
        dom::on_event(link, "click", move |ev| {
            let Some(target) = doc.get_element_by_id(&target_id) else {
                return;
            };
            ev.prevent_default();
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            set_menu_open(&doc, false);
        });
    }

    let spy = ScrollSpy::new(page_sections(document));
    let navbar = document.get_element_by_id(NAVBAR_ID);
    let win = window.clone();
    let on_scroll = move || {
        let y = win.scroll_y().unwrap_or(0.0);
        if let Some(bar) = &navbar {
            _ = bar.class_list().toggle_with_force("scrolled", navbar_scrolled(y));
        }
        highlight(&links, spy.active(y));
    };
    on_scroll();
    dom::on_event(&window, "scroll", move |_| on_scroll());

    log::info!("[nav] ready");
    Ok(())
}
