use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll::{anchor_scroll_top, anchor_target, SectionBounds};

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scrolls to the element an in-page href points at. Unknown ids and
/// a bare `#` are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("No element for anchor {}", href);
        return;
    };

    let element_top = target.get_bounding_client_rect().top();
    let page_y_offset = window.page_y_offset().unwrap_or(0.0);
    smooth_scroll_to(anchor_scroll_top(element_top, page_y_offset));
}

/// Bounds of every `section[id]` on the page, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
        None => warn!("No window to show alert: {}", message),
    }
}
