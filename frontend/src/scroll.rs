//! Scroll geometry shared by the header, the back-to-top button and in-page
//! anchor links. Pure functions over numbers; the DOM side lives in
//! `browser`.

use crate::config;

/// Classes the page toggles as the visitor scrolls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollEffects {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollEffects {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            header_scrolled: scroll_y > config::HEADER_SCROLLED_AFTER,
            back_to_top_visible: scroll_y > config::BACK_TO_TOP_AFTER,
        }
    }
}

/// Vertical extent of a `section[id]` in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose nav link should be highlighted. Later sections win when
/// bounds overlap. `None` means nothing matched and the caller keeps its
/// current highlight.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + config::ACTIVE_SECTION_PROBE;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// `#about` -> `about`. A bare `#` and non-fragment hrefs give `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn anchor_scroll_top(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - config::ANCHOR_HEADER_OFFSET
}
