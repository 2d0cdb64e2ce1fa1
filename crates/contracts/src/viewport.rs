//! Viewport geometry: membership tests, scroll targets and observer margins.
//!
//! Everything here works on plain numbers so the DOM layer only has to
//! measure and apply.

/// Gap kept between the sticky header and a scrolled-to element
pub const SCROLL_GAP_PX: i32 = 20;

/// Extra space below the header before a page section counts as visible
pub const PAGE_TRIGGER_GAP_PX: i32 = 24;

/// Gap kept above a section scrolled to inside the API pane
pub const PANE_SCROLL_GAP_PX: f64 = 10.0;

/// Root margin of the API pane observer
pub const PANE_ROOT_MARGIN: &str = "-20px 0px -60% 0px";

/// Intersection ratio at which observers fire
pub const OBSERVER_THRESHOLD: f64 = 0.01;

/// Page offset past which the scroll-to-top button appears
pub const SCROLL_TOP_REVEAL_PX: f64 = 100.0;

/// Client rectangle of an element, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// True when any part of `rect` lies inside the viewport
pub fn is_in_viewport(rect: Rect, viewport: Viewport) -> bool {
    rect.top < viewport.height && rect.bottom >= 0.0 && rect.left < viewport.width && rect.right >= 0.0
}

/// Absolute page offset that puts an element just below the sticky header
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_height: i32) -> f64 {
    let offset = f64::from(header_height + SCROLL_GAP_PX);
    element_top + page_y_offset - offset
}

/// Pane `scrollTop` that puts `target_top` just below the pane's top edge
pub fn pane_scroll_target(pane_scroll_top: f64, pane_top: f64, target_top: f64) -> f64 {
    pane_scroll_top + (target_top - pane_top) - PANE_SCROLL_GAP_PX
}

/// Root margin of the page observer; the top edge clears the sticky header
pub fn page_root_margin(header_height: i32) -> String {
    format!("-{}px 0px -40% 0px", header_height + PAGE_TRIGGER_GAP_PX)
}

/// New page root margin after the header was re-measured, `None` when the
/// height did not change and live trackers can stay as they are
pub fn remeasured_root_margin(previous_height: i32, current_height: i32) -> Option<String> {
    (previous_height != current_height).then(|| page_root_margin(current_height))
}

pub fn scroll_top_button_visible(page_y_offset: f64) -> bool {
    page_y_offset > SCROLL_TOP_REVEAL_PX
}
