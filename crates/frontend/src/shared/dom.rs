//! Thin helpers over `web_sys` for the elements the site layer touches.
//!
//! Lookups return `Option` so initializers can quietly skip markup that a
//! fragment does not contain.

use contracts::viewport::{self, Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Region whose HTML is replaced on every tab load
pub const CONTENT_CONTAINER_ID: &str = "mainContentContainer";
pub const STICKY_HEADER_SELECTOR: &str = ".sticky-header";
pub const VISIBLE_CLASS: &str = "visible";

const CTA_SELECTOR: &str = ".hero-cta-button[data-tab-target]";

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn content_container() -> Option<Element> {
    element_by_id(CONTENT_CONTAINER_ID)
}

/// Element with `id` if it lives inside `root`
pub fn find_within(root: &Element, id: &str) -> Option<Element> {
    let element = element_by_id(id)?;
    root.contains(Some(&*element)).then_some(element)
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Current height of the sticky header, 0 when it is not rendered
pub fn sticky_header_height() -> i32 {
    document()
        .and_then(|d| d.query_selector(STICKY_HEADER_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height())
        .unwrap_or(0)
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        top: rect.top(),
        bottom: rect.bottom(),
        left: rect.left(),
        right: rect.right(),
    }
}

pub fn current_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    Some(Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

pub fn is_element_in_viewport(element: &Element) -> bool {
    current_viewport().is_some_and(|vp| viewport::is_in_viewport(client_rect(element), vp))
}

pub fn page_y_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

fn scroll_options(top: f64, smooth: bool) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    options
}

pub fn scroll_window_to(top: f64, smooth: bool) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_scroll_to_options(&scroll_options(top, smooth));
    }
}

pub fn smooth_scroll_element(element: &Element, top: f64) {
    element.scroll_to_with_scroll_to_options(&scroll_options(top, true));
}

/// Smooth-scroll the page so the element clears the sticky header
pub fn scroll_to_element(id: &str, header_height: i32) {
    let Some(element) = element_by_id(id) else {
        return;
    };
    let top = viewport::scroll_target(client_rect(&element).top, page_y_offset(), header_height);
    scroll_window_to(top, true);
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let _ = body
        .style()
        .set_property("overflow", if locked { "hidden" } else { "" });
}

/// Replace the container's content with a single error paragraph
pub fn render_error(container: &Element, message: &str) {
    container.set_inner_html("");
    let Some(paragraph) = document().and_then(|d| d.create_element("p").ok()) else {
        return;
    };
    paragraph.set_class_name("text-red-500 text-center");
    paragraph.set_text_content(Some(message));
    let _ = container.append_child(&paragraph);
}

/// Tab requested by a click inside a hero call-to-action button
pub fn cta_target(ev: &Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(CTA_SELECTOR).ok().flatten()?;
    button.get_attribute("data-tab-target")
}

/// Section id referenced by an in-page `href`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#usage"), Some("usage"));
        assert_eq!(anchor_target("#"), Some(""));
        assert_eq!(anchor_target("https://example.com/#usage"), None);
        assert_eq!(anchor_target(""), None);
    }
}
