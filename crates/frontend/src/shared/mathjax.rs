//! Hook into MathJax when the page ships it.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// Typeset math notation inside `container`. No-op without `window.MathJax`.
pub fn typeset(container: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(mathjax) = Reflect::get(&window, &JsValue::from_str("MathJax")) else {
        return;
    };
    if mathjax.is_undefined() || mathjax.is_null() {
        return;
    }
    let Ok(typeset) = Reflect::get(&mathjax, &JsValue::from_str("typesetPromise")) else {
        return;
    };
    let Ok(typeset) = typeset.dyn_into::<Function>() else {
        return;
    };
    if let Err(err) = typeset.call1(&mathjax, &Array::of1(container)) {
        log::warn!("MathJax typesetting failed: {:?}", err);
    }
}
