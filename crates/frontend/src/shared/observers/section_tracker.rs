//! Intersection observer bound to one scroll root.

use contracts::viewport::OBSERVER_THRESHOLD;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owns an `IntersectionObserver` and its callback.
///
/// Dropping the tracker disconnects the observer; the callback closure is
/// released together with it.
pub struct SectionTracker {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionTracker {
    /// Observe `targets` against `root` (`None` = the page viewport).
    pub fn observe<F>(
        root: Option<&Element>,
        root_margin: &str,
        targets: &[Element],
        mut on_batch: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionObserverEntry>) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            on_batch(entries);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        if let Some(root) = root {
            options.set_root(Some(root.unchecked_ref()));
        }
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
