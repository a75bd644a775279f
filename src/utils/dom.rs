//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, EventTarget, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::config::EXTERNAL_WINDOW_FEATURES;
use crate::utils::log;
use crate::utils::url::{UrlValidation, validate_external_url};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (with its '#' prefix, if any).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash, adding a history entry and firing `hashchange`.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Open an allow-listed external URL in a new browsing context.
///
/// Returns `false` when the URL was blocked or the popup failed to open.
pub fn open_external(url: &str) -> bool {
    let safe_url = match validate_external_url(url) {
        UrlValidation::Valid(safe_url) => safe_url,
        UrlValidation::Invalid(err) => {
            log::warn(&format!("Blocked external link: {}", err));
            return false;
        }
    };

    window()
        .and_then(|w| {
            w.open_with_url_and_target_and_features(&safe_url, "_blank", EXTERNAL_WINDOW_FEATURES)
                .ok()
        })
        .is_some()
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    if let Some(element) = document().and_then(|d| d.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Lock or unlock page scrolling (used while an overlay is open).
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

// =============================================================================
// Event Listeners
// =============================================================================

/// An event listener that is removed when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Attach `callback` to `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Attach to the document.
    pub fn on_document(
        event: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = document()?;
        Self::new(document.unchecked_ref(), event, callback)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_hash_round_trip() {
        set_hash("#/gallery");
        assert_eq!(get_hash(), "#/gallery");
        set_hash("#/");
        assert_eq!(get_hash(), "#/");
    }

    #[wasm_bindgen_test]
    fn test_open_external_blocks_unlisted_domain() {
        assert!(!open_external("https://example.com/"));
        assert!(!open_external("javascript:alert(1)"));
    }

    #[wasm_bindgen_test]
    fn test_listener_removed_on_drop() {
        use std::cell::Cell;
        use std::rc::Rc;

        let Some(doc) = document() else {
            return;
        };
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let listener = EventListener::on_document("vows-test", move |_| counter.set(counter.get() + 1));

        let event = web_sys::Event::new("vows-test").unwrap();
        doc.dispatch_event(&event).unwrap();
        drop(listener);
        doc.dispatch_event(&event).unwrap();

        assert_eq!(hits.get(), 1);
    }
}
