//! WASM utilities for browser interop
//!
//! # Scoped Browser Resources
//!
//! The viewer borrows two pieces of page-global state while it is open: the
//! body's scroll behaviour and a document-level `keydown` listener. Both are
//! modelled as guards that undo themselves in `Drop`, so the browser state
//! is tied to Rust ownership instead of matched manual calls:
//!
//! ```ignore
//! let lock = ScrollLock::acquire();          // body stops scrolling
//! let keys = DocumentKeyListener::new(document, |key| { /* ... */ });
//!
//! drop(keys);                                // listener removed
//! drop(lock);                                // previous overflow restored
//! ```
//!
//! A JS `Closure` has to outlive the listener it backs. Keeping it inside the
//! guard (rather than calling `Closure::forget()`) means it is freed exactly
//! when the listener is removed.

use wasm_bindgen_x::prelude::*;

/// Suppresses page scrolling by setting `overflow: hidden` on `<body>`.
///
/// The inline value found at acquisition is put back on drop.
pub struct ScrollLock {
    body: web_sys_x::HtmlElement,
    previous: String,
}

impl ScrollLock {
    /// `None` when there is no document body (or styles can't be written).
    pub fn acquire() -> Option<Self> {
        let body = web_sys_x::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;

        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        if self.previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &self.previous);
        }
    }
}

/// A document `keydown` listener that removes itself when dropped.
///
/// The callback receives the event's `key` value (`"Escape"`, `"ArrowLeft"`, ...).
pub struct DocumentKeyListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentKeyListener {
    pub fn new(document: web_sys_x::Document, mut on_key: impl FnMut(String) + 'static) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(move |event: wasm_bindgen_x::JsValue| {
                let key = js_sys_x::Reflect::get(&event, &"key".into())
                    .ok()
                    .and_then(|k| k.as_string());
                if let Some(key) = key {
                    on_key(key);
                }
            }));

        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok();

        Self { document, callback }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}
