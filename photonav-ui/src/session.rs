//! Browser resources held while the full-screen viewer is open

use crate::wasm_utils::{DocumentKeyListener, ScrollLock};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use photonav_common::{PhotoNavigator, ViewerCommand};

/// Navigator used by the gallery views
pub type GalleryNavigator = PhotoNavigator<ViewerSession>;

/// Scroll lock plus keyboard bindings, acquired when the viewer opens.
///
/// Owned by the navigator's `Open` state, so closing the viewer, a filter
/// change that hides the photo, or unmounting the gallery all release it.
pub struct ViewerSession {
    _keys: Option<DocumentKeyListener>,
    _scroll: Option<ScrollLock>,
}

impl ViewerSession {
    pub fn acquire(navigator: Signal<GalleryNavigator>) -> Self {
        // The keydown callback runs from wasm-bindgen outside the Dioxus
        // runtime, so carry the runtime in with it.
        let runtime = Runtime::current();

        let keys = web_sys_x::window()
            .and_then(|w| w.document())
            .map(|document| {
                DocumentKeyListener::new(document, move |key: String| {
                    let Some(command) = ViewerCommand::from_key(&key) else {
                        return;
                    };
                    let runtime = runtime.clone();
                    let mut navigator = navigator;
                    // Applied on the next tick: a Close drops this listener,
                    // which must not happen while its closure is running.
                    wasm_bindgen_futures_x::spawn_local(async move {
                        let _guard = RuntimeGuard::new(runtime);
                        if let Ok(mut nav) = navigator.try_write() {
                            nav.apply(command);
                        }
                    });
                })
            });

        if keys.is_none() {
            tracing::warn!("No document available, viewer keyboard bindings disabled");
        }

        Self {
            _keys: keys,
            _scroll: ScrollLock::acquire(),
        }
    }
}
