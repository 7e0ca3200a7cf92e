//! Full-screen photo viewer
//!
//! Renders whatever the navigator's viewer currently shows and nothing while
//! it is closed. Keyboard bindings live in the navigator's session (see
//! [`ViewerSession`](crate::session::ViewerSession)); this component only
//! wires up the on-screen controls.

use crate::components::helpers::LoadingSpinner;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::image_urls::use_image_urls;
use crate::session::GalleryNavigator;
use dioxus::prelude::*;
use photonav_common::{ImageRequest, LoadedImage};

#[component]
pub fn PhotoViewer(navigator: Signal<GalleryNavigator>) -> Element {
    let mut navigator = navigator;
    let urls = use_image_urls();
    let mut loaded = use_signal(LoadedImage::default);

    let nav = navigator.read();
    let (Some(snapshot), Some(ticket)) = (nav.snapshot(), nav.ticket()) else {
        return rsx! {};
    };
    let src = urls.url(&snapshot.photo.image, &ImageRequest::VIEWER);
    let alt = snapshot.photo.alt_text_or("Gallery photo").to_string();
    let caption = snapshot.photo.caption.clone();
    let index = snapshot.index;
    let total = snapshot.total;
    drop(nav);

    let is_loaded = loaded.read().is_showing(&src);
    let can_step = total > 1;
    let img_class = if is_loaded {
        "max-w-full max-h-[80vh] object-contain rounded-lg shadow-2xl transition-opacity duration-300"
    } else {
        "max-w-full max-h-[80vh] object-contain rounded-lg shadow-2xl transition-opacity duration-300 opacity-0"
    };

    // A load that finishes after the viewer moved on or closed is ignored
    let loaded_src = src.clone();
    let mut mark_loaded = move || {
        loaded.write().record(&*navigator.peek(), ticket, &loaded_src);
    };
    let mut mark_failed = mark_loaded.clone();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/90 flex items-center justify-center z-50",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |_| {
                navigator.write().close();
            },

            // Close button
            button {
                class: "absolute top-4 right-4 text-gray-400 hover:text-white transition-colors z-10",
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    navigator.write().close();
                },
                XIcon { class: "w-6 h-6" }
            }

            // Photo counter
            if can_step {
                div { class: "absolute top-4 left-4 text-gray-400 text-sm",
                    {format!("{} / {}", index + 1, total)}
                }
            }

            // Previous button
            if can_step {
                button {
                    class: "absolute left-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                    "aria-label": "Previous photo",
                    onclick: move |e| {
                        e.stop_propagation();
                        navigator.write().prev();
                    },
                    ChevronLeftIcon {
                        class: "w-8 h-8 text-gray-300 -translate-x-0.5",
                        stroke_width: "1.5",
                    }
                }
            }

            // Next button
            if can_step {
                button {
                    class: "absolute right-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                    "aria-label": "Next photo",
                    onclick: move |e| {
                        e.stop_propagation();
                        navigator.write().next();
                    },
                    ChevronRightIcon {
                        class: "w-8 h-8 text-gray-300 translate-x-0.5",
                        stroke_width: "1.5",
                    }
                }
            }

            // Photo and caption
            div {
                class: "relative flex flex-col items-center max-w-[90vw] max-h-[90vh]",
                onclick: move |e| e.stop_propagation(),
                if !is_loaded {
                    div { class: "absolute inset-0 flex items-center justify-center",
                        LoadingSpinner { message: "Loading photo..." }
                    }
                }
                img {
                    src: "{src}",
                    alt: "{alt}",
                    class: "{img_class}",
                    onload: move |_| mark_loaded(),
                    onerror: move |_| mark_failed(),
                }
                if let Some(caption) = caption {
                    div { class: "mt-4 text-gray-300 text-sm", {caption} }
                }
            }
        }
    }
}
