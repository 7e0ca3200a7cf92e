//! photonav-ui - Gallery components for the web front end
//!
//! Pure view components over a [`PhotoNavigator`](photonav_common::PhotoNavigator)
//! held in a Dioxus signal, plus the browser resources the full-screen
//! viewer holds while open.

pub mod components;
pub mod image_urls;
pub mod session;
pub mod wasm_utils;

pub use components::*;
pub use image_urls::{use_image_urls, ImageUrls};
pub use session::{GalleryNavigator, ViewerSession};
