//! photonav-common - Gallery data and navigation state
//!
//! Pure data structures with no UI framework or I/O: the photo store and
//! its category filter, the full-screen viewer state machine, image URL
//! resolution, content-store decoding and site configuration.

pub mod category;
pub mod cms;
pub mod config;
pub mod image_url;
pub mod photo;
pub mod photo_store;
pub mod viewer;

pub use category::{category_display_name, CategoryFilter, ALL_CATEGORIES};
pub use cms::{parse_gallery, parse_product, CmsError, Product};
pub use config::{CdnConfig, ConfigError, SiteConfig};
pub use image_url::{
    AssetRef, CdnImageResolver, ImageRefError, ImageRequest, ImageUrlResolver, PLACEHOLDER_IMAGE,
};
pub use photo::{sort_for_display, ImageRef, Photo};
pub use photo_store::PhotoStore;
pub use viewer::{
    LoadedImage, PhotoNavigator, ViewTicket, ViewerCommand, ViewerController, ViewerSnapshot,
    ViewerState,
};
