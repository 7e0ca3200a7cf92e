//! Gallery view components

pub mod category_filter;
pub mod gallery;
pub mod helpers;
pub mod icons;
pub mod photo_grid;
pub mod photo_viewer;
pub mod product_gallery;

pub use category_filter::CategoryFilterBar;
pub use gallery::GalleryView;
pub use helpers::{EmptyGallery, ErrorDisplay, LoadingSpinner};
pub use icons::{ChevronLeftIcon, ChevronRightIcon, ImageIcon, XIcon};
pub use photo_grid::PhotoGrid;
pub use photo_viewer::PhotoViewer;
pub use product_gallery::ProductGalleryView;
