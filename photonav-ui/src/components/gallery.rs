//! Gallery view: category filter, photo grid and full-screen viewer

use crate::components::category_filter::CategoryFilterBar;
use crate::components::helpers::EmptyGallery;
use crate::components::photo_grid::PhotoGrid;
use crate::components::photo_viewer::PhotoViewer;
use crate::session::{GalleryNavigator, ViewerSession};
use dioxus::prelude::*;
use photonav_common::{CategoryFilter, Photo};

/// Keep the navigator consistent on unmount: an open viewer gives back the
/// scroll lock and keyboard listener before the signal goes away.
pub(crate) fn use_navigator(photos: Vec<Photo>) -> Signal<GalleryNavigator> {
    let mut navigator = use_signal(move || GalleryNavigator::new(photos));
    use_drop(move || {
        if let Ok(mut nav) = navigator.try_write() {
            nav.close();
        }
    });
    navigator
}

/// Open `id` in the viewer, acquiring the session if it was closed.
pub(crate) fn open_photo(mut navigator: Signal<GalleryNavigator>, id: &str) {
    let handle = navigator;
    navigator
        .write()
        .open_with(id, move || ViewerSession::acquire(handle));
}

/// Full gallery page body.
///
/// `photos` is the page's photo list, fetched once; later prop changes are
/// not picked up.
#[component]
pub fn GalleryView(photos: Vec<Photo>) -> Element {
    let mut navigator = use_navigator(photos);

    let nav = navigator.read();
    let store = nav.store();
    let categories = store.categories();
    let selected = store.filter().clone();
    let filtered: Vec<Photo> = store.filtered().cloned().collect();
    let has_photos = !store.is_empty();
    drop(nav);

    if !has_photos {
        return rsx! {
            EmptyGallery {}
        };
    }

    rsx! {
        CategoryFilterBar {
            categories,
            selected,
            on_select: move |filter: CategoryFilter| {
                navigator.write().set_category(filter.as_str());
            },
        }

        if filtered.is_empty() {
            div { class: "text-center py-12 mb-16 text-gray-600",
                "No photos in this category yet."
            }
        } else {
            PhotoGrid {
                photos: filtered,
                on_open: move |id: String| open_photo(navigator, &id),
            }
        }

        PhotoViewer { navigator }
    }
}
