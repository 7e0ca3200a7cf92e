use crate::api;
use dioxus::prelude::*;
use photonav_common::SiteConfig;
use photonav_ui::{ErrorDisplay, GalleryView, LoadingSpinner};

#[component]
pub fn Gallery() -> Element {
    let config = use_context::<SiteConfig>();
    let data = use_resource(move || {
        let url = config.photos_url.clone();
        async move { api::fetch_gallery(&url).await }
    });
    let read = data.read();

    let result = match &*read {
        Some(Ok(photos)) => Ok(photos.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                LoadingSpinner { message: "Loading gallery..." }
            };
        }
    };
    drop(read);

    rsx! {
        div { class: "w-full text-center px-4 mb-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "Photo Gallery" }
            p { class: "text-lg text-gray-600 max-w-2xl mx-auto",
                "Components, job sites and finished projects from our team."
            }
        }
        match result {
            Ok(photos) => rsx! {
                GalleryView { photos }
            },
            Err(e) => rsx! {
                ErrorDisplay { message: format!("Failed to load gallery: {e}") }
            },
        }
    }
}
