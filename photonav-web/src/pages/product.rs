use crate::api;
use crate::Route;
use dioxus::prelude::*;
use photonav_common::SiteConfig;
use photonav_ui::{ErrorDisplay, LoadingSpinner, ProductGalleryView};

#[component]
pub fn ProductDetail(slug: String) -> Element {
    let config = use_context::<SiteConfig>();
    let url = config.product_url(&slug);
    let data = use_resource(move || {
        let url = url.clone();
        async move { api::fetch_product(&url).await }
    });
    let read = data.read();

    let result = match &*read {
        Some(Ok(product)) => Ok(product.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                LoadingSpinner {}
            };
        }
    };
    drop(read);

    match result {
        Ok(product) => rsx! {
            div { class: "max-w-6xl mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-12",
                ProductGalleryView { key: "{slug}", product: product.clone() }
                div {
                    Link { to: Route::Gallery {}, class: "text-sm text-blue-600 hover:text-blue-700", "← Back to gallery" }
                    h1 { class: "text-3xl font-bold text-gray-900 mt-4", {product.name.clone()} }
                }
            }
        },
        Err(e) => rsx! {
            ErrorDisplay { message: format!("Failed to load product: {e}") }
        },
    }
}
