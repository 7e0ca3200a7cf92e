//! Product image gallery: main image, thumbnail strip, full-screen viewer

use crate::components::gallery::{open_photo, use_navigator};
use crate::components::photo_viewer::PhotoViewer;
use crate::image_urls::use_image_urls;
use dioxus::prelude::*;
use photonav_common::{ImageRequest, Product};

/// Thumbnails shown under the main image
const THUMBNAIL_COUNT: usize = 3;

#[component]
pub fn ProductGalleryView(product: Product) -> Element {
    let navigator = use_navigator(product.photos.clone());
    let urls = use_image_urls();

    let photos = &product.photos;
    let Some(main) = photos.first() else {
        return rsx! {
            div { class: "h-96 w-full bg-gray-100 rounded-lg flex items-center justify-center",
                span { class: "text-gray-400", "No images available" }
            }
        };
    };

    let main_id = main.id.clone();
    let main_src = urls.url(&main.image, &ImageRequest::PRODUCT_MAIN);
    let main_alt = main.alt_text_or(&product.name).to_string();
    let overflow_id = photos.get(THUMBNAIL_COUNT + 1).map(|p| p.id.clone());
    let total = photos.len();

    rsx! {
        div { class: "space-y-4",
            // Main image
            div {
                class: "relative h-96 w-full bg-gray-100 rounded-lg overflow-hidden cursor-pointer group",
                onclick: move |_| open_photo(navigator, &main_id),
                img {
                    src: "{main_src}",
                    alt: "{main_alt}",
                    class: "w-full h-full object-cover transition-transform duration-300 group-hover:scale-105",
                }
                if product.featured {
                    div { class: "absolute top-4 left-4",
                        span { class: "bg-blue-600 text-white text-sm font-medium px-3 py-1 rounded-full",
                            "Featured Product"
                        }
                    }
                }
            }

            // Thumbnail grid
            if total > 1 {
                div { class: "grid grid-cols-3 gap-2",
                    for (i , photo) in photos.iter().enumerate().skip(1).take(THUMBNAIL_COUNT) {
                        {
                            let id = photo.id.clone();
                            let src = urls.url(&photo.image, &ImageRequest::PRODUCT_THUMBNAIL);
                            let fallback = format!("{} {}", product.name, i + 1);
                            let alt = photo.alt_text_or(&fallback).to_string();
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: "relative h-24 w-full bg-gray-100 rounded overflow-hidden cursor-pointer group",
                                    onclick: move |_| open_photo(navigator, &id),
                                    img {
                                        src: "{src}",
                                        alt: "{alt}",
                                        class: "w-full h-full object-cover transition-transform duration-300 group-hover:scale-110",
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Remaining photos are reachable from the viewer
            if let Some(id) = overflow_id {
                div { class: "text-center",
                    button {
                        class: "text-blue-600 hover:text-blue-700 text-sm font-medium",
                        onclick: move |_| open_photo(navigator, &id),
                        {format!("View all {total} photos →")}
                    }
                }
            }
        }

        PhotoViewer { navigator }
    }
}
