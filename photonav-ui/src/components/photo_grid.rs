//! Photo grid - pure view, clicks report the photo id

use crate::image_urls::use_image_urls;
use dioxus::prelude::*;
use photonav_common::{ImageRequest, Photo};

/// Thumbnail grid over an already filtered photo list.
///
/// Each tile resolves its own URL; an unresolvable image renders the
/// placeholder without affecting the other tiles.
#[component]
pub fn PhotoGrid(photos: Vec<Photo>, on_open: EventHandler<String>) -> Element {
    let urls = use_image_urls();

    rsx! {
        div { class: "w-full px-2 sm:px-4 md:px-6 lg:px-8",
            div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 2xl:grid-cols-6 gap-2 sm:gap-4 mb-16",
                for photo in photos.iter() {
                    {
                        let id = photo.id.clone();
                        let src = urls.url(&photo.image, &ImageRequest::GRID_THUMBNAIL);
                        let alt = photo.alt_text_or("Gallery photo").to_string();
                        rsx! {
                            div {
                                key: "{id}",
                                class: "relative group cursor-pointer overflow-hidden rounded-lg shadow-md hover:shadow-lg transition-all duration-300",
                                "data-testid": "photo-tile",
                                onclick: move |_| on_open.call(id.clone()),
                                div { class: "relative h-64",
                                    img {
                                        src: "{src}",
                                        alt: "{alt}",
                                        loading: "lazy",
                                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
