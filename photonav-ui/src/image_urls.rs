//! Image resolver shared through Dioxus context

use dioxus::prelude::*;
use photonav_common::{ImageRef, ImageRequest, ImageUrlResolver};
use std::rc::Rc;

/// Context handle for the site's [`ImageUrlResolver`].
///
/// Provide once near the root with `use_context_provider`, read with
/// [`use_image_urls`].
#[derive(Clone)]
pub struct ImageUrls(Rc<dyn ImageUrlResolver>);

impl ImageUrls {
    pub fn new(resolver: impl ImageUrlResolver + 'static) -> Self {
        Self(Rc::new(resolver))
    }

    /// Always returns something renderable: failures become the placeholder.
    pub fn url(&self, image: &ImageRef, request: &ImageRequest) -> String {
        self.0.resolve_or_placeholder(image, request)
    }
}

pub fn use_image_urls() -> ImageUrls {
    use_context::<ImageUrls>()
}
