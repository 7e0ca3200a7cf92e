//! Image URL resolution
//!
//! Views never touch image bytes. They ask an [`ImageUrlResolver`] for a
//! URL at a given size and fall back to [`PLACEHOLDER_IMAGE`] when nothing
//! usable comes back.

use thiserror::Error;
use tracing::warn;

use crate::{CdnConfig, ImageRef};

/// Shown in place of any image that cannot be resolved
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTIwIiBoZWlnaHQ9IjYwIiB2aWV3Qm94PSIwIDAgMTIwIDYwIiBmaWxsPSJub25lIiB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciPgo8cmVjdCB3aWR0aD0iMTIwIiBoZWlnaHQ9IjYwIiBmaWxsPSIjRjNGNEY2Ii8+CjxwYXRoIGQ9Ik00MCAyNEg4MFYzNkg0MFYyNFoiIGZpbGw9IiNEMUQ1REIiLz4KPHN2Zz4K";

const DEFAULT_QUALITY: u8 = 75;

/// Requested rendition of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    pub width: u32,
    pub height: Option<u32>,
    /// 1-100
    pub quality: u8,
}

impl ImageRequest {
    pub const GRID_THUMBNAIL: Self = Self::sized(400, 400, 85);
    pub const PRODUCT_MAIN: Self = Self::sized(600, 400, 85);
    pub const PRODUCT_THUMBNAIL: Self = Self::sized(200, 150, 85);
    pub const VIEWER: Self = Self {
        width: 1600,
        height: None,
        quality: 90,
    };

    pub const fn width(width: u32) -> Self {
        Self {
            width,
            height: None,
            quality: DEFAULT_QUALITY,
        }
    }

    pub const fn sized(width: u32, height: u32, quality: u8) -> Self {
        Self {
            width,
            height: Some(height),
            quality,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }
}

/// Turns an opaque image reference into a fetchable URL.
pub trait ImageUrlResolver {
    /// `None` (or an empty string) when the reference can't be resolved.
    fn resolve(&self, image: &ImageRef, request: &ImageRequest) -> Option<String>;

    /// Resolve, substituting the placeholder for anything unusable.
    fn resolve_or_placeholder(&self, image: &ImageRef, request: &ImageRequest) -> String {
        match self.resolve(image, request) {
            Some(url) if is_fetchable(&url) => url,
            Some(url) => {
                warn!("Resolver returned unusable URL {url:?} for {}", image.as_str());
                PLACEHOLDER_IMAGE.to_string()
            }
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

fn is_fetchable(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty()
        && (url.starts_with("https://")
            || url.starts_with("http://")
            || url.starts_with('/')
            || url.starts_with("data:"))
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("Empty image reference")]
    Empty,
    #[error("Malformed image reference {0:?}")]
    Malformed(String),
}

/// A parsed CDN asset reference: `image-<id>-<W>x<H>-<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef<'a> {
    pub id: &'a str,
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}

impl<'a> AssetRef<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, ImageRefError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ImageRefError::Empty);
        }
        let malformed = || ImageRefError::Malformed(raw.to_string());

        let body = raw.strip_prefix("image-").ok_or_else(malformed)?;
        let (rest, format) = body.rsplit_once('-').ok_or_else(malformed)?;
        let (id, dimensions) = rest.rsplit_once('-').ok_or_else(malformed)?;
        let (width, height) = dimensions.split_once('x').ok_or_else(malformed)?;

        let width: u32 = width.parse().map_err(|_| malformed())?;
        let height: u32 = height.parse().map_err(|_| malformed())?;
        let valid_id = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric());
        let valid_format = !format.is_empty() && format.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid_id || !valid_format || width == 0 || height == 0 {
            return Err(malformed());
        }

        Ok(Self {
            id,
            width,
            height,
            format,
        })
    }
}

/// Resolver for the content store's image CDN.
///
/// Absolute URLs and site-relative paths pass through untouched. Asset
/// references become sized CDN URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnImageResolver {
    config: CdnConfig,
}

impl CdnImageResolver {
    pub fn new(config: CdnConfig) -> Self {
        Self { config }
    }

    pub fn url_for(&self, image: &ImageRef, request: &ImageRequest) -> Result<String, ImageRefError> {
        let raw = image.as_str().trim();
        if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/') {
            return Ok(raw.to_string());
        }

        let asset = AssetRef::parse(raw)?;
        let mut url = format!(
            "{}/images/{}/{}/{}-{}x{}.{}?w={}",
            self.config.base_url,
            self.config.project_id,
            self.config.dataset,
            asset.id,
            asset.width,
            asset.height,
            asset.format,
            request.width,
        );
        if let Some(height) = request.height {
            url.push_str(&format!("&h={height}"));
        }
        url.push_str(&format!("&q={}&auto=format", request.quality));
        Ok(url)
    }
}

impl ImageUrlResolver for CdnImageResolver {
    fn resolve(&self, image: &ImageRef, request: &ImageRequest) -> Option<String> {
        match self.url_for(image, request) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Invalid image source: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> CdnImageResolver {
        CdnImageResolver::new(
            CdnConfig::new("abc123", "production", "https://cdn.sanity.io").unwrap(),
        )
    }

    struct Fixed(Option<&'static str>);

    impl ImageUrlResolver for Fixed {
        fn resolve(&self, _: &ImageRef, _: &ImageRequest) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn test_asset_ref_becomes_sized_cdn_url() {
        let url = resolver()
            .url_for(
                &ImageRef::new("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg"),
                &ImageRequest::GRID_THUMBNAIL,
            )
            .unwrap();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=400&h=400&q=85&auto=format"
        );
    }

    #[test]
    fn test_width_only_request_uses_default_quality() {
        let url = resolver()
            .url_for(
                &ImageRef::new("image-abc-10x20-png"),
                &ImageRequest::width(800),
            )
            .unwrap();
        assert!(url.ends_with("abc-10x20.png?w=800&q=75&auto=format"), "{url}");
    }

    #[test]
    fn test_passthrough_urls() {
        let r = resolver();
        for raw in [
            "https://example.com/a.jpg",
            "http://example.com/a.jpg",
            "/images/hero.jpg",
        ] {
            assert_eq!(
                r.url_for(&ImageRef::new(raw), &ImageRequest::VIEWER).unwrap(),
                raw
            );
        }
    }

    #[test]
    fn test_malformed_refs() {
        for raw in [
            "file-abc-pdf",
            "image-abc-jpg",
            "image-abc-10xten-jpg",
            "image--10x10-jpg",
            "image-abc-0x10-jpg",
            "image-a.b-10x10-jpg",
        ] {
            assert!(
                matches!(AssetRef::parse(raw), Err(ImageRefError::Malformed(_))),
                "{raw}"
            );
        }
        assert_eq!(AssetRef::parse("  "), Err(ImageRefError::Empty));
    }

    #[test]
    fn test_placeholder_on_failure() {
        let r = resolver();
        assert_eq!(
            r.resolve_or_placeholder(&ImageRef::new("garbage"), &ImageRequest::VIEWER),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            Fixed(Some("")).resolve_or_placeholder(&ImageRef::new("x"), &ImageRequest::VIEWER),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            Fixed(Some("javascript:alert(1)"))
                .resolve_or_placeholder(&ImageRef::new("x"), &ImageRequest::VIEWER),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            Fixed(None).resolve_or_placeholder(&ImageRef::new("x"), &ImageRequest::VIEWER),
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            Fixed(Some("/a.jpg")).resolve_or_placeholder(&ImageRef::new("x"), &ImageRequest::VIEWER),
            "/a.jpg"
        );
    }

    #[test]
    fn test_quality_clamped() {
        assert_eq!(ImageRequest::width(10).with_quality(0).quality, 1);
        assert_eq!(ImageRequest::width(10).with_quality(200).quality, 100);
    }
}
