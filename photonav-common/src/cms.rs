//! Decoding of content-store documents into photos
//!
//! Gallery and product documents arrive as JSON query results. Image fields
//! reference their asset either by `_ref` (unexpanded) or by an expanded
//! asset object with `_id` and `url`.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::{sort_for_display, ImageRef, Photo};

#[derive(Error, Debug)]
pub enum CmsError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Default)]
struct AssetDocument {
    #[serde(rename = "_id")]
    id: Option<String>,
    #[serde(rename = "_ref")]
    reference: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize, Default)]
struct ImageDocument {
    #[serde(rename = "_key")]
    key: Option<String>,
    asset: Option<AssetDocument>,
    alt: Option<String>,
    caption: Option<String>,
}

impl ImageDocument {
    /// Prefer the asset id (sized URLs), fall back to the raw asset URL.
    fn image_ref(&self) -> Option<ImageRef> {
        let asset = self.asset.as_ref()?;
        asset
            .id
            .as_deref()
            .or(asset.reference.as_deref())
            .or(asset.url.as_deref())
            .filter(|r| !r.trim().is_empty())
            .map(ImageRef::new)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalleryDocument {
    #[serde(rename = "_id")]
    id: String,
    caption: Option<String>,
    category: Option<String>,
    #[serde(default)]
    featured: Option<bool>,
    display_order: Option<i64>,
    image: Option<ImageDocument>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    featured: Option<bool>,
    #[serde(default)]
    gallery_images: Option<Vec<ImageDocument>>,
}

/// A product and its image set
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub featured: bool,
    pub photos: Vec<Photo>,
}

/// Decode a gallery query result into display-ordered photos.
pub fn parse_gallery(json: &str) -> Result<Vec<Photo>, CmsError> {
    let documents: Vec<GalleryDocument> = serde_json::from_str(json)?;

    let mut photos: Vec<Photo> = documents
        .into_iter()
        .filter_map(|doc| {
            let image = doc.image.unwrap_or_default();
            let Some(image_ref) = image.image_ref() else {
                warn!("Skipping gallery document {} without an image", doc.id);
                return None;
            };
            let mut photo = Photo::new(doc.id, image_ref)
                .with_featured(doc.featured.unwrap_or(false))
                .with_display_order(doc.display_order.unwrap_or(0));
            photo.alt = image.alt;
            photo.caption = doc.caption.or(image.caption);
            if let Some(category) = doc.category {
                photo = photo.with_category(category);
            }
            Some(photo)
        })
        .collect();

    sort_for_display(&mut photos);
    Ok(photos)
}

/// Decode a single product document. Image order is kept as authored.
pub fn parse_product(json: &str) -> Result<Product, CmsError> {
    let doc: ProductDocument = serde_json::from_str(json)?;
    let featured = doc.featured.unwrap_or(false);

    let photos = doc
        .gallery_images
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(i, image)| {
            let Some(image_ref) = image.image_ref() else {
                warn!("Skipping image {i} of product {} without an asset", doc.id);
                return None;
            };
            let id = image.key.clone().unwrap_or_else(|| format!("{}-{i}", doc.id));
            let mut photo = Photo::new(id, image_ref)
                .with_featured(featured)
                .with_display_order(i as i64);
            photo.alt = image.alt;
            photo.caption = image.caption;
            Some(photo)
        })
        .collect();

    Ok(Product {
        id: doc.id,
        name: doc.name,
        featured,
        photos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY_JSON: &str = r#"[
        {
            "_id": "g1",
            "caption": "Truss delivery",
            "category": "components",
            "displayOrder": 2,
            "image": {
                "alt": "Roof trusses on a flatbed",
                "asset": {"_id": "image-aaa-800x600-jpg", "url": "https://cdn.example/aaa.jpg"}
            }
        },
        {
            "_id": "g2",
            "image": {"asset": {"_ref": "image-bbb-400x400-png"}},
            "displayOrder": 1,
            "featured": true
        },
        {"_id": "g3", "caption": "No image here"},
        {
            "_id": "g4",
            "category": "",
            "image": {"asset": {"url": "https://cdn.example/ccc.jpg"}}
        }
    ]"#;

    #[test]
    fn test_parse_gallery() {
        let photos = parse_gallery(GALLERY_JSON).unwrap();
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["g4", "g2", "g1"]);

        let g1 = &photos[2];
        assert_eq!(g1.image.as_str(), "image-aaa-800x600-jpg");
        assert_eq!(g1.alt.as_deref(), Some("Roof trusses on a flatbed"));
        assert_eq!(g1.caption.as_deref(), Some("Truss delivery"));
        assert_eq!(g1.category.as_deref(), Some("components"));

        assert!(photos[1].featured);
        assert_eq!(photos[1].image.as_str(), "image-bbb-400x400-png");
        assert_eq!(photos[0].image.as_str(), "https://cdn.example/ccc.jpg");
        assert_eq!(photos[0].category, None);
    }

    #[test]
    fn test_parse_gallery_rejects_non_array() {
        assert!(matches!(
            parse_gallery(r#"{"_id": "g1"}"#),
            Err(CmsError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_product() {
        let product = parse_product(
            r#"{
                "_id": "prod-1",
                "name": "Engineered Joists",
                "featured": true,
                "galleryImages": [
                    {"_key": "k1", "alt": "Joist stack", "asset": {"_ref": "image-j1-100x100-jpg"}},
                    {"asset": null},
                    {"caption": "Installed", "asset": {"_ref": "image-j2-100x100-jpg"}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(product.name, "Engineered Joists");
        assert!(product.featured);
        let ids: Vec<&str> = product.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["k1", "prod-1-2"]);
        assert!(product.photos.iter().all(|p| p.featured));
        assert_eq!(product.photos[1].caption.as_deref(), Some("Installed"));
    }

    #[test]
    fn test_parse_product_without_images() {
        let product = parse_product(r#"{"_id": "p", "name": "Lintels"}"#).unwrap();
        assert!(product.photos.is_empty());
        assert!(!product.featured);
    }
}
