use serde::{Deserialize, Serialize};

/// Opaque handle to a binary image asset.
///
/// Only an [`ImageUrlResolver`](crate::ImageUrlResolver) knows how to turn
/// this into something fetchable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ImageRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A single gallery or product photo, immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(rename = "imageRef")]
    pub image: ImageRef,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "non_empty_category")]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i64,
}

fn non_empty_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|c| !c.trim().is_empty()))
}

impl Photo {
    pub fn new(id: impl Into<String>, image: impl Into<ImageRef>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            alt: None,
            caption: None,
            category: None,
            featured: false,
            display_order: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_display_order(mut self, display_order: i64) -> Self {
        self.display_order = display_order;
        self
    }

    /// Alt text for rendering: explicit alt, then caption, then `fallback`.
    pub fn alt_text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.caption.as_deref().filter(|c| !c.trim().is_empty()))
            .unwrap_or(fallback)
    }
}

/// Order a freshly fetched list lower `display_order` first. Ties keep
/// their fetched order.
pub fn sort_for_display(photos: &mut [Photo]) {
    photos.sort_by_key(|p| p.display_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_text_prefers_alt_then_caption() {
        let photo = Photo::new("1", "image-a-10x10-jpg")
            .with_alt("Timber frame")
            .with_caption("Site visit");
        assert_eq!(photo.alt_text_or("Gallery photo"), "Timber frame");

        let photo = Photo::new("2", "image-a-10x10-jpg").with_caption("Site visit");
        assert_eq!(photo.alt_text_or("Gallery photo"), "Site visit");

        let photo = Photo::new("3", "image-a-10x10-jpg").with_alt("  ");
        assert_eq!(photo.alt_text_or("Gallery photo"), "Gallery photo");
    }

    #[test]
    fn test_sort_for_display_is_stable() {
        let mut photos = vec![
            Photo::new("c", "x").with_display_order(2),
            Photo::new("a", "x").with_display_order(1),
            Photo::new("b", "x").with_display_order(1),
            Photo::new("d", "x").with_display_order(-5),
        ];
        sort_for_display(&mut photos);
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_empty_category_is_none() {
        let photo = Photo::new("1", "x").with_category("");
        assert_eq!(photo.category, None);

        let photo: Photo =
            serde_json::from_str(r#"{"id":"1","imageRef":"x","category":" "}"#).unwrap();
        assert_eq!(photo.category, None);
        assert_eq!(photo.display_order, 0);
        assert!(!photo.featured);
    }
}
