use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{CategoryFilter, Photo, ALL_CATEGORIES};

/// Holds the photo list for one page view and derives the filtered view.
///
/// The photo list is read-only after construction. Only the category
/// selection changes, and the filtered view is recomputed eagerly so reads
/// are cheap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoStore {
    photos: Vec<Photo>,
    filter: CategoryFilter,
    /// Indices into `photos`, ascending
    visible: Vec<usize>,
}

impl PhotoStore {
    pub fn new(photos: Vec<Photo>) -> Self {
        let mut seen = HashSet::new();
        for photo in &photos {
            if !seen.insert(photo.id.as_str()) {
                warn!("Duplicate photo id {}, lookups resolve to the first", photo.id);
            }
        }

        let visible = (0..photos.len()).collect();
        Self {
            photos,
            filter: CategoryFilter::All,
            visible,
        }
    }

    /// Select a category (or `"all"`). Unknown categories are allowed and
    /// produce an empty filtered view. Returns whether the selection changed.
    pub fn set_category(&mut self, selector: &str) -> bool {
        let filter = CategoryFilter::parse(selector);
        if filter == self.filter {
            return false;
        }

        self.visible = self
            .photos
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect();
        debug!(
            "Category set to {:?}: {} of {} photos visible",
            filter.as_str(),
            self.visible.len(),
            self.photos.len()
        );
        self.filter = filter;
        true
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Full photo list in source order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Photos matching the current selection, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &Photo> + '_ {
        self.visible.iter().map(move |&i| &self.photos[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn filtered_get(&self, index: usize) -> Option<&Photo> {
        self.visible.get(index).map(|&i| &self.photos[i])
    }

    /// Position of `id` within the filtered view.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.visible.iter().position(|&i| self.photos[i].id == id)
    }

    /// Selectable categories: `All` first, then each distinct category in
    /// order of first appearance.
    ///
    /// A category spelled like the `all` selector is folded into `All`,
    /// since selecting it shows every photo anyway.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut categories = vec![CategoryFilter::All];
        for category in self.photos.iter().filter_map(|p| p.category.as_deref()) {
            if category == ALL_CATEGORIES {
                continue;
            }
            if seen.insert(category) {
                categories.push(CategoryFilter::Category(category.to_string()));
            }
        }
        categories
    }

    /// Photos flagged as featured, in source order.
    pub fn featured(&self) -> impl Iterator<Item = &Photo> + '_ {
        self.photos.iter().filter(|p| p.featured)
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_photos() -> Vec<Photo> {
        vec![
            Photo::new("1", "img1").with_category("a"),
            Photo::new("2", "img2").with_category("b"),
            Photo::new("3", "img3").with_category("a"),
        ]
    }

    fn filtered_ids(store: &PhotoStore) -> Vec<&str> {
        store.filtered().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_is_all() {
        let store = PhotoStore::new(scenario_photos());
        assert_eq!(store.filter(), &CategoryFilter::All);
        assert_eq!(filtered_ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filter_by_category() {
        let mut store = PhotoStore::new(scenario_photos());
        assert!(store.set_category("a"));
        assert_eq!(filtered_ids(&store), vec!["1", "3"]);
        assert_eq!(store.position_of("3"), Some(1));
        assert_eq!(store.position_of("2"), None);
    }

    #[test]
    fn test_set_same_category_reports_unchanged() {
        let mut store = PhotoStore::new(scenario_photos());
        assert!(!store.set_category("all"));
        assert!(store.set_category("b"));
        assert!(!store.set_category("b"));
    }

    #[test]
    fn test_unknown_category_yields_empty_view() {
        let mut store = PhotoStore::new(scenario_photos());
        store.set_category("roofing");
        assert_eq!(store.filtered_len(), 0);
        assert_eq!(store.filtered_get(0), None);

        store.set_category("all");
        assert_eq!(store.filtered_len(), 3);
    }

    #[test]
    fn test_filtered_is_ordered_subsequence_for_every_selector() {
        let photos = vec![
            Photo::new("p1", "x").with_category("team"),
            Photo::new("p2", "x"),
            Photo::new("p3", "x").with_category("materials"),
            Photo::new("p4", "x").with_category("team"),
            Photo::new("p5", "x").with_category("materials"),
            Photo::new("p6", "x").with_category("team"),
        ];
        let mut store = PhotoStore::new(photos.clone());

        for selector in ["all", "team", "materials", "equipment"] {
            store.set_category(selector);
            let filter = CategoryFilter::parse(selector);
            let expected: Vec<&str> = photos
                .iter()
                .filter(|p| filter.matches(p))
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(filtered_ids(&store), expected, "selector {selector}");
        }
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        let store = PhotoStore::new(vec![
            Photo::new("1", "x").with_category("team"),
            Photo::new("2", "x"),
            Photo::new("3", "x").with_category("components"),
            Photo::new("4", "x").with_category("team"),
        ]);
        assert_eq!(
            store.categories(),
            vec![
                CategoryFilter::All,
                CategoryFilter::Category("team".into()),
                CategoryFilter::Category("components".into()),
            ]
        );
    }

    #[test]
    fn test_category_named_all_folds_into_all() {
        let mut store = PhotoStore::new(vec![
            Photo::new("1", "x").with_category("all"),
            Photo::new("2", "x").with_category("team"),
        ]);
        assert_eq!(
            store.categories(),
            vec![CategoryFilter::All, CategoryFilter::Category("team".into())]
        );

        store.set_category("team");
        assert_eq!(filtered_ids(&store), vec!["2"]);
        store.set_category("all");
        assert_eq!(store.filter(), &CategoryFilter::All);
        assert_eq!(filtered_ids(&store), vec!["1", "2"]);
    }

    #[test]
    fn test_featured() {
        let store = PhotoStore::new(vec![
            Photo::new("1", "x").with_featured(true),
            Photo::new("2", "x"),
            Photo::new("3", "x").with_featured(true),
        ]);
        let ids: Vec<&str> = store.featured().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let store = PhotoStore::new(vec![
            Photo::new("dup", "first"),
            Photo::new("other", "x"),
            Photo::new("dup", "second"),
        ]);
        assert_eq!(store.position_of("dup"), Some(0));
        assert_eq!(store.filtered_len(), 3);
    }
}
