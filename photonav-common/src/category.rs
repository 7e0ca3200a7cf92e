use crate::Photo;

/// Sentinel selector that matches every photo
pub const ALL_CATEGORIES: &str = "all";

/// The active category selection for a photo set
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a selector. `"all"` is the sentinel; any other string is a
    /// category name, known or not.
    pub fn parse(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(selector.to_string())
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => photo.category.as_deref() == Some(wanted.as_str()),
        }
    }

    /// Selector string, suitable for round-tripping through `parse`.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Human-readable label for filter buttons.
    pub fn display_name(&self) -> &str {
        match self {
            CategoryFilter::All => "All Photos",
            CategoryFilter::Category(name) => category_display_name(name),
        }
    }
}

/// Label for a CMS category value; unknown values are shown verbatim.
pub fn category_display_name(category: &str) -> &str {
    match category {
        "components" => "Building Components",
        "construction" => "Construction Site",
        "completed" => "Completed Projects",
        "materials" => "Materials & Supplies",
        "equipment" => "Equipment",
        "team" => "Team at Work",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Category("All".into())
        );
        assert_eq!(CategoryFilter::parse("team").as_str(), "team");
    }

    #[test]
    fn test_matches() {
        let tagged = Photo::new("1", "x").with_category("team");
        let untagged = Photo::new("2", "x");
        let team = CategoryFilter::parse("team");

        assert!(team.matches(&tagged));
        assert!(!team.matches(&untagged));
        assert!(CategoryFilter::All.matches(&untagged));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CategoryFilter::All.display_name(), "All Photos");
        assert_eq!(
            CategoryFilter::parse("components").display_name(),
            "Building Components"
        );
        assert_eq!(CategoryFilter::parse("decking").display_name(), "decking");
    }
}
