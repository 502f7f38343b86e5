//! Recommendation catalog (Value Object)
//!
//! The fixed mapping from winning [`Category`] to display content and a
//! call-to-action link. The catalog is total: one record per category,
//! always, so a completed quiz can never lack a recommendation.

use crate::quiz::category::Category;
use serde::{Deserialize, Serialize};

/// The final derived output for a quiz run.
///
/// The `link` is an opaque external URL opened by the caller; the domain
/// neither validates nor fetches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display name of the recommended package
    pub package_name: String,
    /// Human-readable explanation of why this package fits
    pub description: String,
    /// Call-to-action URL
    pub link: String,
    /// Call-to-action label
    pub link_text: String,
}

impl Recommendation {
    pub fn new(
        package_name: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        link_text: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            description: description.into(),
            link: link.into(),
            link_text: link_text.into(),
        }
    }
}

/// Total mapping from category to recommendation record.
///
/// One named field per category keeps the mapping total by construction;
/// there is no lookup that can miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCatalog {
    consultation: Recommendation,
    starter: Recommendation,
    blueprint: Recommendation,
    advisor: Recommendation,
}

impl RecommendationCatalog {
    /// Create a catalog with one record per category, in declared order.
    pub fn new(
        consultation: Recommendation,
        starter: Recommendation,
        blueprint: Recommendation,
        advisor: Recommendation,
    ) -> Self {
        Self {
            consultation,
            starter,
            blueprint,
            advisor,
        }
    }

    /// Look up the record for a category (total — never fails)
    pub fn get(&self, category: Category) -> &Recommendation {
        match category {
            Category::Consultation => &self.consultation,
            Category::Starter => &self.starter,
            Category::Blueprint => &self.blueprint,
            Category::Advisor => &self.advisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RecommendationCatalog {
        RecommendationCatalog::new(
            Recommendation::new("Consultation", "Talk to us", "https://example.com/c", "Book"),
            Recommendation::new("Starter", "Start small", "https://example.com/s", "Start"),
            Recommendation::new("Blueprint", "Full roadmap", "https://example.com/b", "Plan"),
            Recommendation::new("Advisor", "Keep improving", "https://example.com/a", "Contact"),
        )
    }

    #[test]
    fn test_catalog_is_total() {
        let catalog = catalog();
        for category in Category::ORDER {
            // Every category resolves to a record without any fallback path
            assert!(!catalog.get(category).package_name.is_empty());
        }
    }

    #[test]
    fn test_lookup_matches_category() {
        let catalog = catalog();
        assert_eq!(catalog.get(Category::Starter).package_name, "Starter");
        assert_eq!(catalog.get(Category::Advisor).link_text, "Contact");
    }
}
