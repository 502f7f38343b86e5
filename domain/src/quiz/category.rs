//! Recommendation categories (Value Object)
//!
//! The four buckets a quiz run can resolve to. The set is closed: scoring,
//! tie-breaking, configuration, and the recommendation catalog all iterate
//! categories in [`Category::ORDER`], never in map-key order.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed recommendation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Free consultation — exploratory, no commitment yet
    Consultation,
    /// Starter plan — focused automation of essential processes
    Starter,
    /// Full blueprint — comprehensive strategy and roadmap
    Blueprint,
    /// Ongoing advisor — continuous optimization of existing systems
    Advisor,
}

impl Category {
    /// The declared category order.
    ///
    /// This is the tie-break order: when two or more categories share the
    /// maximum total, the first one listed here wins. It is also the order
    /// used everywhere categories are enumerated or displayed.
    pub const ORDER: [Category; 4] = [
        Category::Consultation,
        Category::Starter,
        Category::Blueprint,
        Category::Advisor,
    ];

    /// Stable identifier used in config files and analytics payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Consultation => "consultation",
            Category::Starter => "starter",
            Category::Blueprint => "blueprint",
            Category::Advisor => "advisor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "consultation" => Ok(Category::Consultation),
            "starter" => Ok(Category::Starter),
            "blueprint" => Ok(Category::Blueprint),
            "advisor" => Ok(Category::Advisor),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_covers_all_categories() {
        assert_eq!(Category::ORDER.len(), 4);
        assert_eq!(Category::ORDER[0], Category::Consultation);
        assert_eq!(Category::ORDER[3], Category::Advisor);
    }

    #[test]
    fn test_round_trip_parse() {
        for category in Category::ORDER {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Starter".parse::<Category>().unwrap(), Category::Starter);
        assert_eq!(" BLUEPRINT ".parse::<Category>().unwrap(), Category::Blueprint);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "platinum".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCategory("platinum".to_string()));
    }
}
