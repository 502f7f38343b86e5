//! Per-category score accumulation (Value Object)
//!
//! A [`ScoreVector`] carries one non-negative weight per category. Keeping
//! the four categories as named fields makes "every option defines all
//! four categories" a compile-time guarantee instead of a runtime check.

use super::category::Category;
use serde::{Deserialize, Serialize};

/// Weight contribution to each of the four categories.
///
/// Used both as a choice's contribution and as the running total across a
/// quiz run.
///
/// # Example
///
/// ```
/// use quiz_domain::{Category, ScoreVector};
///
/// let mut totals = ScoreVector::ZERO;
/// totals.accumulate(&ScoreVector::new(5, 3, 1, 0));
/// totals.accumulate(&ScoreVector::new(5, 3, 1, 0));
/// assert_eq!(totals.get(Category::Consultation), 10);
/// assert_eq!(totals.leader(), Category::Consultation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    pub consultation: u32,
    pub starter: u32,
    pub blueprint: u32,
    pub advisor: u32,
}

impl ScoreVector {
    /// The zero vector — contributes nothing to any category.
    pub const ZERO: ScoreVector = ScoreVector {
        consultation: 0,
        starter: 0,
        blueprint: 0,
        advisor: 0,
    };

    /// Create a score vector with one weight per category, in declared
    /// category order.
    pub fn new(consultation: u32, starter: u32, blueprint: u32, advisor: u32) -> Self {
        Self {
            consultation,
            starter,
            blueprint,
            advisor,
        }
    }

    /// Get the weight for a single category
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Consultation => self.consultation,
            Category::Starter => self.starter,
            Category::Blueprint => self.blueprint,
            Category::Advisor => self.advisor,
        }
    }

    /// Add another vector into this one, category by category.
    ///
    /// Saturates instead of wrapping; realistic weights never get close.
    pub fn accumulate(&mut self, other: &ScoreVector) {
        self.consultation = self.consultation.saturating_add(other.consultation);
        self.starter = self.starter.saturating_add(other.starter);
        self.blueprint = self.blueprint.saturating_add(other.blueprint);
        self.advisor = self.advisor.saturating_add(other.advisor);
    }

    /// The highest weight across all categories
    pub fn max_value(&self) -> u32 {
        Category::ORDER
            .iter()
            .map(|c| self.get(*c))
            .max()
            .unwrap_or(0)
    }

    /// The winning category: first in [`Category::ORDER`] attaining the
    /// maximum value.
    ///
    /// This makes ties deterministic — including the all-zero vector,
    /// where the first declared category wins.
    pub fn leader(&self) -> Category {
        let max = self.max_value();
        for category in Category::ORDER {
            if self.get(category) == max {
                return category;
            }
        }
        // ORDER is non-empty, so the loop always returns
        Category::ORDER[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut totals = ScoreVector::ZERO;
        totals.accumulate(&ScoreVector::new(1, 2, 3, 4));
        totals.accumulate(&ScoreVector::new(4, 3, 2, 1));
        assert_eq!(totals, ScoreVector::new(5, 5, 5, 5));
    }

    #[test]
    fn test_leader_strict_maximum() {
        let totals = ScoreVector::new(3, 9, 4, 1);
        assert_eq!(totals.leader(), Category::Starter);
    }

    #[test]
    fn test_leader_tie_breaks_in_declared_order() {
        // consultation and starter tie at 10; blueprint and advisor at 8
        let totals = ScoreVector::new(10, 10, 8, 8);
        assert_eq!(totals.leader(), Category::Consultation);

        let totals = ScoreVector::new(2, 7, 7, 7);
        assert_eq!(totals.leader(), Category::Starter);
    }

    #[test]
    fn test_leader_all_zero_picks_first_category() {
        assert_eq!(ScoreVector::ZERO.leader(), Category::Consultation);
    }

    #[test]
    fn test_accumulate_saturates() {
        let mut totals = ScoreVector::new(u32::MAX, 0, 0, 0);
        totals.accumulate(&ScoreVector::new(5, 0, 0, 0));
        assert_eq!(totals.consultation, u32::MAX);
    }

    #[test]
    fn test_get_matches_fields() {
        let v = ScoreVector::new(1, 2, 3, 4);
        assert_eq!(v.get(Category::Consultation), 1);
        assert_eq!(v.get(Category::Starter), 2);
        assert_eq!(v.get(Category::Blueprint), 3);
        assert_eq!(v.get(Category::Advisor), 4);
    }
}
