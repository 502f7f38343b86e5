//! Recommendation records and the category catalog

pub mod catalog;

pub use catalog::{Recommendation, RecommendationCatalog};
