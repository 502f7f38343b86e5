//! Domain layer for reco-quiz
//!
//! This crate contains the core quiz logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! A fixed-length sequence of questions, each offering exactly four
//! weighted choices. Selecting a choice contributes its [`ScoreVector`]
//! to a running per-category total.
//!
//! ## Recommendation
//!
//! After the final question, the [`Category`] with the highest total wins
//! (ties resolve to the first category in [`Category::ORDER`]) and maps to
//! a static [`Recommendation`] record via the [`RecommendationCatalog`].

pub mod core;
pub mod quiz;
pub mod recommendation;

// Re-export commonly used types
pub use core::error::DomainError;
pub use quiz::{
    category::Category,
    engine::{QuizEngine, QuizState, SelectOutcome, compute_recommendation, score_trace},
    question::{CHOICES_PER_QUESTION, Choice, Question, QuestionSet},
    score::ScoreVector,
    trace::AnswerTrace,
};
pub use recommendation::catalog::{Recommendation, RecommendationCatalog};
