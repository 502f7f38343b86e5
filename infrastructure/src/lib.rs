//! Infrastructure layer for reco-quiz
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod analytics;
pub mod config;

// Re-export commonly used types
pub use analytics::{FanoutSink, JsonlAnalyticsSink, TracingAnalyticsSink};
pub use config::{
    ConfigIssue, ConfigLoader, FileAnalyticsConfig, FileChoice, FileConfig, FileQuestion,
    FileQuizConfig, FileRecommendation, FileRecommendationsConfig, FileScore, Severity,
};
