//! Configuration: raw TOML structures and multi-source loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigIssue, FileAnalyticsConfig, FileChoice, FileConfig, FileQuestion, FileQuizConfig,
    FileRecommendation, FileRecommendationsConfig, FileScore, Severity,
};
pub use loader::ConfigLoader;
