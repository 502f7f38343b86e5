//! Application layer for reco-quiz
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::analytics::{AnalyticsEvent, AnalyticsSink, NoAnalytics};
pub use ports::answer_prompt::{AnswerPrompt, PromptError, ScriptedAnswers};
pub use use_cases::run_quiz::{QuizOutcome, RunQuizError, RunQuizInput, RunQuizUseCase};
