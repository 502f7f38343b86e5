//! Quiz engine: questions, scoring, and the answer state machine

pub mod category;
pub mod engine;
pub mod question;
pub mod score;
pub mod trace;

pub use category::Category;
pub use engine::{QuizEngine, QuizState, SelectOutcome};
pub use question::{CHOICES_PER_QUESTION, Choice, Question, QuestionSet};
pub use score::ScoreVector;
pub use trace::AnswerTrace;
