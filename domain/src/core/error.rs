//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a precondition violation: the quiz has no I/O, so
/// there is no transient-failure category. Operations that return one of
/// these errors leave the engine state and answer trace untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quiz already started")]
    AlreadyStarted,

    #[error("Quiz is not in progress")]
    NotInProgress,

    #[error("Stale question index: expected {expected}, got {got}")]
    StaleQuestionIndex { expected: usize, got: usize },

    #[error("Choice index {got} out of range (questions have {count} choices)")]
    ChoiceOutOfRange { got: usize, count: usize },

    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Question {id} has an empty prompt")]
    EmptyPrompt { id: u32 },

    #[error("Question {id} has {got} choices, expected {expected}")]
    WrongChoiceCount { id: u32, expected: usize, got: usize },

    #[error("Answer trace covers {answered} of {expected} questions")]
    IncompleteTrace { answered: usize, expected: usize },

    #[error("Answer trace has {answers} answers for {questions} questions")]
    TraceTooLong { answers: usize, questions: usize },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Check whether this error came from driving the state machine out of
    /// order, as opposed to constructing invalid quiz content.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            DomainError::AlreadyStarted
                | DomainError::NotInProgress
                | DomainError::StaleQuestionIndex { .. }
                | DomainError::ChoiceOutOfRange { .. }
        )
    }
}
