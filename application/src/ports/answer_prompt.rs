//! Answer prompt port
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerPrompt`] - defined here in the application layer
//! - **Adapter**: `StdinAnswerPrompt` - implemented in the cli crate
//!
//! The use case asks the prompt for one choice index per question; the
//! adapter decides how that answer is actually obtained (terminal input,
//! a scripted list, a test double).

use quiz_domain::Question;
use thiserror::Error;

/// Error type for answer prompt operations.
///
/// These represent failures of the prompting mechanism itself, not
/// invalid answers — an adapter that can re-ask (like a terminal) should
/// do so instead of returning `InvalidInput`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scripted answers exhausted after {0} entries")]
    Exhausted(usize),
}

/// Port for obtaining the user's choice for the current question.
pub trait AnswerPrompt {
    /// Return the selected choice index for `question`, which sits at
    /// `position` (0-indexed) out of `total` questions.
    fn select(
        &mut self,
        question: &Question,
        position: usize,
        total: usize,
    ) -> Result<usize, PromptError>;
}

/// Replays a fixed list of choice indices.
///
/// Used for non-interactive runs (`--answers`) and tests. Indices are
/// passed through unvalidated; the engine rejects out-of-range values.
pub struct ScriptedAnswers {
    answers: Vec<usize>,
    next: usize,
}

impl ScriptedAnswers {
    pub fn new(answers: Vec<usize>) -> Self {
        Self { answers, next: 0 }
    }
}

impl AnswerPrompt for ScriptedAnswers {
    fn select(
        &mut self,
        _question: &Question,
        _position: usize,
        _total: usize,
    ) -> Result<usize, PromptError> {
        let Some(&answer) = self.answers.get(self.next) else {
            return Err(PromptError::Exhausted(self.answers.len()));
        };
        self.next += 1;
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Choice, ScoreVector};

    fn question() -> Question {
        let choices = (0..4)
            .map(|i| Choice::new(format!("choice {i}"), ScoreVector::ZERO))
            .collect();
        Question::try_new(1, "Prompt", choices).unwrap()
    }

    #[test]
    fn test_scripted_answers_replay_in_order() {
        let mut prompt = ScriptedAnswers::new(vec![2, 0, 3]);
        let q = question();
        assert_eq!(prompt.select(&q, 0, 3).unwrap(), 2);
        assert_eq!(prompt.select(&q, 1, 3).unwrap(), 0);
        assert_eq!(prompt.select(&q, 2, 3).unwrap(), 3);
    }

    #[test]
    fn test_scripted_answers_exhaustion() {
        let mut prompt = ScriptedAnswers::new(vec![1]);
        let q = question();
        prompt.select(&q, 0, 2).unwrap();
        assert_eq!(
            prompt.select(&q, 1, 2).unwrap_err(),
            PromptError::Exhausted(1)
        );
    }
}
