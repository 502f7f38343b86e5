//! Question and choice value objects
//!
//! A [`Question`] always has exactly [`CHOICES_PER_QUESTION`] choices —
//! enforced by the fixed-size array, so the invariant holds by
//! construction for every question the engine ever sees.

use super::score::ScoreVector;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Every question offers exactly this many choices.
pub const CHOICES_PER_QUESTION: usize = 4;

/// One selectable answer: display text plus its per-category contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    text: String,
    score: ScoreVector,
}

impl Choice {
    pub fn new(text: impl Into<String>, score: ScoreVector) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// Display text shown to the user
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The contribution this choice makes when selected
    pub fn score(&self) -> &ScoreVector {
        &self.score
    }
}

/// A quiz question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    prompt: String,
    choices: [Choice; CHOICES_PER_QUESTION],
}

impl Question {
    /// Try to create a question, validating the prompt and choice count.
    pub fn try_new(
        id: u32,
        prompt: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(DomainError::EmptyPrompt { id });
        }
        let got = choices.len();
        let choices: [Choice; CHOICES_PER_QUESTION] = choices
            .try_into()
            .map_err(|_| DomainError::WrongChoiceCount {
                id,
                expected: CHOICES_PER_QUESTION,
                got,
            })?;
        Ok(Self {
            id,
            prompt,
            choices,
        })
    }

    /// Ordinal id (1-indexed, for display and diagnostics)
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All choices, in display order
    pub fn choices(&self) -> &[Choice; CHOICES_PER_QUESTION] {
        &self.choices
    }

    /// Get a choice by index, if in range
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }
}

/// The ordered, non-empty set of questions a quiz run walks through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Try to create a question set; must contain at least one question.
    pub fn try_new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionSet);
        }
        Ok(Self { questions })
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// A question set is never empty, but clippy expects the pair.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at a position
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate questions in order
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_choices() -> Vec<Choice> {
        (0..4)
            .map(|i| Choice::new(format!("choice {i}"), ScoreVector::new(i, 0, 0, 0)))
            .collect()
    }

    #[test]
    fn test_question_creation() {
        let q = Question::try_new(1, "What stage are you at?", four_choices()).unwrap();
        assert_eq!(q.id(), 1);
        assert_eq!(q.prompt(), "What stage are you at?");
        assert_eq!(q.choices().len(), CHOICES_PER_QUESTION);
        assert_eq!(q.choice(3).unwrap().text(), "choice 3");
        assert!(q.choice(4).is_none());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let err = Question::try_new(2, "   ", four_choices()).unwrap_err();
        assert_eq!(err, DomainError::EmptyPrompt { id: 2 });
    }

    #[test]
    fn test_wrong_choice_count_rejected() {
        let mut choices = four_choices();
        choices.pop();
        let err = Question::try_new(3, "Prompt", choices).unwrap_err();
        assert_eq!(
            err,
            DomainError::WrongChoiceCount {
                id: 3,
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn test_empty_question_set_rejected() {
        assert_eq!(
            QuestionSet::try_new(vec![]).unwrap_err(),
            DomainError::EmptyQuestionSet
        );
    }

    #[test]
    fn test_question_set_access() {
        let q = Question::try_new(1, "Prompt", four_choices()).unwrap();
        let set = QuestionSet::try_new(vec![q.clone()]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0), Some(&q));
        assert!(set.get(1).is_none());
    }
}
