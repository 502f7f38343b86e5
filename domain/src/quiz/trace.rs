//! Answer trace (Value Object)
//!
//! The ordered record of a user's selections: entry i is the choice index
//! picked for question i. The trace only ever grows by one entry per valid
//! selection and is cleared in full on reset.

use serde::{Deserialize, Serialize};

/// Ordered selected-choice indices, one per answered question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTrace {
    selections: Vec<usize>,
}

impl AnswerTrace {
    /// An empty trace — no questions answered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trace directly from choice indices (mainly for tests and
    /// scripted runs; the engine validates indices on selection).
    pub fn from_selections(selections: Vec<usize>) -> Self {
        Self { selections }
    }

    /// Number of questions answered so far
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The choice index recorded for question `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.selections.get(position).copied()
    }

    /// Whether every one of `total` questions has an answer
    pub fn is_complete_for(&self, total: usize) -> bool {
        self.selections.len() == total
    }

    /// Record the answer for the next question
    pub(crate) fn push(&mut self, choice_index: usize) {
        self.selections.push(choice_index);
    }

    /// Forget all answers
    pub(crate) fn clear(&mut self) {
        self.selections.clear();
    }

    /// Iterate (question position, selected choice index) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.selections.iter().copied().enumerate()
    }
}
