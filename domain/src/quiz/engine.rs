//! Quiz state machine and scoring
//!
//! The engine walks `NotStarted → InProgress(position) → Completed` one
//! valid selection at a time, with no backward navigation. Scoring itself
//! is a pure function over (questions, trace) so it can be exercised
//! without driving the state machine.

use super::category::Category;
use super::question::{CHOICES_PER_QUESTION, QuestionSet};
use super::score::ScoreVector;
use super::trace::AnswerTrace;
use crate::core::error::DomainError;
use crate::recommendation::catalog::{Recommendation, RecommendationCatalog};
use serde::{Deserialize, Serialize};

/// Where a quiz run currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizState {
    /// The user has not opted in yet
    NotStarted,
    /// Waiting for the answer to question `position`
    InProgress { position: usize },
    /// All questions answered; the result is fixed until reset
    Completed { recommendation: Recommendation },
}

impl QuizState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, QuizState::InProgress { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, QuizState::Completed { .. })
    }
}

/// What a successful selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Advanced to the next question
    Advanced { next: usize },
    /// That was the last question; the run is complete
    Completed { recommendation: Recommendation },
}

/// Sum the contribution of every answered question's selected choice.
///
/// Accepts partial traces (running totals mid-quiz). Fails only if the
/// trace does not fit the question set: more answers than questions, or a
/// recorded choice index out of range.
pub fn score_trace(
    questions: &QuestionSet,
    trace: &AnswerTrace,
) -> Result<ScoreVector, DomainError> {
    if trace.len() > questions.len() {
        return Err(DomainError::TraceTooLong {
            answers: trace.len(),
            questions: questions.len(),
        });
    }

    let mut totals = ScoreVector::ZERO;
    for (position, choice_index) in trace.iter() {
        // position < trace.len() <= questions.len(), so the question exists
        let Some(question) = questions.get(position) else {
            break;
        };
        let choice = question
            .choice(choice_index)
            .ok_or(DomainError::ChoiceOutOfRange {
                got: choice_index,
                count: CHOICES_PER_QUESTION,
            })?;
        totals.accumulate(choice.score());
    }
    Ok(totals)
}

/// Derive the recommendation for a complete trace.
///
/// Pure and deterministic: the same trace always yields the same record.
/// Ties between category totals resolve to the first category in
/// [`Category::ORDER`].
pub fn compute_recommendation<'a>(
    questions: &QuestionSet,
    trace: &AnswerTrace,
    catalog: &'a RecommendationCatalog,
) -> Result<&'a Recommendation, DomainError> {
    if !trace.is_complete_for(questions.len()) {
        return Err(DomainError::IncompleteTrace {
            answered: trace.len(),
            expected: questions.len(),
        });
    }
    let totals = score_trace(questions, trace)?;
    Ok(catalog.get(totals.leader()))
}

/// The quiz engine (Entity)
///
/// Owns the question set, the recommendation catalog, the answer trace,
/// and the current state. All operations are synchronous and complete
/// within the caller's event handler; invalid calls are rejected with a
/// [`DomainError`] without touching the trace.
///
/// # Example
///
/// ```
/// use quiz_domain::{QuizEngine, QuestionSet, Question, Choice, ScoreVector,
///                   Recommendation, RecommendationCatalog, SelectOutcome};
///
/// fn choices() -> Vec<Choice> {
///     vec![
///         Choice::new("a", ScoreVector::new(5, 3, 1, 0)),
///         Choice::new("b", ScoreVector::new(3, 5, 2, 0)),
///         Choice::new("c", ScoreVector::new(1, 3, 5, 2)),
///         Choice::new("d", ScoreVector::new(0, 1, 3, 5)),
///     ]
/// }
///
/// let questions = QuestionSet::try_new(vec![
///     Question::try_new(1, "Where are you starting from?", choices()).unwrap(),
/// ]).unwrap();
/// let catalog = RecommendationCatalog::new(
///     Recommendation::new("Consultation", "", "https://example.com", "Book"),
///     Recommendation::new("Starter", "", "https://example.com", "Start"),
///     Recommendation::new("Blueprint", "", "https://example.com", "Plan"),
///     Recommendation::new("Advisor", "", "https://example.com", "Contact"),
/// );
///
/// let mut engine = QuizEngine::new(questions, catalog);
/// engine.start().unwrap();
/// match engine.select_option(0, 0).unwrap() {
///     SelectOutcome::Completed { recommendation } => {
///         assert_eq!(recommendation.package_name, "Consultation");
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: QuestionSet,
    catalog: RecommendationCatalog,
    trace: AnswerTrace,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(questions: QuestionSet, catalog: RecommendationCatalog) -> Self {
        Self {
            questions,
            catalog,
            trace: AnswerTrace::new(),
            state: QuizState::NotStarted,
        }
    }

    /// Opt in: `NotStarted → InProgress(0)`.
    ///
    /// Only `NotStarted` accepts `start`; anything else is a driver bug.
    pub fn start(&mut self) -> Result<(), DomainError> {
        match self.state {
            QuizState::NotStarted => {
                self.state = QuizState::InProgress { position: 0 };
                Ok(())
            }
            _ => Err(DomainError::AlreadyStarted),
        }
    }

    /// Answer the question at `question_index` with `choice_index`.
    ///
    /// Valid only when `question_index` equals the current position and
    /// `choice_index` is within `[0, CHOICES_PER_QUESTION)`. Records the
    /// answer and advances; answering the final question computes the
    /// recommendation and transitions to `Completed` instead.
    pub fn select_option(
        &mut self,
        question_index: usize,
        choice_index: usize,
    ) -> Result<SelectOutcome, DomainError> {
        let position = match self.state {
            QuizState::InProgress { position } => position,
            _ => return Err(DomainError::NotInProgress),
        };
        if question_index != position {
            return Err(DomainError::StaleQuestionIndex {
                expected: position,
                got: question_index,
            });
        }
        if choice_index >= CHOICES_PER_QUESTION {
            return Err(DomainError::ChoiceOutOfRange {
                got: choice_index,
                count: CHOICES_PER_QUESTION,
            });
        }

        self.trace.push(choice_index);

        if self.trace.is_complete_for(self.questions.len()) {
            let recommendation =
                compute_recommendation(&self.questions, &self.trace, &self.catalog)?.clone();
            self.state = QuizState::Completed {
                recommendation: recommendation.clone(),
            };
            Ok(SelectOutcome::Completed { recommendation })
        } else {
            let next = position + 1;
            self.state = QuizState::InProgress { position: next };
            Ok(SelectOutcome::Advanced { next })
        }
    }

    /// Back to `NotStarted` with an empty trace. Valid from any state,
    /// always succeeds, idempotent.
    pub fn reset(&mut self) {
        self.trace.clear();
        self.state = QuizState::NotStarted;
    }

    /// Current state
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Current question position, if a run is in progress
    pub fn position(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { position } => Some(position),
            _ => None,
        }
    }

    /// Answers recorded so far
    pub fn trace(&self) -> &AnswerTrace {
        &self.trace
    }

    /// The questions this engine walks through
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// The recommendation, once the run is complete
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.state {
            QuizState::Completed { recommendation } => Some(recommendation),
            _ => None,
        }
    }

    /// Running per-category totals over the answers recorded so far
    pub fn totals(&self) -> ScoreVector {
        // Trace entries are validated on insertion, so scoring cannot fail
        score_trace(&self.questions, &self.trace).unwrap_or(ScoreVector::ZERO)
    }

    /// The winning category for the current totals
    pub fn leading_category(&self) -> Category {
        self.totals().leader()
    }
}
