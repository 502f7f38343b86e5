//! Run Quiz use case
//!
//! Drives a full quiz run: start the engine, obtain one answer per
//! question through the [`AnswerPrompt`] port, and emit lifecycle events
//! to the [`AnalyticsSink`] in the same order the interaction happens:
//! started → answers → completed → conversion.

use crate::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::ports::answer_prompt::{AnswerPrompt, PromptError};
use quiz_domain::{
    AnswerTrace, DomainError, QuestionSet, QuizEngine, QuizState, Recommendation,
    RecommendationCatalog, ScoreVector,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while driving a quiz run
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    /// The engine rejected a transition. Unreachable when driven through
    /// this use case with in-range answers; surfaces scripted-answer bugs.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunQuiz use case
#[derive(Debug, Clone)]
pub struct RunQuizInput {
    /// Questions to walk through, in order
    pub questions: QuestionSet,
    /// Static category → recommendation mapping
    pub catalog: RecommendationCatalog,
}

impl RunQuizInput {
    pub fn new(questions: QuestionSet, catalog: RecommendationCatalog) -> Self {
        Self { questions, catalog }
    }
}

/// Result of a completed quiz run
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    /// The derived recommendation
    pub recommendation: Recommendation,
    /// Final per-category totals
    pub totals: ScoreVector,
    /// The answers that produced them
    pub trace: AnswerTrace,
}

/// Use case for running a quiz from opt-in to recommendation
pub struct RunQuizUseCase {
    analytics: Arc<dyn AnalyticsSink>,
}

impl RunQuizUseCase {
    pub fn new(analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self { analytics }
    }

    /// Execute one full run.
    ///
    /// The prompt is asked once per question; its answer is fed straight
    /// into the engine. A prompt that returns an out-of-range index gets
    /// the resulting [`DomainError`] back as [`RunQuizError::Domain`].
    pub fn execute(
        &self,
        input: RunQuizInput,
        prompt: &mut dyn AnswerPrompt,
    ) -> Result<QuizOutcome, RunQuizError> {
        let total = input.questions.len();
        let mut engine = QuizEngine::new(input.questions, input.catalog);

        engine.start()?;
        self.analytics.emit(AnalyticsEvent::quiz_started());
        tracing::info!(questions = total, "quiz started");

        while let QuizState::InProgress { position } = *engine.state() {
            // Clone the question out so the engine can be borrowed mutably
            let Some(question) = engine.questions().get(position).cloned() else {
                break;
            };
            let choice = prompt.select(&question, position, total)?;
            engine.select_option(position, choice)?;
            tracing::debug!(position, choice, "answer recorded");
        }

        let Some(recommendation) = engine.recommendation().cloned() else {
            // Only reachable if the loop exited without completing
            return Err(RunQuizError::Domain(DomainError::IncompleteTrace {
                answered: engine.trace().len(),
                expected: total,
            }));
        };

        let outcome = QuizOutcome {
            totals: engine.totals(),
            trace: engine.trace().clone(),
            recommendation,
        };

        self.analytics.emit(AnalyticsEvent::quiz_completed(
            &outcome.recommendation.package_name,
            outcome.trace.len(),
        ));
        self.analytics.emit(AnalyticsEvent::conversion(
            "quiz_completion",
            &outcome.recommendation.package_name,
        ));
        tracing::info!(
            recommendation = %outcome.recommendation.package_name,
            "quiz completed"
        );

        Ok(outcome)
    }

    /// Record that the user chose to retake the quiz.
    ///
    /// Restarting is just another `execute` call; only the event matters.
    pub fn record_restart(&self) {
        self.analytics.emit(AnalyticsEvent::quiz_restarted());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_prompt::ScriptedAnswers;
    use quiz_domain::{Choice, Question};
    use std::sync::Mutex;

    /// Sink that records every emitted event for assertions
    struct RecordingSink {
        events: Mutex<Vec<AnalyticsEvent>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }

        fn actions(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.action.clone())
                .collect()
        }
    }

    impl AnalyticsSink for RecordingSink {
        fn emit(&self, event: AnalyticsEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn choices() -> Vec<Choice> {
        vec![
            Choice::new("first", ScoreVector::new(5, 3, 1, 0)),
            Choice::new("second", ScoreVector::new(3, 5, 2, 0)),
            Choice::new("third", ScoreVector::new(1, 3, 5, 2)),
            Choice::new("fourth", ScoreVector::new(0, 1, 3, 5)),
        ]
    }

    fn input() -> RunQuizInput {
        let questions = (1..=5)
            .map(|id| Question::try_new(id, format!("Question {id}"), choices()).unwrap())
            .collect();
        RunQuizInput::new(
            QuestionSet::try_new(questions).unwrap(),
            RecommendationCatalog::new(
                Recommendation::new("Free Consultation", "", "https://example.com", "Book"),
                Recommendation::new("Starter Plan", "", "https://example.com", "Start"),
                Recommendation::new("Blueprint", "", "https://example.com", "Plan"),
                Recommendation::new("Ongoing Advisor", "", "https://example.com", "Contact"),
            ),
        )
    }

    #[test]
    fn test_full_run_produces_outcome_and_events() {
        let sink = RecordingSink::new();
        let use_case = RunQuizUseCase::new(sink.clone());
        let mut prompt = ScriptedAnswers::new(vec![0, 0, 0, 0, 0]);

        let outcome = use_case.execute(input(), &mut prompt).unwrap();

        assert_eq!(outcome.recommendation.package_name, "Free Consultation");
        assert_eq!(outcome.totals, ScoreVector::new(25, 15, 5, 0));
        assert_eq!(outcome.trace.len(), 5);

        assert_eq!(
            sink.actions(),
            vec!["start_quiz", "complete_quiz", "quiz_completion"]
        );
    }

    #[test]
    fn test_completed_event_carries_recommendation() {
        let sink = RecordingSink::new();
        let use_case = RunQuizUseCase::new(sink.clone());
        let mut prompt = ScriptedAnswers::new(vec![3, 3, 3, 3, 3]);

        let outcome = use_case.execute(input(), &mut prompt).unwrap();
        assert_eq!(outcome.recommendation.package_name, "Ongoing Advisor");

        let events = sink.events.lock().unwrap();
        let completed = events.iter().find(|e| e.action == "complete_quiz").unwrap();
        assert_eq!(completed.attributes["recommendation"], "Ongoing Advisor");
        assert_eq!(completed.attributes["answers_count"], 5);
    }

    #[test]
    fn test_prompt_exhaustion_surfaces_as_prompt_error() {
        let use_case = RunQuizUseCase::new(RecordingSink::new());
        let mut prompt = ScriptedAnswers::new(vec![0, 0]);

        let err = use_case.execute(input(), &mut prompt).unwrap_err();
        assert!(matches!(
            err,
            RunQuizError::Prompt(PromptError::Exhausted(2))
        ));
    }

    #[test]
    fn test_out_of_range_scripted_answer_is_a_domain_error() {
        let use_case = RunQuizUseCase::new(RecordingSink::new());
        let mut prompt = ScriptedAnswers::new(vec![0, 9, 0, 0, 0]);

        let err = use_case.execute(input(), &mut prompt).unwrap_err();
        assert!(matches!(
            err,
            RunQuizError::Domain(DomainError::ChoiceOutOfRange { got: 9, .. })
        ));
    }

    #[test]
    fn test_record_restart_emits_event() {
        let sink = RecordingSink::new();
        let use_case = RunQuizUseCase::new(sink.clone());
        use_case.record_restart();
        assert_eq!(sink.actions(), vec!["restart_quiz"]);
    }
}
