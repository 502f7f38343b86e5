//! Analytics sink port
//!
//! The engine's caller observes quiz lifecycle events through this port
//! rather than a process-wide singleton, keeping the quiz testable in
//! isolation. The contract is fire-and-forget: `emit` has no return value
//! and must never disrupt the interaction that triggered it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Label attached to every event this quiz emits.
const QUIZ_LABEL: &str = "service_recommendation_quiz";

/// A structured analytics event.
///
/// Field shape follows the usual event-collector contract: a category
/// ("quiz", "conversion", ...), an action within it, an optional label,
/// an optional numeric value, and free-form string/number attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    /// Event category (e.g. "quiz", "conversion")
    pub category: String,
    /// Action within the category (e.g. "start_quiz")
    pub action: String,
    /// Optional human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Optional numeric value (conversion worth, counts, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Event-specific attributes
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl AnalyticsEvent {
    /// Create a bare event with a category and action
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
            attributes: Map::new(),
        }
    }

    /// Attach a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a numeric value
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The user opted into the quiz
    pub fn quiz_started() -> Self {
        Self::new("quiz", "start_quiz")
            .with_label(QUIZ_LABEL)
            .with_attribute("quiz_type", "service_recommendation")
    }

    /// The final question was answered and a recommendation derived
    pub fn quiz_completed(package_name: &str, answers_count: usize) -> Self {
        Self::new("quiz", "complete_quiz")
            .with_label(QUIZ_LABEL)
            .with_attribute("recommendation", package_name)
            .with_attribute("answers_count", answers_count as u64)
    }

    /// The user chose to retake the quiz
    pub fn quiz_restarted() -> Self {
        Self::new("quiz", "restart_quiz").with_label(QUIZ_LABEL)
    }

    /// A completed run counted as a conversion
    pub fn conversion(conversion_type: &str, package_name: &str) -> Self {
        Self::new("conversion", conversion_type)
            .with_value(1.0)
            .with_attribute("recommendation_package", package_name)
            .with_attribute("quiz_type", "service_recommendation")
    }
}

/// Port for delivering analytics events to an external collector.
///
/// `emit` is intentionally synchronous and infallible: delivery failures
/// are the adapter's problem and are silently dropped, never surfaced to
/// the quiz flow.
pub trait AnalyticsSink: Send + Sync {
    /// Deliver one event. Fire-and-forget.
    fn emit(&self, event: AnalyticsEvent);
}

/// No-op sink for tests and when analytics is disabled.
pub struct NoAnalytics;

impl AnalyticsSink for NoAnalytics {
    fn emit(&self, _event: AnalyticsEvent) {}
}
