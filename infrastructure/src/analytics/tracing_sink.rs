//! Analytics sink that forwards events to the `tracing` pipeline.
//!
//! Useful as a default: events show up in the operational log without any
//! extra file handling, and disappear entirely under a quiet filter.

use quiz_application::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use tracing::info;

/// Forwards each event as a `tracing` info record.
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn emit(&self, event: AnalyticsEvent) {
        info!(
            category = %event.category,
            action = %event.action,
            label = event.label.as_deref().unwrap_or(""),
            "analytics event"
        );
    }
}
