//! Fan-out analytics sink — delegates to multiple sinks.
//!
//! The original funnel fired page-event, funnel-stage, and conversion
//! hooks side by side; composing sinks keeps that behavior while each
//! adapter stays single-purpose.

use quiz_application::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use std::sync::Arc;

/// A sink that delivers every event to each inner sink in order.
pub struct FanoutSink {
    sinks: Vec<Arc<dyn AnalyticsSink>>,
}

impl FanoutSink {
    pub fn new(sinks: Vec<Arc<dyn AnalyticsSink>>) -> Self {
        Self { sinks }
    }
}

impl AnalyticsSink for FanoutSink {
    fn emit(&self, event: AnalyticsEvent) {
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CountingSink {
        count: Mutex<usize>,
    }

    impl AnalyticsSink for CountingSink {
        fn emit(&self, _event: AnalyticsEvent) {
            *self.count.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_fanout_delivers_to_every_sink() {
        let a = Arc::new(CountingSink { count: Mutex::new(0) });
        let b = Arc::new(CountingSink { count: Mutex::new(0) });
        let fanout = FanoutSink::new(vec![a.clone(), b.clone()]);

        fanout.emit(AnalyticsEvent::quiz_started());
        fanout.emit(AnalyticsEvent::quiz_restarted());

        assert_eq!(*a.count.lock().unwrap(), 2);
        assert_eq!(*b.count.lock().unwrap(), 2);
    }
}
