//! Analytics adapters — implementations of the [`AnalyticsSink`] port.
//!
//! [`JsonlAnalyticsSink`] appends events to a JSONL file,
//! [`TracingAnalyticsSink`] forwards them to the `tracing` pipeline, and
//! [`FanoutSink`] delivers each event to several sinks at once.
//!
//! [`AnalyticsSink`]: quiz_application::AnalyticsSink

mod fanout;
mod jsonl_sink;
mod tracing_sink;

pub use fanout::FanoutSink;
pub use jsonl_sink::JsonlAnalyticsSink;
pub use tracing_sink::TracingAnalyticsSink;
