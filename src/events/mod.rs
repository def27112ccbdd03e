//! Observability hook consumed by the pipelines
//!
//! The transport layer hosting these tools decides where informational and
//! error events go; the pipelines only depend on the `EventSink` trait.

/// Abstract sink for informational and error events
pub trait EventSink: Send + Sync {
    /// Reports normal pipeline progress (request started, results counted)
    fn info(&self, message: &str);

    /// Reports a failure branch
    fn error(&self, message: &str);
}

/// Default sink forwarding events to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
