//! Trace sink for room activity.

/// Write-only sink for free-form room events.
///
/// The room is handed one at construction; [`NoopTracer`] is the "tracing
/// disabled" case and must leave room behavior unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Tracer: Send + Sync {
    fn trace(&self, event: &str);
}

/// A tracer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn trace(&self, _event: &str) {}
}
