//! Trace sinks handed to the room at construction.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use crate::domain::Tracer;

/// Forwards room events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, event: &str) {
        tracing::info!("[trace] {}", event);
    }
}

/// Writes one line per event to any writer.
pub struct WriterTracer<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterTracer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl WriterTracer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Tracer for WriterTracer<W> {
    fn trace(&self, event: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{event}").and_then(|()| out.flush()) {
            tracing::debug!("Failed to write trace event: {}", e);
        }
    }
}
