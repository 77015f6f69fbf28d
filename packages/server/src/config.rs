//! Command-line configuration for the server binary.

use std::{net::SocketAddr, sync::Arc};

use clap::{Parser, ValueEnum};

use crate::{
    domain::{NoopTracer, Tracer},
    infrastructure::tracer::{LogTracer, WriterTracer},
    room::{DEFAULT_OUTBOUND_CAPACITY, RoomSettings},
};

/// Where room trace events go
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceMode {
    /// Discard trace events
    Off,
    /// Emit trace events through the logger
    Log,
    /// Print one line per event to stdout
    Stdout,
}

/// Hearth chat room relay
#[derive(Debug, Clone, Parser)]
#[command(name = "hearth-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Messages a client may have queued before it is evicted
    #[arg(long, default_value_t = DEFAULT_OUTBOUND_CAPACITY, value_parser = parse_capacity)]
    pub outbound_capacity: usize,

    /// Trace sink for room events
    #[arg(long, value_enum, default_value_t = TraceMode::Log)]
    pub trace: TraceMode,

    /// Do not deliver a message back to the client that sent it
    #[arg(long)]
    pub no_echo: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn room_settings(&self) -> RoomSettings {
        RoomSettings::with_outbound_capacity(self.outbound_capacity).echo_to_sender(!self.no_echo)
    }

    pub fn tracer(&self) -> Arc<dyn Tracer> {
        match self.trace {
            TraceMode::Off => Arc::new(NoopTracer),
            TraceMode::Log => Arc::new(LogTracer),
            TraceMode::Stdout => Arc::new(WriterTracer::stdout()),
        }
    }
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    let capacity: usize = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if capacity == 0 {
        return Err("capacity must be at least 1".to_string());
    }
    Ok(capacity)
}
