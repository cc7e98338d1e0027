//! Resolution tracing for chesstalk.
//!
//! This crate provides:
//! - `Tracer` - Records every step of phrase resolution into a ring buffer
//! - `HumanFormatter` / `JsonFormatter` - Render trace records

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
