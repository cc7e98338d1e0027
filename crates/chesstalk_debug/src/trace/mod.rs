//! Tracing for phrase resolution.
//!
//! Records every step the resolver takes with zero overhead when disabled.
//! Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```text
//! > trace on
//! > knight f three
//! P0001 === PHRASE "knight f three" ===
//! P0001   NORMALIZED "knight f 3"
//! P0001   MARKER none
//! P0001   RULE piece-to-square
//! P0001   FILTER required: 1 candidate
//! P0001 === RESOLVED Nf3 ===
//! > trace show
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use chesstalk_foundation::{Error, OutcomeMarker, OutcomeWarning};
use chesstalk_grammar::{FilterStage, ResolutionObserver};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr as each event is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records resolution events into a ring buffer.
///
/// Pass it to [`PhraseResolver::resolve_observed`] as the observer. The
/// `record` method returns immediately when tracing is off.
///
/// [`PhraseResolver::resolve_observed`]: chesstalk_grammar::PhraseResolver::resolve_observed
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    phrase_seq: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            phrase_seq: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the number of the phrase currently being traced.
    #[must_use]
    pub fn phrase_seq(&self) -> u64 {
        self.phrase_seq
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Returns where traces are printed as they are recorded.
    #[must_use]
    pub fn output(&self) -> TraceOutput {
        self.config.output
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.phrase_seq, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Formats every record of the most recent phrase.
    #[must_use]
    pub fn format_last_phrase(&self) -> String {
        match self.buffer.newest_phrase() {
            Some(seq) => self.format_records(&self.buffer.records_for_phrase(seq)),
            None => String::new(),
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Observer
// =============================================================================

impl ResolutionObserver for Tracer {
    fn phrase_received(&mut self, phrase: &str) {
        self.phrase_seq += 1;
        self.record(TraceEvent::PhraseReceived {
            phrase: phrase.to_string(),
        });
    }

    fn phrase_normalized(&mut self, normalized: &str) {
        self.record(TraceEvent::PhraseNormalized {
            normalized: normalized.to_string(),
        });
    }

    fn marker_extracted(&mut self, marker: OutcomeMarker) {
        self.record(TraceEvent::MarkerExtracted { marker });
    }

    fn rule_matched(&mut self, rule: &'static str) {
        self.record(TraceEvent::RuleMatched { rule });
    }

    fn candidates_filtered(&mut self, stage: FilterStage, remaining: usize) {
        self.record(TraceEvent::CandidatesFiltered { stage, remaining });
    }

    fn resolved(&mut self, notation: &str) {
        self.record(TraceEvent::Resolved {
            notation: notation.to_string(),
        });
    }

    fn failed(&mut self, error: &Error) {
        self.record(TraceEvent::Failed {
            message: error.to_string(),
        });
    }

    fn warning_raised(&mut self, warning: &OutcomeWarning) {
        self.record(TraceEvent::Warning {
            kind: warning.kind,
            message: warning.message.clone(),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
