//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "P{:04} ", record.phrase_seq);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::PhraseReceived { phrase } => {
                format!("=== PHRASE \"{phrase}\" ===")
            }
            TraceEvent::PhraseNormalized { normalized } => {
                format!("  NORMALIZED \"{normalized}\"")
            }
            TraceEvent::MarkerExtracted { marker } => {
                format!("  MARKER {marker}")
            }
            TraceEvent::RuleMatched { rule } => {
                format!("  RULE {rule}")
            }
            TraceEvent::CandidatesFiltered { stage, remaining } => {
                let noun = if *remaining == 1 {
                    "candidate"
                } else {
                    "candidates"
                };
                format!("  FILTER {}: {remaining} {noun}", stage.name())
            }
            TraceEvent::Resolved { notation } => {
                format!("=== RESOLVED {notation} ===")
            }
            TraceEvent::Failed { message } => {
                format!("=== FAILED: {message} ===")
            }
            TraceEvent::Warning { kind, message } => {
                format!("  WARNING {kind}: {message}")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        use std::fmt::Write;
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c < ' ' => {
                    let _ = write!(out, "\\u{:04x}", u32::from(c));
                }
                c => out.push(c),
            }
        }
        out
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::PhraseReceived { phrase } => {
                format!("\"phrase\":\"{}\"", Self::escape_string(phrase))
            }
            TraceEvent::PhraseNormalized { normalized } => {
                format!("\"normalized\":\"{}\"", Self::escape_string(normalized))
            }
            TraceEvent::MarkerExtracted { marker } => {
                format!("\"marker\":\"{marker}\"")
            }
            TraceEvent::RuleMatched { rule } => {
                format!("\"rule\":\"{rule}\"")
            }
            TraceEvent::CandidatesFiltered { stage, remaining } => {
                format!("\"stage\":\"{}\",\"remaining\":{remaining}", stage.name())
            }
            TraceEvent::Resolved { notation } => {
                format!("\"notation\":\"{}\"", Self::escape_string(notation))
            }
            TraceEvent::Failed { message } => {
                format!("\"message\":\"{}\"", Self::escape_string(message))
            }
            TraceEvent::Warning { kind, message } => {
                format!(
                    "\"kind\":\"{kind}\",\"message\":\"{}\"",
                    Self::escape_string(message)
                )
            }
        };

        format!(
            "{{\"id\":{},\"phrase_seq\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id,
            record.phrase_seq,
            record.timestamp_ns,
            record.event_type(),
            event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
