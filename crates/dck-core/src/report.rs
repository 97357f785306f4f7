//! Per-event reports emitted while scanning, and the sink they go to.
//!
//! Every recoverable condition becomes one [`Event`] delivered to a
//! [`ReportSink`] at the point of detection; nothing is batched.

use crate::record::DecodeFailure;
use std::fmt;

/// One diagnostic produced during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Recomputed checksum differs from the claimed digest (or the claimed
    /// digest is not a `u32`).
    Mismatch {
        ordinal: u64,
        identifier: String,
        claimed_digest: String,
        recomputed: u32,
    },
    /// Identifier is not ASCII and cannot be hashed; counted as a mismatch.
    Unhashable {
        ordinal: u64,
        identifier: String,
        claimed_digest: String,
    },
    /// Digest text already seen on an earlier record.
    Duplicate {
        ordinal: u64,
        identifier: String,
        digest: String,
        first_identifier: String,
    },
    /// Line could not be decoded into a record.
    DecodeFailure {
        ordinal: u64,
        line_no: u64,
        raw_line: String,
        failure: DecodeFailure,
    },
}

impl Event {
    /// Short label for the event kind: `ERR`, `DUP` or `DECODE`.
    pub fn tag(&self) -> &'static str {
        match self {
            Event::Mismatch { .. } | Event::Unhashable { .. } => "ERR",
            Event::Duplicate { .. } => "DUP",
            Event::DecodeFailure { .. } => "DECODE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Mismatch {
                ordinal,
                identifier,
                claimed_digest,
                recomputed,
            } => write!(
                f,
                "ERR #{ordinal} URI: {identifier}, Digest: {claimed_digest} != {recomputed}"
            ),
            Event::Unhashable {
                ordinal,
                identifier,
                claimed_digest,
            } => write!(
                f,
                "ERR #{ordinal} URI: {identifier}, Digest: {claimed_digest} (identifier is not ASCII)"
            ),
            Event::Duplicate {
                ordinal,
                identifier,
                digest,
                first_identifier,
            } => write!(
                f,
                "DUP #{ordinal} URI: {identifier}, Digest: {digest} (first seen: {first_identifier})"
            ),
            Event::DecodeFailure {
                line_no,
                raw_line,
                failure,
                ..
            } => write!(
                f,
                "Error parsing JSON on line {line_no}: {raw_line}. Error: {failure}"
            ),
        }
    }
}

/// Receives events as they are detected.
pub trait ReportSink {
    fn report(&mut self, event: &Event);
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub events: Vec<Event>,
}

impl ReportSink for CollectingSink {
    fn report(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Sink that drops everything (counters only).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn report(&mut self, _event: &Event) {}
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, event: &Event) {
        (**self).report(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_line_format() {
        let e = Event::Mismatch {
            ordinal: 3,
            identifier: "/a".into(),
            claimed_digest: "1".into(),
            recomputed: 2,
        };
        assert_eq!(e.to_string(), "ERR #3 URI: /a, Digest: 1 != 2");
        assert_eq!(e.tag(), "ERR");
    }

    #[test]
    fn duplicate_line_format() {
        let e = Event::Duplicate {
            ordinal: 1,
            identifier: "/b".into(),
            digest: "99".into(),
            first_identifier: "/a".into(),
        };
        assert_eq!(
            e.to_string(),
            "DUP #1 URI: /b, Digest: 99 (first seen: /a)"
        );
    }

    #[test]
    fn decode_failure_line_format() {
        let e = Event::DecodeFailure {
            ordinal: 1,
            line_no: 7,
            raw_line: "not json".into(),
            failure: DecodeFailure::MissingField { field: "uri" },
        };
        assert_eq!(
            e.to_string(),
            "Error parsing JSON on line 7: not json. Error: missing field `uri`"
        );
    }
}
