//! Verification engine: recompute each record's checksum, compare it with the
//! claimed digest, and detect digests that occur more than once.
//!
//! The engine holds no I/O. It is fed one [`Record`] at a time and returns
//! the events that record produced; the caller decides where they go.

mod index;
mod summary;

pub use index::DigestIndex;
pub use summary::{RunCounters, Summary};

use crate::checksum::{ChecksumFunction, Crc32};
use crate::record::{DecodeFailure, Record};
use crate::report::Event;

/// Events produced by a single [`Verifier::observe`] call.
///
/// Integrity and duplicate checks are independent: a record can trigger both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    /// `Mismatch` or `Unhashable`.
    pub integrity: Option<Event>,
    pub duplicate: Option<Event>,
}

impl Observation {
    pub fn is_clean(&self) -> bool {
        self.integrity.is_none() && self.duplicate.is_none()
    }

    /// Events in report order (integrity first).
    pub fn into_events(self) -> impl Iterator<Item = Event> {
        self.integrity.into_iter().chain(self.duplicate)
    }
}

/// Streaming verifier: owns the checksum function, digest index and counters
/// for one pass over an input.
#[derive(Debug)]
pub struct Verifier<C = Crc32> {
    checksum: C,
    index: DigestIndex,
    counters: RunCounters,
}

impl<C: ChecksumFunction> Verifier<C> {
    pub fn new(checksum: C) -> Self {
        Self {
            checksum,
            index: DigestIndex::new(),
            counters: RunCounters::default(),
        }
    }

    /// Check one decoded record.
    pub fn observe(&mut self, record: &Record) -> Observation {
        self.counters.total += 1;

        let integrity = self.check_integrity(record);
        let duplicate = self.check_duplicate(record);

        Observation {
            integrity,
            duplicate,
        }
    }

    /// Count a line that did not decode and build its event.
    pub fn record_decode_failure(
        &mut self,
        line_no: u64,
        raw_line: &str,
        failure: DecodeFailure,
    ) -> Event {
        self.counters.decode_failures += 1;
        Event::DecodeFailure {
            ordinal: self.counters.decode_failures,
            line_no,
            raw_line: raw_line.to_owned(),
            failure,
        }
    }

    /// Snapshot of the counters. Does not mutate; safe to call repeatedly.
    pub fn summarize(&self) -> Summary {
        self.counters
    }

    pub fn index(&self) -> &DigestIndex {
        &self.index
    }

    fn check_integrity(&mut self, record: &Record) -> Option<Event> {
        if !record.identifier.is_ascii() {
            self.counters.mismatches += 1;
            tracing::debug!(
                identifier = %record.identifier,
                digest = %record.claimed_digest,
                "identifier is not ASCII"
            );
            return Some(Event::Unhashable {
                ordinal: self.counters.mismatches,
                identifier: record.identifier.clone(),
                claimed_digest: record.claimed_digest.clone(),
            });
        }

        let recomputed = self.checksum.checksum(record.identifier.as_bytes());
        // An unparseable digest can never equal the recomputed value. Surrounding
        // ASCII whitespace is ignored for the comparison only.
        let matches = record
            .claimed_digest
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .parse::<u32>()
            .map(|claimed| claimed == recomputed)
            .unwrap_or(false);
        if matches {
            return None;
        }

        self.counters.mismatches += 1;
        tracing::debug!(
            identifier = %record.identifier,
            claimed = %record.claimed_digest,
            recomputed,
            "digest mismatch"
        );
        Some(Event::Mismatch {
            ordinal: self.counters.mismatches,
            identifier: record.identifier.clone(),
            claimed_digest: record.claimed_digest.clone(),
            recomputed,
        })
    }

    fn check_duplicate(&mut self, record: &Record) -> Option<Event> {
        let first = self
            .index
            .insert_or_get(&record.claimed_digest, &record.identifier)?
            .to_owned();

        self.counters.duplicates += 1;
        tracing::debug!(
            identifier = %record.identifier,
            digest = %record.claimed_digest,
            first_identifier = %first,
            "duplicate digest"
        );
        Some(Event::Duplicate {
            ordinal: self.counters.duplicates,
            identifier: record.identifier.clone(),
            digest: record.claimed_digest.clone(),
            first_identifier: first,
        })
    }
}
