//! Run counters and the end-of-run summary.

use serde::Serialize;
use std::fmt;

/// Counters for one pass over an input. Only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounters {
    /// Records decoded and observed (decode failures excluded).
    pub total: u64,
    pub duplicates: u64,
    pub mismatches: u64,
    pub decode_failures: u64,
}

/// Snapshot of [`RunCounters`] handed out at the end of a run.
pub type Summary = RunCounters;

impl RunCounters {
    /// Raw lines read: every line is either observed or a decode failure.
    pub fn lines(&self) -> u64 {
        self.total + self.decode_failures
    }

    /// True when nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.duplicates == 0 && self.mismatches == 0 && self.decode_failures == 0
    }
}

impl fmt::Display for RunCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Check: total={}, dup={}, err={}, decode_failures={}.",
            self.total, self.duplicates, self.mismatches, self.decode_failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display() {
        let s = Summary {
            total: 2,
            duplicates: 1,
            mismatches: 1,
            decode_failures: 1,
        };
        assert_eq!(
            s.to_string(),
            "Check: total=2, dup=1, err=1, decode_failures=1."
        );
        assert_eq!(s.lines(), 3);
        assert!(!s.is_clean());
    }

    #[test]
    fn summary_json() {
        let s = Summary {
            total: 3,
            ..Summary::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"{"total":3,"duplicates":0,"mismatches":0,"decode_failures":0}"#
        );
        assert!(s.is_clean());
    }
}
