//! Seen-digest index: digest text → first identifier that carried it.

use std::collections::HashMap;

/// Append-only map from claimed digest text to the first identifier seen with it.
#[derive(Debug, Default)]
pub struct DigestIndex {
    first_seen: HashMap<String, String>,
}

impl DigestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `digest → identifier` unless the digest is already present.
    ///
    /// Returns the identifier already stored for `digest` when it is a repeat;
    /// the stored entry is never overwritten.
    pub fn insert_or_get(&mut self, digest: &str, identifier: &str) -> Option<&str> {
        if self.first_seen.contains_key(digest) {
            return self.first_seen.get(digest).map(String::as_str);
        }
        self.first_seen.insert(digest.to_owned(), identifier.to_owned());
        None
    }

    pub fn first_identifier(&self, digest: &str) -> Option<&str> {
        self.first_seen.get(digest).map(String::as_str)
    }

    pub fn contains(&self, digest: &str) -> bool {
        self.first_seen.contains_key(digest)
    }

    /// Number of distinct digests seen.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}
