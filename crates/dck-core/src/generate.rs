//! Random corpus generator for exercising the checker.
//!
//! Produces identifiers of the form `/` + `[0-9a-zA-Z/]*` with lengths in
//! `MIN_LEN..=MAX_LEN`, each paired with its CRC-32 digest, one JSON object
//! per line.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;

use crate::checksum::crc32_str;

pub const DEFAULT_COUNT: usize = 2000;
pub const MIN_LEN: usize = 5;
pub const MAX_LEN: usize = 127;

/// Slash is drawn 3 times in 65, the rest once each.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ///";

#[derive(Debug, Serialize)]
struct Line<'a> {
    uri: &'a str,
    digest: String,
}

/// Random identifier source. Seeded for reproducible corpora.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// One identifier: leading `/` then `len - 1` characters from the alphabet.
    pub fn identifier(&mut self) -> String {
        let len = self.rng.gen_range(MIN_LEN..=MAX_LEN);
        let mut s = String::with_capacity(len);
        s.push('/');
        for _ in 1..len {
            let i = self.rng.gen_range(0..ALPHABET.len());
            s.push(ALPHABET[i] as char);
        }
        s
    }

    /// Write `count` JSONL records to `out`.
    pub fn write_corpus<W: Write>(&mut self, count: usize, out: &mut W) -> Result<()> {
        for _ in 0..count {
            let uri = self.identifier();
            let line = Line {
                uri: &uri,
                digest: crc32_str(&uri).to_string(),
            };
            serde_json::to_writer(&mut *out, &line).context("serialize record")?;
            out.write_all(b"\n").context("write record")?;
        }
        out.flush().context("flush corpus")?;
        tracing::debug!(count, "corpus generated");
        Ok(())
    }
}
