//! Scan driver: stream lines from a reader through the decoder and verifier.
//!
//! Recoverable per-record problems are reported to the sink and the scan
//! continues. Only I/O errors on the underlying reader abort the scan.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::checksum::{ChecksumFunction, Crc32};
use crate::record::{decode_bytes, trim_line_terminator};
use crate::report::ReportSink;
use crate::verify::{Summary, Verifier};

const BUF_SIZE: usize = 64 * 1024;

/// Feed every line of `reader` through `verifier`, reporting events to `sink`.
///
/// Returns the summary once the reader is exhausted.
pub fn scan_reader<R, C, S>(
    mut reader: R,
    verifier: &mut Verifier<C>,
    sink: &mut S,
) -> Result<Summary>
where
    R: BufRead,
    C: ChecksumFunction,
    S: ReportSink + ?Sized,
{
    let mut buf = Vec::with_capacity(256);
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read line {}", line_no + 1))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        match decode_bytes(&buf) {
            Ok(record) => {
                for event in verifier.observe(&record).into_events() {
                    sink.report(&event);
                }
            }
            Err(failure) => {
                let raw = String::from_utf8_lossy(&buf);
                let raw = trim_line_terminator(&raw);
                tracing::debug!(line_no, error = %failure, "decode failure");
                let event = verifier.record_decode_failure(line_no, raw, failure);
                sink.report(&event);
            }
        }
    }

    Ok(verifier.summarize())
}

/// Open `path` and scan it with a fresh CRC-32 verifier.
pub fn scan_path<S>(path: &Path, sink: &mut S) -> Result<Summary>
where
    S: ReportSink + ?Sized,
{
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::with_capacity(BUF_SIZE, file);
    let mut verifier = Verifier::new(Crc32);

    tracing::info!("scan started: {}", path.display());
    let summary = scan_reader(reader, &mut verifier, sink)
        .with_context(|| format!("scan {}", path.display()))?;
    tracing::info!(
        total = summary.total,
        duplicates = summary.duplicates,
        mismatches = summary.mismatches,
        decode_failures = summary.decode_failures,
        distinct_digests = verifier.index().len(),
        "scan finished: {}",
        path.display()
    );
    if verifier.index().is_empty() {
        tracing::warn!("no records decoded from {}", path.display());
    }

    Ok(summary)
}
