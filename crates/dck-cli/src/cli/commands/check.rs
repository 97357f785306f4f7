//! `dck check` – verify digests and report mismatches and duplicates.

use anyhow::{Context, Result};
use dck_core::config::{ColorMode, DckConfig};
use dck_core::scan;
use dck_core::verify::Summary;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::output::{apply_color_mode, TerminalReporter};

/// Effective options after merging config with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub color: ColorMode,
    pub json: bool,
    pub max_reports: Option<u64>,
}

impl CheckOptions {
    /// Flags win over config values when given.
    pub fn resolve(
        cfg: &DckConfig,
        color: Option<ColorMode>,
        json: bool,
        max_reports: Option<u64>,
    ) -> Self {
        Self {
            color: color.unwrap_or(cfg.color),
            json: json || cfg.json_summary,
            max_reports: max_reports.or(cfg.max_reports),
        }
    }
}

/// Scan `path`, printing each diagnostic as found and the summary at the end.
///
/// Violations never fail the command; only an unreadable input does.
pub fn run_check(path: &Path, opts: &CheckOptions) -> Result<()> {
    apply_color_mode(opts.color);
    let stdout = io::stdout();
    check_into(path, opts, stdout.lock())?;
    Ok(())
}

/// Same as [`run_check`] but writes to `out`; color mode is left as is.
pub fn check_into<W: Write>(path: &Path, opts: &CheckOptions, out: W) -> Result<Summary> {
    let mut reporter = TerminalReporter::new(out, opts.max_reports);
    let summary = scan::scan_path(path, &mut reporter)?;
    if reporter.suppressed() > 0 {
        tracing::debug!(suppressed = reporter.suppressed(), "diagnostics capped");
    }
    reporter.finish(&summary, opts.json).context("write report")?;
    Ok(summary)
}
