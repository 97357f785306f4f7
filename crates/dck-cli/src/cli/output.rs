//! Colored terminal rendering of scan events and the summary.

use colored::Colorize;
use dck_core::config::ColorMode;
use dck_core::report::{Event, ReportSink};
use dck_core::verify::Summary;
use std::io::{self, IsTerminal, Write};

/// Apply the color mode to the `colored` crate's global switch.
pub fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if !io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}

/// Prints each event as soon as it is reported, up to an optional cap.
///
/// Write errors are kept and surfaced by [`TerminalReporter::finish`], since
/// [`ReportSink::report`] cannot fail.
pub struct TerminalReporter<W: Write> {
    out: W,
    max_reports: Option<u64>,
    printed: u64,
    suppressed: u64,
    error: Option<io::Error>,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, max_reports: Option<u64>) -> Self {
        Self {
            out,
            max_reports,
            printed: 0,
            suppressed: 0,
            error: None,
        }
    }

    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    /// Print the suppression notice (if any) and the summary line(s).
    pub fn finish(mut self, summary: &Summary, json: bool) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.suppressed > 0 {
            let note = format!("... {} more diagnostics not shown", self.suppressed);
            writeln!(self.out, "{}", note.dimmed())?;
        }
        let line = summary.to_string();
        if summary.is_clean() {
            writeln!(self.out, "{}", line.green().bold())?;
        } else {
            writeln!(self.out, "{}", line.red().bold())?;
        }
        if json {
            let encoded = serde_json::to_string(summary).map_err(io::Error::other)?;
            writeln!(self.out, "{}", encoded)?;
        }
        self.out.flush()
    }

    fn write_event(&mut self, event: &Event) -> io::Result<()> {
        let text = event.to_string();
        match event {
            Event::Duplicate { .. } => writeln!(self.out, "{}", text.yellow()),
            _ => writeln!(self.out, "{}", text.red()),
        }
    }
}

impl<W: Write> ReportSink for TerminalReporter<W> {
    fn report(&mut self, event: &Event) {
        if self.error.is_some() {
            return;
        }
        if self.max_reports.is_some_and(|max| self.printed >= max) {
            self.suppressed += 1;
            return;
        }
        match self.write_event(event) {
            Ok(()) => self.printed += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
