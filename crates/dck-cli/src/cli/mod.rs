//! CLI for the DCK digest corpus checker.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dck_core::config::{self, ColorMode, DckConfig};
use dck_core::generate::DEFAULT_COUNT;
use std::path::Path;

use commands::{run_check, run_generate, CheckOptions};

/// Top-level CLI for the DCK checker.
#[derive(Debug, Parser)]
#[command(name = "dck")]
#[command(about = "DCK: verify CRC-32 digests of URI records in JSONL files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// `--color` values; mirrors the config file's `color` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a JSONL file of {"uri": ..., "digest": ...} records.
    Check {
        /// Path to the JSONL file.
        path: String,
        /// Color diagnostics: auto, always or never (overrides config).
        #[arg(long, value_enum, value_name = "WHEN")]
        color: Option<ColorArg>,
        /// Also print the summary as a JSON object.
        #[arg(long)]
        json: bool,
        /// Print at most N per-event diagnostics (counters stay exact).
        #[arg(long, value_name = "N")]
        max_reports: Option<u64>,
    },

    /// Generate a random corpus of identifiers with correct digests.
    Generate {
        /// Number of records to generate.
        #[arg(long, default_value_t = DEFAULT_COUNT, value_name = "N")]
        count: usize,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        // A broken config must not block a check; fall back to defaults.
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            DckConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                path,
                color,
                json,
                max_reports,
            } => {
                let opts = CheckOptions::resolve(&cfg, color.map(Into::into), json, max_reports);
                run_check(Path::new(&path), &opts)?;
            }
            CliCommand::Generate {
                count,
                seed,
                output,
            } => run_generate(count, seed, output.as_deref().map(Path::new))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
