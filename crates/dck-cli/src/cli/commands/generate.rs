//! `dck generate` – write a random corpus with correct digests.

use anyhow::{Context, Result};
use dck_core::generate::Generator;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

pub fn run_generate(count: usize, seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let mut generator = Generator::new(seed);
    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            generator
                .write_corpus(count, &mut out)
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!(count, "generated corpus at {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            generator.write_corpus(count, &mut out)?;
        }
    }
    Ok(())
}
