//! CLI command handlers, one per file.

mod check;
mod generate;

pub use check::{check_into, run_check, CheckOptions};
pub use generate::run_generate;
