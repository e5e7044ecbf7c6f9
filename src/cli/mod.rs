//! CLI command implementations

mod merge;
mod style;

pub use merge::{print_dry_run, run_merge};
