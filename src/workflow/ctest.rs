//! The ctest step.

use crate::exec::{self, ToolOutcome};
use crate::options::BuildOptions;
use anyhow::Result;
use std::path::Path;

/// Arguments for `ctest`. Random scheduling shakes out inter-test
/// ordering dependencies.
pub fn ctest_args(num_threads: u32) -> Vec<String> {
    vec![format!("-j{}", num_threads), "--schedule-random".to_string()]
}

pub fn run(opts: &BuildOptions, build_path: &Path) -> Result<ToolOutcome> {
    exec::run_tool(
        "ctest",
        &ctest_args(opts.num_threads),
        build_path,
        opts.dry_run,
    )
}
