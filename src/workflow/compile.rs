//! The make compile step.

use crate::exec::{self, ToolOutcome};
use crate::options::BuildOptions;
use anyhow::Result;
use std::path::Path;

/// Arguments for `make`: the target, when given, restricts the build
/// to it and its dependencies and goes right before the `-j` flag.
pub fn make_args(num_threads: u32, target: Option<&str>) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(target) = target {
        args.push(target.to_string());
    }
    args.push(format!("-j{}", num_threads));
    args
}

pub fn run(opts: &BuildOptions, build_path: &Path) -> Result<ToolOutcome> {
    exec::run_tool(
        "make",
        &make_args(opts.num_threads, opts.target.as_deref()),
        build_path,
        opts.dry_run,
    )
}
