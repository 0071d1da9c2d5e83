//! The cmake configure step.

use crate::exec::{self, ToolOutcome};
use crate::options::{BuildOptions, BuildType};
use crate::probe;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Arguments for `cmake`. The source directory is always `..`, the
/// parent of the build directory cmake runs in.
pub fn cmake_args(build_type: BuildType, enable_testing: bool) -> Vec<String> {
    let testing = if enable_testing {
        "-DENABLE_TESTING=ON"
    } else {
        "-DENABLE_TESTING=OFF"
    };
    vec![
        format!("-DCMAKE_BUILD_TYPE={}", build_type.as_str()),
        testing.to_string(),
        "..".to_string(),
    ]
}

/// Configure the project. Any stale cache is removed first so cmake
/// starts from a clean slate instead of mixing old and new settings.
pub fn run(opts: &BuildOptions, build_path: &Path) -> Result<ToolOutcome> {
    let marker = probe::marker_path(build_path);
    if marker.exists() {
        if opts.dry_run {
            println!("   {} {}", "would remove:".dimmed(), marker.display());
        } else {
            fs::remove_file(&marker)
                .with_context(|| format!("Failed to remove {}", marker.display()))?;
        }
    }

    exec::run_tool(
        "cmake",
        &cmake_args(opts.build_type, opts.enable_testing),
        build_path,
        opts.dry_run,
    )
}
