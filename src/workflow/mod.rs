//! The configure → build → test workflow.
//!
//! Three linear steps over one build directory. Configure runs only
//! when the directory is fresh, partially configured, or a reconfigure
//! was forced; build always runs; ctest runs only when testing was
//! enabled. A missing external tool aborts the remaining steps.

mod compile;
mod configure;
mod ctest;

pub use compile::make_args;
pub use configure::cmake_args;
pub use ctest::ctest_args;

use crate::exec::ToolOutcome;
use crate::options::BuildOptions;
use crate::probe;
use anyhow::{Context, Result};
use colored::*;
use std::fs;

/// Drive one full run. Returns `Ok(false)` when a required tool was
/// missing and the rest of the workflow was skipped.
pub fn run(opts: &BuildOptions) -> Result<bool> {
    let build_path = opts.build_path();
    let dir_name = BuildOptions::dir_name(&opts.build_dir, opts.build_type);

    if probe::needs_initial_configuration(&build_path) {
        if opts.dry_run {
            println!(
                "   {} {}",
                "would create:".dimmed(),
                build_path.display()
            );
        } else {
            fs::create_dir_all(&build_path)
                .with_context(|| format!("Failed to create {}", build_path.display()))?;
        }
        println!(
            "{} Configuring {} ({})...",
            "🔧".cyan(),
            dir_name.bold(),
            opts.build_type.as_str()
        );
        if configure::run(opts, &build_path)? == ToolOutcome::Missing {
            return abort("configure");
        }
    } else if opts.clear_cache || probe::is_partially_configured(&build_path) {
        println!(
            "{} Reconfiguring {} ({})...",
            "🔧".cyan(),
            dir_name.bold(),
            opts.build_type.as_str()
        );
        if configure::run(opts, &build_path)? == ToolOutcome::Missing {
            return abort("configure");
        }
    } else {
        println!(
            "{} {} already configured, skipping configure step.",
            "!".yellow(),
            dir_name.bold()
        );
    }

    match &opts.target {
        Some(target) => println!("{} Building target {}...", "📦".blue(), target.bold()),
        None => println!("{} Building all targets...", "📦".blue()),
    }
    if compile::run(opts, &build_path)? == ToolOutcome::Missing {
        return abort("build");
    }

    // Test failures are the tests' business; a failed make still gets
    // its partial results exercised.
    if opts.enable_testing {
        println!("{} Running tests...", "🧪".magenta());
        if ctest::run(opts, &build_path)? == ToolOutcome::Missing {
            return abort("test");
        }
    }

    println!("{} Done.", "✓".green());
    Ok(true)
}

fn abort(step: &str) -> Result<bool> {
    println!(
        "{} The {} step could not run; skipping what remains.",
        "!".yellow(),
        step
    );
    Ok(false)
}
