//! External tool invocation.
//!
//! cmake, make, and ctest are opaque collaborators; they inherit
//! stdout/stderr so their own output reaches the user unfiltered. A
//! missing executable is reported by name instead of surfacing a raw
//! `std::io::Error`, and the caller decides whether to keep going.

use anyhow::{Context, Result};
use colored::*;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// What became of one external invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The tool ran; `true` iff it exited zero.
    Ran(bool),
    /// The executable was not on PATH.
    Missing,
    /// Dry run, nothing was spawned.
    Skipped,
}

/// Run `program args..` with `cwd` as working directory.
///
/// A non-zero exit is reported but not treated as an error; exit codes
/// of the native tools are informational here.
pub fn run_tool(program: &str, args: &[String], cwd: &Path, dry_run: bool) -> Result<ToolOutcome> {
    if dry_run {
        println!(
            "   {} {} {}",
            "would run:".dimmed(),
            program.cyan(),
            args.join(" ")
        );
        return Ok(ToolOutcome::Skipped);
    }

    match Command::new(program).args(args).current_dir(cwd).status() {
        Ok(status) => {
            if !status.success() {
                println!("{} {} exited with {}", "!".yellow(), program.bold(), status);
            }
            Ok(ToolOutcome::Ran(status.success()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!(
                "{} '{}' not found. Please install it first.",
                "x".red(),
                program
            );
            Ok(ToolOutcome::Missing)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to spawn '{}' in {}", program, cwd.display()))
        }
    }
}

/// First line of `program --version`, if the tool is installed.
pub fn probe_version(program: &str) -> Option<String> {
    let output = Command::new(program).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(stdout.lines().next().unwrap_or("Detected").trim().to_string())
}
