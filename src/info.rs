//! System and project status report.
//!
//! Shows which of the wrapped tools are installed and what state each
//! build-type variant of the build directory is in.

use crate::exec;
use crate::options::{BuildOptions, BuildType};
use crate::probe;
use crate::ui;
use anyhow::Result;
use colored::*;
use std::path::Path;

pub fn print_info(project_dir: &Path, base: &str) -> Result<()> {
    println!("{} v{}", "cmx".bold().cyan(), env!("CARGO_PKG_VERSION"));
    println!("{}: {}", "Project root".bold(), project_dir.display());

    println!("\n{}", "Build Tools:".bold());
    let mut table = ui::Table::new(&["Status", "Tool", "Version"]);
    for tool in ["cmake", "make", "ctest"] {
        let (status, version) = match exec::probe_version(tool) {
            Some(version) => ("✓".green().to_string(), version),
            None => ("x".red().to_string(), "Not Found".dimmed().to_string()),
        };
        table.add_row(vec![status, tool.to_string(), version]);
    }
    table.print();

    println!("\n{}", "Build Directories:".bold());
    let mut table = ui::Table::new(&["Directory", "State"]);
    for bt in BuildType::all() {
        let dir = project_dir.join(BuildOptions::dir_name(base, bt));
        let state = if probe::needs_initial_configuration(&dir) {
            "not created".dimmed().to_string()
        } else if probe::is_partially_configured(&dir) {
            "needs configure".yellow().to_string()
        } else {
            "configured".green().to_string()
        };
        table.add_row(vec![
            BuildOptions::dir_name(base, bt).cyan().to_string(),
            state,
        ]);
    }
    table.print();

    Ok(())
}
