//! Build directory cleanup.
//!
//! `cmx clean` removes the resolved build directory for the selected
//! build type; `cmx clean --all` sweeps every build-type variant of
//! the same base name.

use crate::options::{BuildOptions, BuildType};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

pub fn clean(project_dir: &Path, base: &str, build_type: BuildType, all: bool) -> Result<()> {
    let variants: Vec<BuildType> = if all {
        BuildType::all().to_vec()
    } else {
        vec![build_type]
    };

    let mut cleaned = false;
    for bt in variants {
        let dir = project_dir.join(BuildOptions::dir_name(base, bt));
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove {}", dir.display()))?;
            println!("{} Removed {}", "🗑️".red(), dir.display());
            cleaned = true;
        }
    }

    if cleaned {
        println!("{} Clean complete.", "✓".green());
    } else {
        println!("{} Nothing to clean", "!".yellow());
    }
    Ok(())
}
