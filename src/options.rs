//! Build options resolved from the command line.
//!
//! A [`BuildOptions`] record is constructed once at startup and never
//! mutated afterwards. The resolved build directory is derived from the
//! base name and the build type: `build` + `Release` becomes
//! `build_release` under the project root.

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// CMake configuration variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildType {
    #[value(name = "Debug")]
    Debug,
    #[value(name = "Release")]
    Release,
    #[value(name = "RelWithDebInfo")]
    RelWithDebInfo,
}

impl BuildType {
    /// Spelling understood by `-DCMAKE_BUILD_TYPE=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
        }
    }

    /// All variants, in the order `clean --all` sweeps them.
    pub fn all() -> [BuildType; 3] {
        [
            BuildType::Debug,
            BuildType::Release,
            BuildType::RelWithDebInfo,
        ]
    }
}

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub build_type: BuildType,
    pub num_threads: u32,
    pub build_dir: String,
    pub clear_cache: bool,
    pub enable_testing: bool,
    pub target: Option<String>,
    pub dry_run: bool,
    /// Absolute project root; the parent of the build directory.
    pub project_dir: PathBuf,
}

impl BuildOptions {
    /// Directory name for a base/type pair, e.g. `build_relwithdebinfo`.
    pub fn dir_name(base: &str, build_type: BuildType) -> String {
        format!("{}_{}", base, build_type.as_str()).to_lowercase()
    }

    /// Full path of the build directory under the project root.
    pub fn build_path(&self) -> PathBuf {
        self.project_dir
            .join(Self::dir_name(&self.build_dir, self.build_type))
    }
}

/// Resolve a possibly-relative project directory against the process
/// working directory. An absolute argument is kept as-is.
pub fn resolve_project_dir(dir: &Path) -> anyhow::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(dir))
}
