//! Read-only filesystem probes over the build directory.
//!
//! CMake leaves a `CMakeCache.txt` behind after a successful configure
//! pass. Its mere existence is the signal consulted here; the content
//! is never parsed.

use std::path::{Path, PathBuf};

/// Marker file CMake writes once a directory is configured.
pub const CONFIG_MARKER: &str = "CMakeCache.txt";

pub fn marker_path(build_path: &Path) -> PathBuf {
    build_path.join(CONFIG_MARKER)
}

/// True iff the build directory does not exist yet.
pub fn needs_initial_configuration(build_path: &Path) -> bool {
    !build_path.exists()
}

/// True iff the build directory exists but was never configured, or a
/// previous configure pass did not get far enough to write the cache.
pub fn is_partially_configured(build_path: &Path) -> bool {
    build_path.exists() && !marker_path(build_path).exists()
}
