//! # cmx - CMake workflow wrapper
//!
//! cmx wraps the classic CMake out-of-source dance behind one command:
//! resolve a `<base>_<build-type>` directory, configure it when the
//! `CMakeCache.txt` marker is missing or a reconfigure was forced,
//! compile with make, and optionally run ctest in random order.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fresh Release build with tests, 4 ways parallel
//! cmx --build-type Release --num-threads 4 --enable-testing
//!
//! # Rebuild one target without reconfiguring
//! cmx --target operator_ui
//! ```
//!
//! ## Module Organization
//!
//! - [`options`] - The per-run configuration record and path resolution
//! - [`probe`] - Read-only build-directory state checks
//! - [`workflow`] - The configure → build → test sequence
//! - [`exec`] - External tool invocation and missing-tool reporting

/// Build directory cleanup (`cmx clean`).
pub mod clean;

/// External tool invocation.
pub mod exec;

/// System and project status report (`cmx info`).
pub mod info;

/// Per-run configuration resolved from the command line.
pub mod options;

/// Build-directory state probes.
pub mod probe;

/// Terminal UI utilities (tables, colors).
pub mod ui;

/// The configure → build → test workflow.
pub mod workflow;
