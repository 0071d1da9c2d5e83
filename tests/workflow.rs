//! End-to-end workflow tests.
//!
//! These run the compiled `cmx` binary against stub cmake/make/ctest
//! scripts placed first on PATH. The stubs append their argument lines
//! to a log file so the tests can assert which tools ran, in which
//! order, and with which flags.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Get the path to the cmx binary
fn get_cmx_binary() -> PathBuf {
    let target_dir = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target"));

    target_dir.join("debug").join("cmx")
}

/// Write stub cmake/make/ctest scripts into `dir`.
///
/// Each stub logs `<tool> <args>` to `$CMX_TEST_LOG`; the cmake stub
/// also records whether `CMakeCache.txt` existed when it was invoked,
/// then creates it the way real cmake would. The make stub exits with
/// `$CMX_MAKE_EXIT` when set.
fn write_stub_tools(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let stubs = [
        (
            "cmake",
            "#!/bin/sh\n\
             if [ -e CMakeCache.txt ]; then\n\
               printf 'cmake marker-present %s\\n' \"$*\" >> \"$CMX_TEST_LOG\"\n\
             else\n\
               printf 'cmake marker-absent %s\\n' \"$*\" >> \"$CMX_TEST_LOG\"\n\
             fi\n\
             : > CMakeCache.txt\n",
        ),
        (
            "make",
            "#!/bin/sh\n\
             printf 'make %s\\n' \"$*\" >> \"$CMX_TEST_LOG\"\n\
             exit \"${CMX_MAKE_EXIT:-0}\"\n",
        ),
        (
            "ctest",
            "#!/bin/sh\n\
             printf 'ctest %s\\n' \"$*\" >> \"$CMX_TEST_LOG\"\n",
        ),
    ];

    for (name, body) in stubs {
        let path = dir.join(name);
        fs::write(&path, body).expect("Failed to write stub tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub tool");
    }
}

struct Fixture {
    root: tempfile::TempDir,
    project: PathBuf,
    stub_bin: PathBuf,
    log: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let project = root.path().join("project");
        let stub_bin = root.path().join("bin");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&stub_bin).unwrap();
        write_stub_tools(&stub_bin);
        let log = root.path().join("tools.log");
        Self {
            root,
            project,
            stub_bin,
            log,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    fn run_with_env(&self, args: &[&str], extra_env: &[(&str, &str)]) -> Output {
        let path = format!(
            "{}:{}",
            self.stub_bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::new(get_cmx_binary());
        cmd.args(args)
            .arg("--project-dir")
            .arg(&self.project)
            .env("PATH", path)
            .env("CMX_TEST_LOG", &self.log);
        for (key, value) in extra_env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to execute cmx")
    }

    fn log_lines(&self) -> Vec<String> {
        if !self.log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    fn clear_log(&self) {
        fs::write(&self.log, "").unwrap();
    }
}

fn binary_missing() -> bool {
    let cmx = get_cmx_binary();
    if !cmx.exists() {
        eprintln!("Skipping test: cmx binary not found at {:?}", cmx);
        return true;
    }
    false
}

#[test]
fn fresh_release_build_configures_then_builds() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();

    let output = fx.run(&["--build-type", "Release", "--num-threads", "4"]);
    assert!(
        output.status.success(),
        "cmx failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let build_dir = fx.project.join("build_release");
    assert!(build_dir.exists(), "build_release/ not created");
    assert!(
        build_dir.join("CMakeCache.txt").exists(),
        "configure left no cache behind"
    );

    let lines = fx.log_lines();
    assert_eq!(
        lines,
        vec![
            "cmake marker-absent -DCMAKE_BUILD_TYPE=Release -DENABLE_TESTING=OFF ..",
            "make -j4",
        ],
        "unexpected tool invocations"
    );
}

#[test]
fn second_run_skips_configure() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();

    assert!(fx.run(&[]).status.success());
    fx.clear_log();

    let output = fx.run(&[]);
    assert!(output.status.success());

    let lines = fx.log_lines();
    assert!(
        !lines.iter().any(|l| l.starts_with("cmake")),
        "configure should be skipped when the cache exists: {:?}",
        lines
    );
    assert_eq!(lines, vec!["make -j8"]);
}

#[test]
fn clear_cache_removes_marker_before_configure() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();

    assert!(fx.run(&[]).status.success());
    assert!(fx.project.join("build_debug").join("CMakeCache.txt").exists());
    fx.clear_log();

    let output = fx.run(&["--clear-cache"]);
    assert!(output.status.success());

    let lines = fx.log_lines();
    // The stub saw no cache file, so cmx deleted it before invoking cmake.
    assert_eq!(
        lines[0],
        "cmake marker-absent -DCMAKE_BUILD_TYPE=Debug -DENABLE_TESTING=OFF .."
    );
}

#[test]
fn partially_configured_directory_reconfigures() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();
    fs::create_dir_all(fx.project.join("build_debug")).unwrap();

    let output = fx.run(&[]);
    assert!(output.status.success());

    let lines = fx.log_lines();
    assert!(
        lines[0].starts_with("cmake marker-absent"),
        "directory without a cache must be reconfigured: {:?}",
        lines
    );
}

#[test]
fn target_restricts_the_build() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();

    let output = fx.run(&["--target", "operator_ui"]);
    assert!(output.status.success());

    let lines = fx.log_lines();
    assert!(
        lines.contains(&"make operator_ui -j8".to_string()),
        "target should come right before the -j flag: {:?}",
        lines
    );
}

#[test]
fn ctest_runs_after_a_failed_make() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();

    let output = fx.run_with_env(&["--enable-testing"], &[("CMX_MAKE_EXIT", "2")]);
    // A tool's exit status is reported, not propagated.
    assert!(
        output.status.success(),
        "make's exit code must not become cmx's: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    let lines = fx.log_lines();
    assert_eq!(
        lines,
        vec![
            "cmake marker-absent -DCMAKE_BUILD_TYPE=Debug -DENABLE_TESTING=ON ..",
            "make -j8",
            "ctest -j8 --schedule-random",
        ]
    );
}

#[test]
fn missing_tools_abort_with_nonzero_exit() {
    if binary_missing() {
        return;
    }
    let fx = Fixture::new();
    let empty = fx.root.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    let output = Command::new(get_cmx_binary())
        .arg("--project-dir")
        .arg(&fx.project)
        .env("PATH", &empty)
        .output()
        .expect("Failed to execute cmx");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("'cmake' not found"),
        "missing tool should be named: {}",
        stdout
    );
    // The build step must not have been attempted against the
    // unconfigured directory.
    assert!(fx.log_lines().is_empty());
}
