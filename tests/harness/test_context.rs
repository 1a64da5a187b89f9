//! Shared testing harness for `deployenv` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory the binary is invoked from.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `deployenv` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deployenv").expect("Failed to locate deployenv binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.root.path()).env_remove("RUST_LOG");
        cmd
    }

    /// Join answers into piped stdin, one per line.
    pub(crate) fn answers(lines: &[&str]) -> String {
        lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Path to a service's env file.
    pub(crate) fn env_file(&self, service: &str) -> PathBuf {
        self.work_dir.join(service).join("env").join(".env")
    }

    /// Read a service's env file.
    pub(crate) fn read_env_file(&self, service: &str) -> String {
        fs::read_to_string(self.env_file(service))
            .unwrap_or_else(|e| panic!("Failed to read env file for {service}: {e}"))
    }

    /// Seed an env file before running the binary.
    pub(crate) fn write_env_file(&self, service: &str, content: &str) {
        let path = self.env_file(service);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create env dir");
        fs::write(&path, content).expect("Failed to seed env file");
    }

    /// Path to the generated deploy script.
    pub(crate) fn deploy_script(&self) -> PathBuf {
        self.work_dir.join("deploy_services.sh")
    }

    /// Assert that a service's env file exists.
    pub(crate) fn assert_env_file_exists(&self, service: &str) {
        let path = self.env_file(service);
        assert!(path.exists(), "env file should exist at {}", path.display());
    }

    /// Assert that a service's env file does not exist.
    pub(crate) fn assert_env_file_not_exists(&self, service: &str) {
        let path = self.env_file(service);
        assert!(!path.exists(), "env file should not exist at {}", path.display());
    }
}
