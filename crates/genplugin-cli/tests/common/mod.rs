//! Common test utilities for CLI testing.

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a temporary working directory
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Get path to the temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("genplugin").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1"); // Disable colors for predictable output
        cmd
    }

    /// Run the scaffolder with `name` piped as the one line of input
    pub fn scaffold(&self, name: &str) -> Output {
        self.command()
            .write_stdin(format!("{name}\n"))
            .output()
            .expect("Failed to run genplugin")
    }

    /// Path to a file the scaffolder generated
    pub fn generated(&self, dir: &str, file: &str) -> PathBuf {
        self.path().join(dir).join(file)
    }

    /// Read a generated file to a string
    pub fn read(&self, dir: &str, file: &str) -> String {
        std::fs::read_to_string(self.generated(dir, file)).expect("Failed to read generated file")
    }

    /// Number of entries directly under the temp directory
    pub fn entry_count(&self) -> usize {
        std::fs::read_dir(self.path()).expect("Failed to read temp dir").count()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_failure(&self);
    fn assert_stdout_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_failure(&self) {
        assert!(
            !self.status.success(),
            "Command succeeded unexpectedly\nstdout: {}",
            String::from_utf8_lossy(&self.stdout)
        );
    }

    fn assert_stdout_contains(&self, text: &str) {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert!(
            stdout.contains(text),
            "stdout did not contain '{}'\nstdout: {}",
            text,
            stdout
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {}, got {:?}",
            code,
            self.status.code()
        );
    }
}
