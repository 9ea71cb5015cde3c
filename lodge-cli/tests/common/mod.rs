//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the lodge data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// This creates:
    /// - A temporary directory for test files
    /// - A data directory path (not created yet - lodge will create it)
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("lodge-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Use this when you need to override the data directory or test
    /// global flag behavior.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lodge").expect("Failed to find lodge binary");
        // Keep tests hermetic even if the host has LODGE_* set
        cmd.env_remove("LODGE_DATA_DIR")
            .env_remove("LODGE_OUTPUT_FORMAT")
            .env_remove("LODGE_DISABLE_AUTOINIT");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Add a room and return its id.
    ///
    /// # Panics
    /// Panics if the add-room command fails or doesn't print a room id.
    pub fn add_room(&self, room_type: &str, price: &str) -> i64 {
        let output = self
            .command()
            .args(["add-room", "--type", room_type, "--price", price])
            .output()
            .expect("Failed to run add-room command");

        assert!(
            output.status.success(),
            "add-room failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid room id")
    }

    /// Register a user and return their id.
    pub fn register_user(&self, name: &str, email: &str) -> i64 {
        let output = self
            .command()
            .args([
                "register",
                "--name",
                name,
                "--email",
                email,
                "--password-hash",
                "cli-test-hash",
            ])
            .output()
            .expect("Failed to run register command");

        assert!(
            output.status.success(),
            "register failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().parse().expect("Output is not a valid user id")
    }

    /// Book a room and return the confirmation code.
    pub fn book(&self, user_id: i64, room_id: i64, check_in: &str, check_out: &str) -> String {
        let output = self
            .command()
            .args([
                "book",
                "--user",
                &user_id.to_string(),
                "--room",
                &room_id.to_string(),
                "--check-in",
                check_in,
                "--check-out",
                check_out,
            ])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");
        stdout.trim().to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Future-dated ISO dates for booking fixtures, so bookings are never
/// rejected as being in the past.
#[allow(dead_code)]
pub fn future_window(nights: u32) -> (String, String) {
    let check_in = chrono::Local::now().date_naive() + chrono::Days::new(30);
    let check_out = check_in + chrono::Days::new(u64::from(nights));
    (check_in.to_string(), check_out.to_string())
}
