//! Test support utilities for linkseal integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// No process-global state is mutated. Child processes get the secret
/// through `.env()` and run in the temp dir via `.current_dir()`, so tests
/// can run in parallel.
pub struct Test {
    /// Temporary working directory (where `.linkseal.toml` is looked up)
    pub dir: TempDir,
    /// Secret passed to child processes, if any
    pub secret: Option<String>,
}

impl Test {
    /// Environment with the standard test secret.
    pub fn new() -> Self {
        Self::with_secret(TEST_SECRET)
    }

    /// Environment with a specific secret.
    pub fn with_secret(secret: &str) -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            secret: Some(secret.to_string()),
        }
    }

    /// Environment with no secret at all.
    pub fn without_secret() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            secret: None,
        }
    }

    /// Write `.linkseal.toml` into the working directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".linkseal.toml"), contents)
            .expect("failed to write config");
    }
}
