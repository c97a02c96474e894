//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated data directories
//! - Placing catalog and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use tradify_testing::TestWorld;
///
/// let world = TestWorld::new().with_blue_catalog();
///
/// let result = world.run(&["search", "blue"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tradify");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            catalog: None,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.tradify).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file the CLI will read.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Use the two-product "blue" catalog instead of the built-in one.
    pub fn with_blue_catalog(mut self) -> Self {
        let path = self.temp_dir.path().join("blue.json");
        fixtures::write_blue_catalog(&path).expect("Failed to write catalog");
        self.catalog = Some(path);
        self
    }

    /// Use a catalog file with the given JSON contents.
    pub fn with_catalog_json(mut self, json: &str) -> Self {
        let path = self.temp_dir.path().join("catalog.json");
        std::fs::write(&path, json).expect("Failed to write catalog");
        self.catalog = Some(path);
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(catalog) = &self.catalog {
            cmd.arg("--catalog").arg(catalog);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("TRADIFY_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tradify")
            .map_err(|e| anyhow::anyhow!("Failed to find tradify binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full_args = vec!["--format", "json"];
        full_args.extend_from_slice(args);

        let result = self.run(&full_args)?;
        if !result.success() {
            anyhow::bail!("Command failed: {}", result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
