//! Common test utilities for gmtree CLI tests.
//!
//! Provides `TestEnv`: an isolated config home plus helpers to run the
//! binary with piped stdin and a scrubbed `GMTREE_*` environment.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Variables that would leak the developer's environment into a test
const SCRUBBED_VARS: &[&str] = &[
    "GMTREE_INDENT",
    "GMTREE_CHARSET",
    "GMTREE_FILTER",
    "GMTREE_FILTER_NO_VERSION",
    "GMTREE_DEBUG",
    "RUST_LOG",
    "MSYSTEM",
];

/// Result of running the gmtree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Stdout split into lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Isolated environment: `XDG_CONFIG_HOME` and `HOME` point at a temp dir
pub struct TestEnv {
    pub home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create temp home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_gmtree")),
        }
    }

    /// Path under the temp home
    pub fn path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Write a file under the temp home and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the user config picked up when no `--config` is given
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write_file(".config/gmtree/config.toml", content)
    }

    /// Run with `stdin` piped in
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    /// Run with `stdin` piped in and extra environment variables
    pub fn run_with_env(&self, args: &[&str], stdin: &str, env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute gmtree");
        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            // The binary may exit before reading everything (e.g. on --help)
            let _ = pipe.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for gmtree");
        to_result(output)
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// `go mod graph` excerpt shared by several tests
pub const MODULE_GRAPH: &str = "\
example.com/app github.com/spf13/cobra@v1.8.0
example.com/app golang.org/x/text@v0.14.0
github.com/spf13/cobra@v1.8.0 github.com/inconshreveable/mousetrap@v1.1.0
github.com/spf13/cobra@v1.8.0 github.com/spf13/pflag@v1.0.5
golang.org/x/text@v0.14.0 golang.org/x/tools@v0.6.0
golang.org/x/tools@v0.6.0 golang.org/x/text@v0.3.7
";
