//! Test environment builder for isolated payladder runs.
//!
//! Every `TestEnv` owns a temp directory used as the working directory of
//! the binary. Reference tables go to `data/` under it, which is the default
//! data dir, and user-level config lookups are pointed inside it as well.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

use super::fixtures::{badges_toml, salary_grid_toml};

/// Result of running a payladder command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {l:?}: {e}\n{}", self.stdout))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the standard reference tables and an empty ledger
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_data_file("salary_grid.toml", &salary_grid_toml());
        env.write_data_file("badges.toml", &badges_toml());
        env
    }

    /// Environment with no data files at all
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_payladder")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn data_path(&self, file: &str) -> PathBuf {
        self.path("data").join(file)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn write_data_file(&self, file: &str, content: &str) {
        self.write_file(&format!("data/{file}"), content);
    }

    pub fn read_ledger(&self) -> String {
        std::fs::read_to_string(self.data_path("ledger.jsonl")).unwrap_or_default()
    }

    pub fn ledger_len(&self) -> usize {
        self.read_ledger()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("XDG_CONFIG_HOME", self.path("xdg"))
            .env("HOME", self.path("home"))
            .env_remove("PAYLADDER_DATA_DIR")
            .env_remove("PAYLADDER_VERBOSITY")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute payladder");
        to_result(output)
    }

    /// Run and assert success
    pub fn ok(&self, args: &[&str]) -> TestResult {
        let result = self.run(args);
        assert!(
            result.success,
            "payladder {args:?} failed:\n{}",
            result.combined_output()
        );
        result
    }

    pub fn join(&self, username: &str, track: &str, level: &str, badges: &[&str]) -> TestResult {
        let mut args = vec![
            "join",
            "--username",
            username,
            "--track",
            track,
            "--level",
            level,
        ];
        for badge in badges {
            args.push("--badge");
            args.push(badge);
        }
        self.ok(&args)
    }

    /// Salary as printed in JSON mode
    pub fn salary(&self, username: &str, track: &str) -> f64 {
        let result = self.ok(&[
            "salary",
            "--username",
            username,
            "--track",
            track,
            "--json",
        ]);
        result.json_lines()[0]["salary"]
            .as_f64()
            .expect("salary field")
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
