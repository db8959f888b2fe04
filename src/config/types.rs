//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError, ConfigWarning};

/// Where the reference tables and the ledger live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_salary_grid")]
    pub salary_grid: String,

    #[serde(default = "default_badges")]
    pub badges: String,

    #[serde(default = "default_ledger")]
    pub ledger: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            salary_grid: default_salary_grid(),
            badges: default_badges(),
            ledger: default_ledger(),
        }
    }
}

impl DataConfig {
    pub fn salary_grid_path(&self) -> PathBuf {
        self.dir.join(&self.salary_grid)
    }

    pub fn badges_path(&self) -> PathBuf {
        self.dir.join(&self.badges)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(&self.ledger)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_salary_grid() -> String {
    "salary_grid.toml".to_string()
}

fn default_badges() -> String {
    "badges.toml".to_string()
}

fn default_ledger() -> String {
    "ledger.jsonl".to_string()
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a `-v` count onto a level; zero keeps `self`
    pub fn raised_by(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            2 => self.max(Verbosity::Debug),
            _ => Verbosity::Trace,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and report unknown keys
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults (with env overrides)
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_or_default(project_root)
    }
}
