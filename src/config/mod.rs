//! Configuration module for Payladder
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PAYLADDER_*)
//! 3. Project config (./payladder.toml)
//! 4. User config (~/.config/payladder/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigError, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DataConfig, OutputConfig, Verbosity};
