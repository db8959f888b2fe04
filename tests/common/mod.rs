//! Common test utilities for payladder CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated data directory plus helpers to run the binary
//! - Fixtures: Salary grid and badge catalogue TOML

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
