//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/NDJSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `json` - NDJSON event types
//! - `output` - Text and JSON renderers
//!
//! ## Usage
//!
//! ```ignore
//! use payladder::presentation::factory;
//!
//! let use_case = factory::create_query_use_case(&config.data)?;
//! let breakdown = use_case.salary(&key)?;
//! ```

pub mod cli;
pub mod factory;
pub mod json;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{OutputFormat, Renderer};
