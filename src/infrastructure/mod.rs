//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Catalogue (TOML) and ledger (JSON Lines, in-memory) repositories

pub mod repositories;

// Re-export for convenience
pub use repositories::{InMemoryLedgerRepository, JsonlLedgerRepository, TomlCatalogueRepository};
