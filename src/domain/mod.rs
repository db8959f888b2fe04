//! Domain Layer
//!
//! This is the core of Payladder - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Reference tables and the progression ledger
//! - `value_objects/` - Immutable value types (Track, Level, UserKey)
//! - `services/` - Domain services (CompensationCalculator)
//! - `policies/` - Business rules (ProgressionPolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Derived state** - A user's level and badges are replayed from the ledger
//! 3. **Ports & Adapters** - All persistence goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_support;
