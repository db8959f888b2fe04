//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod progression;

pub use progression::{ProgressionPolicy, ValidatedAction};
