//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProgressionUseCase` - Validates and appends join, upgrade and earn-badge actions
//! - `QueryUseCase` - Salary and history reads over a ledger snapshot
//! - `CheckUseCase` - Cross-checks the ledger against the reference tables

pub mod check;
pub mod progression;
pub mod query;
mod reference;

pub use check::{CheckIssue, CheckReport, CheckStatus, CheckUseCase};
pub use progression::{ActionResult, ProgressionUseCase};
pub use query::{QueryUseCase, UserHistory};
pub use reference::ReferenceData;

pub use crate::domain::value_objects::{ActionKind, ActionRequest};
