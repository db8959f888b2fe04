//! Payladder - career progression ledger and salary calculator
//!
//! Payladder keeps an append-only ledger of level changes and badge awards
//! per user and track, and derives each user's salary from that history, a
//! salary grid and a badge catalogue.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ActionResult, CheckReport, ProgressionUseCase, QueryUseCase, UserHistory};
pub use config::Config;
pub use domain::entities::{Badge, BadgeCatalogue, Ledger, ProgressionEvent, SalaryGrid};
pub use domain::services::{CompensationCalculator, SalaryBreakdown};
pub use domain::value_objects::{ActionRequest, BadgeType, Level, Track, UserKey};
pub use error::{PayladderError, PayladderResult};
