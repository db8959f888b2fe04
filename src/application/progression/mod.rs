//! Progression Module
//!
//! Append-side use case for the ledger: join, upgrade and earn-badge.
//!
//! ## Structure
//!
//! - `result` - Result types (`ActionResult`)
//! - `use_case` - Core use case logic (`ProgressionUseCase`)

mod result;
mod use_case;

pub use result::ActionResult;
pub use use_case::ProgressionUseCase;
