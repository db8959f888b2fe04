//! Domain Entities
//!
//! - `SalaryGrid` - base salary per (level, track)
//! - `BadgeCatalogue` - badges by name, level and track
//! - `ProgressionEvent` - one immutable ledger row
//! - `Ledger` - the append-only progression log

mod badge_catalogue;
mod ledger;
mod progression_event;
mod salary_grid;

pub use badge_catalogue::{Badge, BadgeCatalogue};
pub use ledger::Ledger;
pub use progression_event::ProgressionEvent;
pub use salary_grid::{SalaryGrid, SalaryGridEntry};
