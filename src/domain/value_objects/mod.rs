//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod action_request;
mod badge_type;
mod level;
mod track;
mod user_key;

pub use action_request::{ActionKind, ActionRequest};
pub use badge_type::BadgeType;
pub use level::Level;
pub use track::Track;
pub use user_key::UserKey;
