//! Error types for Payladder
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use thiserror::Error;

use crate::domain::ports::{CatalogueError, LedgerStoreError};
use crate::domain::value_objects::{Level, Track, UserKey};

/// Result type alias for Payladder operations
pub type PayladderResult<T> = Result<T, PayladderError>;

/// Main error type for Payladder operations
///
/// The first six variants are business rejections. Every one of them is raised
/// before any ledger append, so a rejected action leaves all tables untouched.
#[derive(Error, Debug)]
pub enum PayladderError {
    /// No progression events exist for the user in this track
    #[error("user '{}' not found in track '{}'", .0.username, .0.track)]
    UnknownUser(UserKey),

    /// The user already has events in this track
    #[error("user '{}' already exists in track '{}'", .0.username, .0.track)]
    DuplicateUser(UserKey),

    /// The salary grid has no entry for this level and track
    #[error("level '{level}' not found in the salary grid for track '{track}'")]
    UnknownLevel { level: Level, track: Track },

    /// The badge is not in the badge catalogue
    #[error("badge '{0}' not found in the badge catalogue")]
    UnknownBadge(String),

    /// The salary grid has no entries at all for this track
    #[error("track '{0}' not found in the salary grid")]
    UnknownTrack(Track),

    /// A field was missing or not allowed for the requested action
    #[error("invalid argument for {action}: {message}")]
    InvalidArgument {
        action: &'static str,
        message: String,
    },

    /// Reference data could not be loaded
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    /// The ledger store could not be read or written
    #[error(transparent)]
    LedgerStore(#[from] LedgerStoreError),
}

impl PayladderError {
    pub fn invalid_argument(action: &'static str, message: impl Into<String>) -> Self {
        PayladderError::InvalidArgument {
            action,
            message: message.into(),
        }
    }

    /// Short machine-readable kind, used for JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            PayladderError::UnknownUser(_) => "unknown_user",
            PayladderError::DuplicateUser(_) => "duplicate_user",
            PayladderError::UnknownLevel { .. } => "unknown_level",
            PayladderError::UnknownBadge(_) => "unknown_badge",
            PayladderError::UnknownTrack(_) => "unknown_track",
            PayladderError::InvalidArgument { .. } => "invalid_argument",
            PayladderError::Catalogue(_) => "catalogue",
            PayladderError::LedgerStore(_) => "ledger_store",
        }
    }

    /// True for errors caused by the request rather than by storage
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            PayladderError::Catalogue(_) | PayladderError::LedgerStore(_)
        )
    }
}
