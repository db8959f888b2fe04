//! LedgerRepository port - persistence for the progression ledger
//!
//! Implementations must give each action the whole ledger to itself: `commit`
//! holds an exclusive lock while it loads a fresh snapshot, runs the action's
//! validation and appends, and persists the new rows. Readers going through
//! `snapshot` never see part of another action's appends.

use std::path::PathBuf;

use crate::domain::entities::Ledger;

pub trait LedgerRepository {
    /// A consistent copy of the ledger for read-only queries
    fn snapshot(&self) -> Result<Ledger, LedgerStoreError>;

    /// Run `action` against the latest ledger under exclusive access.
    ///
    /// Rows the action appends are persisted only if it returns `Ok`. On
    /// `Err` the stored ledger is left exactly as it was.
    fn commit<T, E, F>(&self, action: F) -> Result<T, E>
    where
        F: FnOnce(&mut Ledger) -> Result<T, E>,
        E: From<LedgerStoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerStoreError {
    #[error("failed to access ledger: {message}")]
    AccessError { message: String },

    #[error("failed to serialize ledger event: {message}")]
    SerializationError { message: String },

    #[error(
        "ledger file corrupted: {path} line {line}\n  → Fix: repair or remove the line; events are never rewritten\n  → Details: {message}"
    )]
    Corrupted {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("failed to lock ledger: {message}")]
    Lock { message: String },
}

impl LedgerStoreError {
    pub fn access(err: impl std::fmt::Display) -> Self {
        LedgerStoreError::AccessError {
            message: err.to_string(),
        }
    }
}
