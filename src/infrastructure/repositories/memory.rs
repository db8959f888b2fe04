//! In-memory Ledger Repository
//!
//! Keeps the ledger behind an `RwLock`: snapshots share the read lock and
//! every commit holds the write lock for the whole action. Actions run on a
//! working copy that replaces the stored ledger only on success.

use std::sync::RwLock;

use crate::domain::entities::Ledger;
use crate::domain::ports::{LedgerRepository, LedgerStoreError};

#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    ledger: RwLock<Ledger>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
        }
    }
}

fn poisoned<T>(_: T) -> LedgerStoreError {
    LedgerStoreError::Lock {
        message: "in-memory ledger lock poisoned".to_string(),
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn snapshot(&self) -> Result<Ledger, LedgerStoreError> {
        let guard = self.ledger.read().map_err(poisoned)?;
        Ok(guard.clone())
    }

    fn commit<T, E, F>(&self, action: F) -> Result<T, E>
    where
        F: FnOnce(&mut Ledger) -> Result<T, E>,
        E: From<LedgerStoreError>,
    {
        let mut guard = self.ledger.write().map_err(poisoned)?;
        let mut working = guard.clone();
        let output = action(&mut working)?;
        *guard = working;
        Ok(output)
    }
}
