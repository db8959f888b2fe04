//! Progression result types

use serde::Serialize;

use crate::domain::entities::ProgressionEvent;
use crate::domain::value_objects::{ActionKind, UserKey};

/// Outcome of a committed action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub kind: ActionKind,
    pub user: UserKey,
    /// Rows appended by this action, in append order
    pub appended: Vec<ProgressionEvent>,
    /// Ledger length after the append
    pub ledger_len: usize,
}

impl ActionResult {
    pub fn appended_count(&self) -> usize {
        self.appended.len()
    }

    /// Badge rows among the appended ones
    pub fn badges(&self) -> impl Iterator<Item = &str> {
        self.appended.iter().filter_map(|e| e.badge.as_deref())
    }
}
