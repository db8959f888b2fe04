//! Check Use Case
//!
//! Loads the reference tables and the ledger file and reports on how they
//! fit together. Problems found in ledger rows are reported, never repaired.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::ports::LedgerRepository;
use crate::domain::value_objects::UserKey;
use crate::error::PayladderResult;

use super::ReferenceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
}

/// A ledger row that does not match the current reference tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckIssue {
    /// 1-based row number in the ledger
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckReport {
    pub grid_entries: usize,
    pub badges: usize,
    pub events: usize,
    pub users: usize,
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    pub fn status(&self) -> CheckStatus {
        if self.issues.is_empty() {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

pub struct CheckUseCase<LR>
where
    LR: LedgerRepository,
{
    reference: ReferenceData,
    ledger_repo: LR,
}

impl<LR> CheckUseCase<LR>
where
    LR: LedgerRepository,
{
    pub fn new(reference: ReferenceData, ledger_repo: LR) -> Self {
        Self {
            reference,
            ledger_repo,
        }
    }

    pub fn execute(&self) -> PayladderResult<CheckReport> {
        let ledger = self.ledger_repo.snapshot()?;
        let grid = &self.reference.grid;
        let badges = &self.reference.badges;

        let mut users = BTreeSet::<UserKey>::new();
        let mut issues = Vec::new();

        for (index, event) in ledger.events().iter().enumerate() {
            let row = index + 1;
            users.insert(event.user_key());

            if !grid.contains(event.level, event.track) {
                issues.push(CheckIssue {
                    row,
                    message: format!(
                        "level '{}' is not in the salary grid for track '{}'",
                        event.level, event.track
                    ),
                });
            }
            if let Some(name) = event.badge.as_deref() {
                if !badges.contains(name) {
                    issues.push(CheckIssue {
                        row,
                        message: format!("badge '{name}' is not in the badge catalogue"),
                    });
                }
            }
        }

        Ok(CheckReport {
            grid_entries: grid.len(),
            badges: badges.len(),
            events: ledger.len(),
            users: users.len(),
            issues,
        })
    }
}
