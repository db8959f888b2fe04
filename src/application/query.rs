//! Query Use Case
//!
//! Read-path actions. Both run against a shared-lock snapshot of the ledger
//! and never append.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::ProgressionEvent;
use crate::domain::ports::LedgerRepository;
use crate::domain::services::{CompensationCalculator, SalaryBreakdown};
use crate::domain::value_objects::{Level, UserKey};
use crate::error::{PayladderError, PayladderResult};

use super::ReferenceData;

/// A user's replayed state within one track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserHistory {
    pub user: UserKey,
    pub current_level: Level,
    pub badges: BTreeSet<String>,
    pub events: Vec<ProgressionEvent>,
}

pub struct QueryUseCase<LR>
where
    LR: LedgerRepository,
{
    reference: ReferenceData,
    ledger_repo: LR,
}

impl<LR> QueryUseCase<LR>
where
    LR: LedgerRepository,
{
    pub fn new(reference: ReferenceData, ledger_repo: LR) -> Self {
        Self {
            reference,
            ledger_repo,
        }
    }

    pub fn salary(&self, user: &UserKey) -> PayladderResult<SalaryBreakdown> {
        self.require_track(user)?;
        let ledger = self.ledger_repo.snapshot()?;
        let calculator = CompensationCalculator::new(&self.reference.grid, &self.reference.badges);
        let breakdown = calculator.calculate(&ledger, user)?;
        debug!(user = %user, salary = breakdown.salary, "salary computed");
        Ok(breakdown)
    }

    pub fn history(&self, user: &UserKey) -> PayladderResult<UserHistory> {
        self.require_track(user)?;
        let ledger = self.ledger_repo.snapshot()?;
        let current_level = ledger.current_level(user)?;
        Ok(UserHistory {
            user: user.clone(),
            current_level,
            badges: ledger.earned_badges(user),
            events: ledger.history(user).cloned().collect(),
        })
    }

    fn require_track(&self, user: &UserKey) -> PayladderResult<()> {
        if self.reference.grid.has_track(user.track) {
            Ok(())
        } else {
            Err(PayladderError::UnknownTrack(user.track))
        }
    }
}
