//! Progression Policy
//!
//! Preconditions for every ledger mutation. Validation reads the catalogues
//! and the ledger but never writes; an action is appended only after its
//! request passes here.
//!
//! Only the checks below are enforced. Awarding the same badge twice,
//! skipping levels on upgrade and upgrading before finishing a level's badges
//! are all accepted.

use crate::domain::entities::{BadgeCatalogue, Ledger, SalaryGrid};
use crate::domain::value_objects::{ActionKind, ActionRequest, Level, Track};
use crate::error::{PayladderError, PayladderResult};

/// What a request was cleared to do, with any values the action needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Join { level: Level },
    Upgrade { level: Level },
    EarnBadge,
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressionPolicy<'a> {
    grid: &'a SalaryGrid,
    catalogue: &'a BadgeCatalogue,
}

impl<'a> ProgressionPolicy<'a> {
    pub fn new(grid: &'a SalaryGrid, catalogue: &'a BadgeCatalogue) -> Self {
        Self { grid, catalogue }
    }

    pub fn validate(
        &self,
        ledger: &Ledger,
        request: &ActionRequest,
    ) -> PayladderResult<ValidatedAction> {
        match request.kind {
            ActionKind::Join => self.validate_join(ledger, request),
            ActionKind::Upgrade => self.validate_upgrade(ledger, request),
            ActionKind::EarnBadge => self.validate_earn_badge(ledger, request),
        }
    }

    fn validate_join(
        &self,
        ledger: &Ledger,
        request: &ActionRequest,
    ) -> PayladderResult<ValidatedAction> {
        if ledger.contains_user(&request.user) {
            return Err(PayladderError::DuplicateUser(request.user.clone()));
        }
        let level = require_level(request)?;
        self.check_level(level, request.user.track)?;
        self.check_badges(&request.badges)?;
        Ok(ValidatedAction::Join { level })
    }

    fn validate_upgrade(
        &self,
        ledger: &Ledger,
        request: &ActionRequest,
    ) -> PayladderResult<ValidatedAction> {
        self.check_user(ledger, request)?;
        let level = require_level(request)?;
        self.check_level(level, request.user.track)?;
        if !request.badges.is_empty() {
            return Err(PayladderError::invalid_argument(
                request.kind.as_str(),
                "badges cannot be passed when upgrading a level",
            ));
        }
        Ok(ValidatedAction::Upgrade { level })
    }

    fn validate_earn_badge(
        &self,
        ledger: &Ledger,
        request: &ActionRequest,
    ) -> PayladderResult<ValidatedAction> {
        self.check_user(ledger, request)?;
        self.check_badges(&request.badges)?;
        if request.level.is_some() {
            return Err(PayladderError::invalid_argument(
                request.kind.as_str(),
                "level cannot be passed when earning a badge; it is taken from the ledger",
            ));
        }
        Ok(ValidatedAction::EarnBadge)
    }

    fn check_user(&self, ledger: &Ledger, request: &ActionRequest) -> PayladderResult<()> {
        if ledger.contains_user(&request.user) {
            Ok(())
        } else {
            Err(PayladderError::UnknownUser(request.user.clone()))
        }
    }

    fn check_level(&self, level: Level, track: Track) -> PayladderResult<()> {
        if self.grid.contains(level, track) {
            Ok(())
        } else {
            Err(PayladderError::UnknownLevel { level, track })
        }
    }

    fn check_badges(&self, badges: &[String]) -> PayladderResult<()> {
        match badges.iter().find(|name| !self.catalogue.contains(name)) {
            Some(unknown) => Err(PayladderError::UnknownBadge(unknown.clone())),
            None => Ok(()),
        }
    }
}

fn require_level(request: &ActionRequest) -> PayladderResult<Level> {
    request.level.ok_or_else(|| {
        PayladderError::invalid_argument(request.kind.as_str(), "a level is required")
    })
}
