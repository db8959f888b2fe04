//! Progression Use Case
//!
//! Runs one action as a single unit: validation and every row the action
//! appends happen inside one ledger commit.

use tracing::info;

use crate::domain::entities::{Ledger, ProgressionEvent};
use crate::domain::policies::{ProgressionPolicy, ValidatedAction};
use crate::domain::ports::LedgerRepository;
use crate::domain::value_objects::{ActionRequest, Level, UserKey};
use crate::error::{PayladderError, PayladderResult};

use super::super::ReferenceData;
use super::result::ActionResult;

pub struct ProgressionUseCase<LR>
where
    LR: LedgerRepository,
{
    reference: ReferenceData,
    ledger_repo: LR,
}

impl<LR> ProgressionUseCase<LR>
where
    LR: LedgerRepository,
{
    pub fn new(reference: ReferenceData, ledger_repo: LR) -> Self {
        Self {
            reference,
            ledger_repo,
        }
    }

    pub fn ledger_repo(&self) -> &LR {
        &self.ledger_repo
    }

    pub fn join(
        &self,
        user: UserKey,
        level: Level,
        badges: Vec<String>,
    ) -> PayladderResult<ActionResult> {
        self.execute(&ActionRequest::join(user, level, badges))
    }

    pub fn upgrade(&self, user: UserKey, level: Level) -> PayladderResult<ActionResult> {
        self.execute(&ActionRequest::upgrade(user, level))
    }

    pub fn earn_badge(&self, user: UserKey, badges: Vec<String>) -> PayladderResult<ActionResult> {
        self.execute(&ActionRequest::earn_badge(user, badges))
    }

    /// Validate and apply a request. Nothing is appended on error.
    pub fn execute(&self, request: &ActionRequest) -> PayladderResult<ActionResult> {
        let policy = ProgressionPolicy::new(&self.reference.grid, &self.reference.badges);

        let (appended, ledger_len) = self.ledger_repo.commit(|ledger| {
            let validated = policy.validate(ledger, request)?;
            let appended = self.apply(ledger, request, validated)?;
            Ok::<_, PayladderError>((appended, ledger.len()))
        })?;

        info!(
            action = %request.kind,
            user = %request.user,
            appended = appended.len(),
            "action committed"
        );

        Ok(ActionResult {
            kind: request.kind,
            user: request.user.clone(),
            appended,
            ledger_len,
        })
    }

    fn apply(
        &self,
        ledger: &mut Ledger,
        request: &ActionRequest,
        validated: ValidatedAction,
    ) -> PayladderResult<Vec<ProgressionEvent>> {
        let rows = match validated {
            ValidatedAction::Join { level } => ledger
                .join(&request.user, level, &request.badges, &self.reference.badges)
                .to_vec(),
            ValidatedAction::Upgrade { level } => ledger.upgrade(&request.user, level).to_vec(),
            ValidatedAction::EarnBadge => ledger.earn_badges(&request.user, &request.badges)?.to_vec(),
        };
        Ok(rows)
    }
}
