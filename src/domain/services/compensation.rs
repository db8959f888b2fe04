//! Compensation calculator
//!
//! Salary is the grid's base pay for the user's current level, reduced by the
//! badge credit the user has not yet earned at that level, and increased by
//! credit already earned toward the next level.
//!
//! Half of the salary step between a level and the one below it is the
//! level's badge pool. Bronze badges share 40% of the pool and silver badges
//! share 60%, each split evenly across the badges of that type defined for
//! the level and track.
//!
//! The lowest level has no step below it, so its pool is zero and its
//! salary is pure base pay plus any next-level credit.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{BadgeCatalogue, Ledger, SalaryGrid};
use crate::domain::value_objects::{BadgeType, Level, Track, UserKey};
use crate::error::{PayladderError, PayladderResult};

/// Share of a level's salary step that is paid through badges
pub const BADGE_POOL_SHARE: f64 = 0.5;

/// Terms of a salary computation, unrounded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBreakdown {
    pub user: UserKey,
    pub level: Level,
    pub base: f64,
    pub shortfall: f64,
    pub next_level_credit: f64,
    pub salary: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CompensationCalculator<'a> {
    grid: &'a SalaryGrid,
    catalogue: &'a BadgeCatalogue,
}

impl<'a> CompensationCalculator<'a> {
    pub fn new(grid: &'a SalaryGrid, catalogue: &'a BadgeCatalogue) -> Self {
        Self { grid, catalogue }
    }

    pub fn calculate(&self, ledger: &Ledger, user: &UserKey) -> PayladderResult<SalaryBreakdown> {
        let level = ledger.current_level(user)?;
        let earned = ledger.earned_badges(user);
        let track = user.track;

        let base = self.base_salary(level, track)?;
        let shortfall = self.total_credit(level, track)? - self.earned_credit(level, track, &earned)?;

        // A next level missing from this track's grid pays nothing early.
        let next_level_credit = match level.next() {
            Some(next) if self.grid.contains(next, track) => {
                self.earned_credit(next, track, &earned)?
            }
            _ => 0.0,
        };

        Ok(SalaryBreakdown {
            user: user.clone(),
            level,
            base,
            shortfall,
            next_level_credit,
            salary: base - shortfall + next_level_credit,
        })
    }

    /// The full badge pool of a level
    pub fn total_credit(&self, level: Level, track: Track) -> PayladderResult<f64> {
        let Some(previous) = level.previous() else {
            return Ok(0.0);
        };
        let step = self.base_salary(level, track)? - self.base_salary(previous, track)?;
        Ok(BADGE_POOL_SHARE * step)
    }

    /// The part of a level's badge pool covered by `earned`
    pub fn earned_credit(
        &self,
        level: Level,
        track: Track,
        earned: &BTreeSet<String>,
    ) -> PayladderResult<f64> {
        let pool = self.total_credit(level, track)?;
        if pool == 0.0 {
            return Ok(0.0);
        }

        let credit = BadgeType::ALL
            .iter()
            .map(|&badge_type| {
                let (defined, held) = self
                    .catalogue
                    .badges_of_type(level, track, badge_type)
                    .fold((0usize, 0usize), |(defined, held), badge| {
                        (defined + 1, held + usize::from(earned.contains(&badge.name)))
                    });
                if defined == 0 {
                    return 0.0;
                }
                let per_badge = pool / defined as f64 * badge_type.weight();
                held as f64 * per_badge
            })
            .sum();

        Ok(credit)
    }

    fn base_salary(&self, level: Level, track: Track) -> PayladderResult<f64> {
        self.grid
            .base_salary(level, track)
            .ok_or(PayladderError::UnknownLevel { level, track })
    }
}
