//! Reference data loaded once per session
//!
//! The salary grid and badge catalogue are loaded together and then handed
//! to use cases as read-only values.

use tracing::debug;

use crate::domain::entities::{BadgeCatalogue, SalaryGrid};
use crate::domain::ports::{CatalogueError, CatalogueRepository};

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub grid: SalaryGrid,
    pub badges: BadgeCatalogue,
}

impl ReferenceData {
    pub fn new(grid: SalaryGrid, badges: BadgeCatalogue) -> Self {
        Self { grid, badges }
    }

    pub fn load<CR: CatalogueRepository>(repo: &CR) -> Result<Self, CatalogueError> {
        let grid = repo.load_salary_grid()?;
        let badges = repo.load_badge_catalogue()?;
        debug!(
            grid_entries = grid.len(),
            badges = badges.len(),
            "reference data loaded"
        );
        Ok(Self { grid, badges })
    }
}
