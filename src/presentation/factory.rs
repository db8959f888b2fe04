//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, ProgressionUseCase, QueryUseCase, ReferenceData};
use crate::config::DataConfig;
use crate::domain::ports::CatalogueError;
use crate::infrastructure::{JsonlLedgerRepository, TomlCatalogueRepository};

/// Type alias for the concrete ProgressionUseCase with all dependencies
pub type ConcreteProgressionUseCase = ProgressionUseCase<JsonlLedgerRepository>;

/// Type alias for the concrete QueryUseCase with all dependencies
pub type ConcreteQueryUseCase = QueryUseCase<JsonlLedgerRepository>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<JsonlLedgerRepository>;

pub fn create_catalogue_repository(data: &DataConfig) -> TomlCatalogueRepository {
    TomlCatalogueRepository::new(data.salary_grid_path(), data.badges_path())
}

pub fn create_ledger_repository(data: &DataConfig) -> JsonlLedgerRepository {
    JsonlLedgerRepository::new(data.ledger_path())
}

/// Load the salary grid and badge catalogue named by `data`
pub fn load_reference_data(data: &DataConfig) -> Result<ReferenceData, CatalogueError> {
    ReferenceData::load(&create_catalogue_repository(data))
}

pub fn create_progression_use_case(
    data: &DataConfig,
) -> Result<ConcreteProgressionUseCase, CatalogueError> {
    let reference = load_reference_data(data)?;
    Ok(ProgressionUseCase::new(
        reference,
        create_ledger_repository(data),
    ))
}

pub fn create_query_use_case(data: &DataConfig) -> Result<ConcreteQueryUseCase, CatalogueError> {
    let reference = load_reference_data(data)?;
    Ok(QueryUseCase::new(reference, create_ledger_repository(data)))
}

pub fn create_check_use_case(data: &DataConfig) -> Result<ConcreteCheckUseCase, CatalogueError> {
    let reference = load_reference_data(data)?;
    Ok(CheckUseCase::new(reference, create_ledger_repository(data)))
}
