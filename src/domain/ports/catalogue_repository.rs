//! CatalogueRepository port - read-only access to reference tables
//!
//! The salary grid and badge catalogue are provisioned outside the core.
//! Callers load them once and pass the handles into validation and the
//! compensation calculator.

use std::path::PathBuf;

use crate::domain::entities::{BadgeCatalogue, SalaryGrid};

pub trait CatalogueRepository {
    fn load_salary_grid(&self) -> Result<SalaryGrid, CatalogueError>;
    fn load_badge_catalogue(&self) -> Result<BadgeCatalogue, CatalogueError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("failed to read {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid {table}: {message}")]
    Invalid { table: &'static str, message: String },
}

impl CatalogueError {
    pub fn invalid(table: &'static str, message: impl Into<String>) -> Self {
        CatalogueError::Invalid {
            table,
            message: message.into(),
        }
    }
}
