//! TOML Catalogue Repository
//!
//! Reads the salary grid and badge catalogue from two TOML files in the data
//! directory. Both tables are read-only from here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Badge, BadgeCatalogue, SalaryGrid, SalaryGridEntry};
use crate::domain::ports::{CatalogueError, CatalogueRepository};
use crate::domain::value_objects::{BadgeType, Level, Track};

#[derive(Debug, Clone, Deserialize)]
struct TomlGridEntry {
    rank: u8,
    level: Level,
    track: Track,
    base_salary: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlSalaryGrid {
    #[serde(default)]
    entries: Vec<TomlGridEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlBadge {
    name: String,
    badge_type: BadgeType,
    level: Level,
    track: Track,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlBadgeCatalogue {
    #[serde(default)]
    badges: Vec<TomlBadge>,
}

pub struct TomlCatalogueRepository {
    salary_grid_path: PathBuf,
    badges_path: PathBuf,
}

impl TomlCatalogueRepository {
    pub fn new(salary_grid_path: impl Into<PathBuf>, badges_path: impl Into<PathBuf>) -> Self {
        Self {
            salary_grid_path: salary_grid_path.into(),
            badges_path: badges_path.into(),
        }
    }

    pub fn salary_grid_path(&self) -> &Path {
        &self.salary_grid_path
    }

    pub fn badges_path(&self) -> &Path {
        &self.badges_path
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogueError> {
    debug!(path = %path.display(), "reading catalogue");
    let content = fs::read_to_string(path).map_err(|e| CatalogueError::AccessError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| CatalogueError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl CatalogueRepository for TomlCatalogueRepository {
    fn load_salary_grid(&self) -> Result<SalaryGrid, CatalogueError> {
        let raw: TomlSalaryGrid = read_toml(&self.salary_grid_path)?;
        SalaryGrid::new(raw.entries.into_iter().map(|e| SalaryGridEntry {
            rank: e.rank,
            level: e.level,
            track: e.track,
            base_salary: e.base_salary,
        }))
    }

    fn load_badge_catalogue(&self) -> Result<BadgeCatalogue, CatalogueError> {
        let raw: TomlBadgeCatalogue = read_toml(&self.badges_path)?;
        BadgeCatalogue::new(
            raw.badges
                .into_iter()
                .map(|b| Badge::new(b.name, b.badge_type, b.level, b.track)),
        )
    }
}
