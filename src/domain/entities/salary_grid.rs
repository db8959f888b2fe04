//! Salary grid entity - base salary per (level, track)
//!
//! Provisioned out-of-band and read-only during a session. Invariants are
//! checked once at construction so lookups can stay infallible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ports::CatalogueError;
use crate::domain::value_objects::{Level, Track};

/// One row of the salary grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryGridEntry {
    pub rank: u8,
    pub level: Level,
    pub track: Track,
    pub base_salary: f64,
}

impl SalaryGridEntry {
    pub fn new(level: Level, track: Track, base_salary: f64) -> Self {
        Self {
            rank: level.rank(),
            level,
            track,
            base_salary,
        }
    }
}

/// Base salaries keyed by (track, level)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryGrid {
    entries: BTreeMap<(Track, Level), SalaryGridEntry>,
}

impl SalaryGrid {
    /// Build a grid, rejecting duplicate pairs, rank mismatches and salaries
    /// that decrease with rank inside a track.
    pub fn new(rows: impl IntoIterator<Item = SalaryGridEntry>) -> Result<Self, CatalogueError> {
        let mut entries = BTreeMap::new();

        for row in rows {
            if row.rank != row.level.rank() {
                return Err(CatalogueError::invalid(
                    "salary grid",
                    format!(
                        "level '{}' has rank {} but rank {} was given",
                        row.level,
                        row.level.rank(),
                        row.rank
                    ),
                ));
            }
            if !row.base_salary.is_finite() || row.base_salary < 0.0 {
                return Err(CatalogueError::invalid(
                    "salary grid",
                    format!(
                        "base salary for {}/{} must be a non-negative number",
                        row.track, row.level
                    ),
                ));
            }
            let key = (row.track, row.level);
            if entries.insert(key, row).is_some() {
                return Err(CatalogueError::invalid(
                    "salary grid",
                    format!("duplicate entry for {}/{}", key.0, key.1),
                ));
            }
        }

        // BTreeMap order is (track, rank), so neighbours in the same track are
        // adjacent in iteration.
        let mut previous: Option<&SalaryGridEntry> = None;
        for entry in entries.values() {
            if let Some(prev) = previous.filter(|p| p.track == entry.track) {
                if entry.base_salary < prev.base_salary {
                    return Err(CatalogueError::invalid(
                        "salary grid",
                        format!(
                            "base salary decreases from {} to {} in track '{}'",
                            prev.level, entry.level, entry.track
                        ),
                    ));
                }
            }
            previous = Some(entry);
        }

        Ok(Self { entries })
    }

    pub fn base_salary(&self, level: Level, track: Track) -> Option<f64> {
        self.entries.get(&(track, level)).map(|e| e.base_salary)
    }

    pub fn contains(&self, level: Level, track: Track) -> bool {
        self.entries.contains_key(&(track, level))
    }

    pub fn has_track(&self, track: Track) -> bool {
        self.entries.keys().any(|(t, _)| *t == track)
    }

    /// Entries ordered by track, then rank
    pub fn entries(&self) -> impl Iterator<Item = &SalaryGridEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
