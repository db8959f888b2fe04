//! Shared fixture tables for domain unit tests.
//!
//! Grid (tech): Junior 18000, Mid 30000, Senior 45000, Team_Lead 60000,
//! Director 80000. Design is the same shape, 1000 lower at every rank.
//! Every level above Junior has 2 bronze and 3 silver badges per track,
//! named `{track}-{type}-{level}-{n}`.

use crate::domain::entities::{Badge, BadgeCatalogue, SalaryGrid, SalaryGridEntry};
use crate::domain::value_objects::{BadgeType, Level, Track};

pub const TECH_SALARIES: [f64; 5] = [18000.0, 30000.0, 45000.0, 60000.0, 80000.0];

pub fn salary_grid() -> SalaryGrid {
    let rows = Track::ALL.iter().flat_map(|&track| {
        let offset = if track == Track::Design { 1000.0 } else { 0.0 };
        Level::ALL
            .iter()
            .zip(TECH_SALARIES)
            .map(move |(&level, salary)| SalaryGridEntry::new(level, track, salary - offset))
    });
    SalaryGrid::new(rows).unwrap()
}

pub fn badge_name(track: Track, badge_type: BadgeType, level: Level, n: usize) -> String {
    format!("{track}-{badge_type}-{level}-{n}")
}

pub fn badge_catalogue() -> BadgeCatalogue {
    let mut badges = Vec::new();
    for track in Track::ALL {
        for level in Level::ALL.into_iter().skip(1) {
            for (badge_type, count) in [(BadgeType::Bronze, 2), (BadgeType::Silver, 3)] {
                for n in 1..=count {
                    badges.push(Badge::new(
                        badge_name(track, badge_type, level, n),
                        badge_type,
                        level,
                        track,
                    ));
                }
            }
        }
    }
    BadgeCatalogue::new(badges).unwrap()
}
