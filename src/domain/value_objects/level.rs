//! Level value object - ordered career ranks
//!
//! Levels form a closed, totally ordered sequence. Rank 1 is the entry level
//! and has no predecessor; the top rank has no successor. Neither lookup wraps.

use serde::{Deserialize, Serialize};

/// Career level, ordered lowest to highest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Level {
    #[value(name = "Junior", alias = "junior")]
    Junior,
    #[value(name = "Mid", alias = "mid")]
    Mid,
    #[value(name = "Senior", alias = "senior")]
    Senior,
    #[serde(rename = "Team_Lead")]
    #[value(name = "Team_Lead", alias = "team-lead")]
    TeamLead,
    #[value(name = "Director", alias = "director")]
    Director,
}

impl Level {
    /// All levels in rank order
    pub const ALL: [Level; 5] = [
        Level::Junior,
        Level::Mid,
        Level::Senior,
        Level::TeamLead,
        Level::Director,
    ];

    pub const LOWEST: Level = Level::Junior;
    pub const HIGHEST: Level = Level::Director;

    /// 1-based rank
    pub fn rank(&self) -> u8 {
        match self {
            Level::Junior => 1,
            Level::Mid => 2,
            Level::Senior => 3,
            Level::TeamLead => 4,
            Level::Director => 5,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Level> {
        Self::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// The level one rank below, if any
    pub fn previous(&self) -> Option<Level> {
        Self::from_rank(self.rank() - 1)
    }

    /// The level one rank above, if any
    pub fn next(&self) -> Option<Level> {
        Self::from_rank(self.rank() + 1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "Junior",
            Level::Mid => "Mid",
            Level::Senior => "Senior",
            Level::TeamLead => "Team_Lead",
            Level::Director => "Director",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
