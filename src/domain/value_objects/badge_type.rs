//! Badge type value object
//!
//! Bronze and silver badges carry different shares of a level's badge credit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Bronze,
    Silver,
}

impl BadgeType {
    pub const ALL: [BadgeType; 2] = [BadgeType::Bronze, BadgeType::Silver];

    /// Share of a level's badge credit allocated to this type
    pub fn weight(&self) -> f64 {
        match self {
            BadgeType::Bronze => 0.4,
            BadgeType::Silver => 0.6,
        }
    }
}

impl std::fmt::Display for BadgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeType::Bronze => write!(f, "bronze"),
            BadgeType::Silver => write!(f, "silver"),
        }
    }
}
