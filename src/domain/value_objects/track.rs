//! Track value object - the professional discipline a user belongs to
//!
//! Each track carries its own salary grid and badge catalogue.

use serde::{Deserialize, Serialize};

/// Career track
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Engineering
    Tech,
    /// Product and UX design
    Design,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Tech, Track::Design];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Tech => "tech",
            Track::Design => "design",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
