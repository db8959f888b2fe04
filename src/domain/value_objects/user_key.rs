//! UserKey value object - identifies one user's history within a track
//!
//! The same username may exist independently in several tracks.

use serde::{Deserialize, Serialize};

use super::Track;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserKey {
    pub username: String,
    pub track: Track,
}

impl UserKey {
    pub fn new(username: impl Into<String>, track: Track) -> Self {
        Self {
            username: username.into(),
            track,
        }
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.track, self.username)
    }
}
