//! Progression event - one immutable ledger row

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Level, Track, UserKey};

/// A single career event.
///
/// Join events carry the joining level and optionally a badge, upgrade events
/// carry the new level and no badge, earn-badge events carry the level the
/// user held when the badge was earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionEvent {
    pub username: String,
    pub track: Track,
    pub level: Level,
    #[serde(default)]
    pub badge: Option<String>,
}

impl ProgressionEvent {
    pub fn new(key: &UserKey, level: Level, badge: Option<String>) -> Self {
        Self {
            username: key.username.clone(),
            track: key.track,
            level,
            badge,
        }
    }

    pub fn belongs_to(&self, key: &UserKey) -> bool {
        self.track == key.track && self.username == key.username
    }

    pub fn user_key(&self) -> UserKey {
        UserKey::new(self.username.clone(), self.track)
    }
}
