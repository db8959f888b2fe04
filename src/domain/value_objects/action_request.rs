//! Action requests - validated inputs for ledger mutations
//!
//! Requests keep every field optional or open so that a caller can send a
//! field the action does not accept. Rejecting those is the validator's job.

use serde::{Deserialize, Serialize};

use super::{Level, UserKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Join,
    Upgrade,
    EarnBadge,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Join => "join",
            ActionKind::Upgrade => "upgrade",
            ActionKind::EarnBadge => "earn_badge",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub user: UserKey,
    pub level: Option<Level>,
    pub badges: Vec<String>,
}

impl ActionRequest {
    pub fn join(user: UserKey, level: Level, badges: Vec<String>) -> Self {
        Self {
            kind: ActionKind::Join,
            user,
            level: Some(level),
            badges,
        }
    }

    pub fn upgrade(user: UserKey, level: Level) -> Self {
        Self {
            kind: ActionKind::Upgrade,
            user,
            level: Some(level),
            badges: Vec::new(),
        }
    }

    pub fn earn_badge(user: UserKey, badges: Vec<String>) -> Self {
        Self {
            kind: ActionKind::EarnBadge,
            user,
            level: None,
            badges,
        }
    }

    pub fn with_level(mut self, level: Option<Level>) -> Self {
        self.level = level;
        self
    }

    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = badges;
        self
    }
}
