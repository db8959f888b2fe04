//! Badge catalogue entity
//!
//! Every badge belongs to exactly one level and track. Rank 1 never carries
//! badges since there is no level below it to progress from.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::ports::CatalogueError;
use crate::domain::value_objects::{BadgeType, Level, Track};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub badge_type: BadgeType,
    pub level: Level,
    pub track: Track,
}

impl Badge {
    pub fn new(name: impl Into<String>, badge_type: BadgeType, level: Level, track: Track) -> Self {
        Self {
            name: name.into(),
            badge_type,
            level,
            track,
        }
    }
}

/// Badges in provisioning order, indexed by name
#[derive(Debug, Clone, Default)]
pub struct BadgeCatalogue {
    badges: Vec<Badge>,
    by_name: HashMap<String, usize>,
}

impl BadgeCatalogue {
    pub fn new(badges: impl IntoIterator<Item = Badge>) -> Result<Self, CatalogueError> {
        let mut catalogue = Self::default();

        for badge in badges {
            if badge.level == Level::LOWEST {
                return Err(CatalogueError::invalid(
                    "badge catalogue",
                    format!(
                        "badge '{}' is assigned to {}, which cannot carry badges",
                        badge.name,
                        Level::LOWEST
                    ),
                ));
            }
            if catalogue.by_name.contains_key(&badge.name) {
                return Err(CatalogueError::invalid(
                    "badge catalogue",
                    format!("duplicate badge name '{}'", badge.name),
                ));
            }
            catalogue
                .by_name
                .insert(badge.name.clone(), catalogue.badges.len());
            catalogue.badges.push(badge);
        }

        Ok(catalogue)
    }

    pub fn get(&self, name: &str) -> Option<&Badge> {
        self.by_name.get(name).map(|&i| &self.badges[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All badges for a level and track, in catalogue order
    pub fn badges_for(&self, level: Level, track: Track) -> impl Iterator<Item = &Badge> {
        self.badges
            .iter()
            .filter(move |b| b.level == level && b.track == track)
    }

    /// Badges of one type for a level and track
    pub fn badges_of_type(
        &self,
        level: Level,
        track: Track,
        badge_type: BadgeType,
    ) -> impl Iterator<Item = &Badge> {
        self.badges_for(level, track)
            .filter(move |b| b.badge_type == badge_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
