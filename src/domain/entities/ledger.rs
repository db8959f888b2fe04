//! Progression ledger - the append-only event log
//!
//! A user's state is never stored. Current level and earned badges are
//! replayed from the user's event subsequence on every read. `append` is the
//! only mutation; there is no way to edit or remove a recorded event.
//!
//! The action helpers (`join`, `upgrade`, `earn_badges`) append without
//! checking business rules. Run `domain::policies::progression` first.

use std::collections::BTreeSet;

use crate::domain::value_objects::{Level, UserKey};
use crate::error::{PayladderError, PayladderResult};

use super::{BadgeCatalogue, ProgressionEvent};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    events: Vec<ProgressionEvent>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted rows, preserving their order
    pub fn from_events(events: Vec<ProgressionEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[ProgressionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The user's events in append order
    pub fn history<'a>(&'a self, key: &'a UserKey) -> impl Iterator<Item = &'a ProgressionEvent> {
        self.events.iter().filter(move |e| e.belongs_to(key))
    }

    pub fn contains_user(&self, key: &UserKey) -> bool {
        self.events.iter().any(|e| e.belongs_to(key))
    }

    /// Level of the most recent event for the user
    pub fn current_level(&self, key: &UserKey) -> PayladderResult<Level> {
        self.events
            .iter()
            .rev()
            .find(|e| e.belongs_to(key))
            .map(|e| e.level)
            .ok_or_else(|| PayladderError::UnknownUser(key.clone()))
    }

    /// Every badge recorded for the user, regardless of the event's level tag
    pub fn earned_badges(&self, key: &UserKey) -> BTreeSet<String> {
        self.history(key).filter_map(|e| e.badge.clone()).collect()
    }

    pub fn append(&mut self, event: ProgressionEvent) {
        self.events.push(event);
    }

    /// Events appended since `mark` (a previous `len()`)
    pub fn appended_since(&self, mark: usize) -> &[ProgressionEvent] {
        &self.events[mark.min(self.events.len())..]
    }

    /// Credit a joiner with every catalogue badge of their starting level.
    ///
    /// This is what separates a new joiner at a level from a long-tenured
    /// employee at the same level who has not yet finished its badges.
    pub fn backfill(
        &mut self,
        key: &UserKey,
        level: Level,
        catalogue: &BadgeCatalogue,
    ) -> &[ProgressionEvent] {
        let mark = self.len();
        for badge in catalogue.badges_for(level, key.track) {
            self.events
                .push(ProgressionEvent::new(key, level, Some(badge.name.clone())));
        }
        self.appended_since(mark)
    }

    /// Record a new joiner: backfilled badges first, then explicit ones.
    ///
    /// A join with nothing to backfill and no explicit badges still records a
    /// single badge-less event so the user exists in the ledger.
    pub fn join(
        &mut self,
        key: &UserKey,
        level: Level,
        explicit_badges: &[String],
        catalogue: &BadgeCatalogue,
    ) -> &[ProgressionEvent] {
        let mark = self.len();
        self.backfill(key, level, catalogue);
        for badge in explicit_badges {
            self.append(ProgressionEvent::new(key, level, Some(badge.clone())));
        }
        if self.len() == mark {
            self.append(ProgressionEvent::new(key, level, None));
        }
        self.appended_since(mark)
    }

    pub fn upgrade(&mut self, key: &UserKey, new_level: Level) -> &[ProgressionEvent] {
        let mark = self.len();
        self.append(ProgressionEvent::new(key, new_level, None));
        self.appended_since(mark)
    }

    /// Record earned badges, all tagged with the level held before the first
    pub fn earn_badges(
        &mut self,
        key: &UserKey,
        badge_names: &[String],
    ) -> PayladderResult<&[ProgressionEvent]> {
        let level = self.current_level(key)?;
        let mark = self.len();
        for badge in badge_names {
            self.append(ProgressionEvent::new(key, level, Some(badge.clone())));
        }
        Ok(self.appended_since(mark))
    }
}
