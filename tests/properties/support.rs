//! Shared tables and strategies for property tests.

use proptest::prelude::*;

use payladder::{
    ActionRequest, Badge, BadgeCatalogue, BadgeType, Level, SalaryGrid, Track, UserKey,
};
use payladder::domain::entities::SalaryGridEntry;

pub const TECH_SALARIES: [f64; 5] = [18000.0, 30000.0, 45000.0, 60000.0, 80000.0];
pub const USERNAMES: [&str; 3] = ["alice", "bob", "carol"];

pub fn grid() -> SalaryGrid {
    SalaryGrid::new(Track::ALL.iter().flat_map(|&track| {
        let offset = if track == Track::Design { 1000.0 } else { 0.0 };
        Level::ALL
            .iter()
            .zip(TECH_SALARIES)
            .map(move |(&level, salary)| SalaryGridEntry::new(level, track, salary - offset))
    }))
    .unwrap()
}

pub fn badge_name(track: Track, badge_type: BadgeType, level: Level, n: usize) -> String {
    format!("{track}-{badge_type}-{level}-{n}")
}

pub fn catalogue() -> BadgeCatalogue {
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

pub fn all_badge_names() -> Vec<String> {
    catalogue().iter().map(|b| b.name.clone()).collect()
}

pub fn track() -> impl Strategy<Value = Track> {
    prop::sample::select(Track::ALL.to_vec())
}

pub fn level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

pub fn user() -> impl Strategy<Value = UserKey> {
    (prop::sample::select(USERNAMES.to_vec()), track())
        .prop_map(|(name, track)| UserKey::new(name, track))
}

/// A catalogue badge name, or occasionally one that does not exist
pub fn badge() -> impl Strategy<Value = String> {
    prop_oneof![
        9 => prop::sample::select(all_badge_names()),
        1 => Just("no-such-badge".to_string()),
    ]
}

pub fn request() -> impl Strategy<Value = ActionRequest> {
    let badges = || prop::collection::vec(badge(), 0..4);
    prop_oneof![
        (user(), level(), badges()).prop_map(|(u, l, b)| ActionRequest::join(u, l, b)),
        (user(), level()).prop_map(|(u, l)| ActionRequest::upgrade(u, l)),
        (user(), badges()).prop_map(|(u, b)| ActionRequest::earn_badge(u, b)),
    ]
}
