//! Salary properties.

use std::collections::BTreeSet;

use proptest::prelude::*;

use payladder::{CompensationCalculator, Ledger, Level, ProgressionEvent, UserKey};

use super::support::{all_badge_names, catalogue, grid, level, track};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding a badge never lowers salary.
    #[test]
    fn property_salary_is_monotonic_in_badges(
        track in track(),
        level in level(),
        held in prop::collection::vec(prop::sample::select(all_badge_names()), 0..12),
        extra in prop::sample::select(all_badge_names()),
    ) {
        let grid = grid();
        let catalogue = catalogue();
        let calculator = CompensationCalculator::new(&grid, &catalogue);
        let key = UserKey::new("alice", track);

        let mut ledger = Ledger::new();
        ledger.upgrade(&key, level);
        ledger.earn_badges(&key, &held).unwrap();
        let before = calculator.calculate(&ledger, &key).unwrap().salary;

        ledger.earn_badges(&key, &[extra]).unwrap();
        let after = calculator.calculate(&ledger, &key).unwrap().salary;

        prop_assert!(after >= before - 1e-9, "{after} < {before}");
    }

    /// PROPERTY: salary stays between base minus the level's pool and the
    /// next level's base.
    #[test]
    fn property_salary_is_bounded(
        track in track(),
        level in level(),
        held in prop::collection::vec(prop::sample::select(all_badge_names()), 0..40),
    ) {
        let grid = grid();
        let catalogue = catalogue();
        let calculator = CompensationCalculator::new(&grid, &catalogue);
        let key = UserKey::new("bob", track);

        let mut ledger = Ledger::new();
        ledger.upgrade(&key, level);
        ledger.earn_badges(&key, &held).unwrap();
        let breakdown = calculator.calculate(&ledger, &key).unwrap();

        let base = grid.base_salary(level, track).unwrap();
        let pool = calculator.total_credit(level, track).unwrap();
        prop_assert!(breakdown.salary >= base - pool - 1e-9);
        prop_assert!(breakdown.shortfall >= -1e-9 && breakdown.shortfall <= pool + 1e-9);
        if let Some(next) = level.next() {
            let next_base = grid.base_salary(next, track).unwrap();
            prop_assert!(breakdown.salary <= next_base + 1e-9);
        }
    }

    /// PROPERTY: at the top level there is nothing to earn toward.
    #[test]
    fn property_top_level_has_no_next_credit(
        track in track(),
        held in prop::collection::vec(prop::sample::select(all_badge_names()), 0..40),
    ) {
        let grid = grid();
        let catalogue = catalogue();
        let key = UserKey::new("carol", track);

        let mut events = vec![ProgressionEvent::new(&key, Level::HIGHEST, None)];
        events.extend(
            held.into_iter()
                .map(|name| ProgressionEvent::new(&key, Level::HIGHEST, Some(name))),
        );
        let ledger = Ledger::from_events(events);

        let breakdown = CompensationCalculator::new(&grid, &catalogue)
            .calculate(&ledger, &key)
            .unwrap();
        prop_assert_eq!(breakdown.next_level_credit, 0.0);
    }

    /// PROPERTY: holding every badge of a level leaves no shortfall.
    #[test]
    fn property_full_level_has_no_shortfall(track in track(), level in level()) {
        let grid = grid();
        let catalogue = catalogue();
        let calculator = CompensationCalculator::new(&grid, &catalogue);
        let key = UserKey::new("dana", track);

        let mut ledger = Ledger::new();
        ledger.join(&key, level, &[], &catalogue);
        let earned: BTreeSet<String> = ledger.earned_badges(&key);
        let breakdown = calculator.calculate(&ledger, &key).unwrap();

        prop_assert!(breakdown.shortfall.abs() < 1e-9);
        prop_assert_eq!(
            earned.len(),
            catalogue.badges_for(level, track).count()
        );
    }
}
