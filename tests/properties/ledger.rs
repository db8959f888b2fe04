//! Ledger properties over random action sequences.

use proptest::prelude::*;

use payladder::application::{ActionKind, ReferenceData};
use payladder::domain::ports::LedgerRepository;
use payladder::infrastructure::InMemoryLedgerRepository;
use payladder::ProgressionUseCase;

use super::support::{catalogue, grid, request};

fn use_case() -> ProgressionUseCase<InMemoryLedgerRepository> {
    ProgressionUseCase::new(
        ReferenceData::new(grid(), catalogue()),
        InMemoryLedgerRepository::new(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every action leaves earlier rows untouched, and a rejected
    /// action appends nothing.
    #[test]
    fn property_ledger_is_append_only(requests in prop::collection::vec(request(), 1..24)) {
        let uc = use_case();

        for req in &requests {
            let before = uc.ledger_repo().snapshot().unwrap();
            let outcome = uc.execute(req);
            let after = uc.ledger_repo().snapshot().unwrap();

            prop_assert_eq!(&after.events()[..before.len()], before.events());
            match outcome {
                Ok(result) => {
                    prop_assert_eq!(after.len(), before.len() + result.appended.len());
                    prop_assert_eq!(&after.events()[before.len()..], result.appended.as_slice());
                }
                Err(_) => prop_assert_eq!(after.len(), before.len()),
            }
        }
    }

    /// PROPERTY: reads are pure; a fresh snapshot taken between two reads
    /// gives the same answer and leaves the stored ledger unchanged.
    #[test]
    fn property_reads_are_idempotent(requests in prop::collection::vec(request(), 1..16)) {
        let uc = use_case();
        for req in &requests {
            let _ = uc.execute(req);
        }

        for req in &requests {
            let key = &req.user;
            let first = uc.ledger_repo().snapshot().unwrap();
            let level = first.current_level(key).ok();
            let badges = first.earned_badges(key);

            let second = uc.ledger_repo().snapshot().unwrap();
            prop_assert_eq!(second.current_level(key).ok(), level);
            prop_assert_eq!(second.earned_badges(key), badges);
            prop_assert_eq!(&first, &second);
        }
    }

    /// PROPERTY: current level is the level of the user's last row.
    #[test]
    fn property_current_level_is_last_row(requests in prop::collection::vec(request(), 1..24)) {
        let uc = use_case();
        for req in &requests {
            let _ = uc.execute(req);
        }
        let ledger = uc.ledger_repo().snapshot().unwrap();

        for req in &requests {
            let key = &req.user;
            let last = ledger.history(key).last().map(|e| e.level);
            prop_assert_eq!(ledger.current_level(key).ok(), last);
        }
    }

    /// PROPERTY: a successful join leaves the user holding every badge of
    /// the starting level.
    #[test]
    fn property_join_backfills_starting_level(req in request()) {
        let uc = use_case();
        let catalogue = catalogue();

        if let (Ok(_), Some(level)) = (uc.execute(&req), req.level) {
            if req.kind == ActionKind::Join {
                let earned = uc.ledger_repo().snapshot().unwrap().earned_badges(&req.user);
                for badge in catalogue.badges_for(level, req.user.track) {
                    prop_assert!(earned.contains(&badge.name));
                }
            }
        }
    }
}
