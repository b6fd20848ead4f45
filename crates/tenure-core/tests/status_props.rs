// Rust guideline compliant 2026-10-12

//! Property-based tests for status resolution.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tenure_core::dates::format_storage;
use tenure_core::{resolve_status, resolve_status_within, LifecycleColumns, ManualStatus, Status};

fn arb_manual() -> impl Strategy<Value = ManualStatus> {
    prop_oneof![
        Just(ManualStatus::Automatic),
        Just(ManualStatus::Executed),
        Just(ManualStatus::Rescinded),
    ]
}

#[test]
fn test_threshold_table() {
    let cases = [
        (-1, Status::Expired),
        (0, Status::Warning),
        (30, Status::Warning),
        (31, Status::Active),
    ];
    for (days, expected) in cases {
        assert_eq!(resolve_status(days, ManualStatus::Automatic), expected, "days = {days}");
    }
}

proptest! {
    /// Manual overrides win regardless of the day count.
    #[test]
    fn prop_override_wins(days in any::<i64>()) {
        prop_assert_eq!(resolve_status(days, ManualStatus::Executed), Status::Executed);
        prop_assert_eq!(resolve_status(days, ManualStatus::Rescinded), Status::Rescinded);
    }

    /// Without an override the status is never a manual one, and follows the
    /// sign of the day count.
    #[test]
    fn prop_automatic_follows_dates(days in any::<i64>(), window in 0u32..=365) {
        let status = resolve_status_within(days, ManualStatus::Automatic, window);
        prop_assert!(!status.is_manual());
        prop_assert_eq!(status == Status::Expired, days < 0);
        prop_assert_eq!(status == Status::Active, days > i64::from(window));
    }

    /// Resolution is deterministic.
    #[test]
    fn prop_resolution_is_pure(days in any::<i64>(), manual in arb_manual()) {
        prop_assert_eq!(resolve_status(days, manual), resolve_status(days, manual));
    }

    /// A derived view agrees with resolving its own day count.
    #[test]
    fn prop_view_consistent(offset in -1000i64..1000, manual in arb_manual()) {
        let today = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
        let columns = LifecycleColumns {
            start_date: None,
            end_date: Some(format_storage(today + Duration::days(offset))),
            manual_status: manual,
        };
        let view = columns.resolve(today, 30);
        prop_assert_eq!(view.days_remaining, offset);
        prop_assert_eq!(view.status, resolve_status(offset, manual));
    }
}
