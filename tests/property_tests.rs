//! Property-based tests for rotation and stamp rendering.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use daylog::session::ManualClock;
use daylog::timestamp::{format_duration, format_time};
use daylog::{DisplayFlag, DisplayFlags, LogFileSession};
use proptest::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Forward clock steps, from a few minutes to a couple of days
fn steps_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..3_000, 1..40)
}

fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A session opens a new file exactly when the day of the month changes
    #[test]
    fn rotates_once_per_day_change(steps in steps_strategy()) {
        let temp = TempDir::new().unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 2, 27)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let clock = ManualClock::new(start);
        let mut session =
            LogFileSession::with_clock(&temp.path().to_string_lossy(), Arc::new(clock.clone()));

        prop_assert!(session.update().unwrap());
        let mut day = start.day();
        let mut now = start;
        for minutes in steps {
            now += Duration::minutes(minutes);
            clock.set(now);
            let rotated = session.update().unwrap();
            prop_assert_eq!(rotated, now.day() != day);
            prop_assert!(!session.update().unwrap());
            day = now.day();
            prop_assert_eq!(session.current_day(), Some(day));
        }
    }

    /// Twelve-hour stamps always show an hour in 1..=12 with the right tag
    #[test]
    fn twelve_hour_range(time in time_strategy()) {
        let flags = DisplayFlags::empty().with(DisplayFlag::TwelveHour, true);
        let out = format_time(time, flags);
        let hour: u32 = out[..2].parse().unwrap();
        prop_assert!((1..=12).contains(&hour));
        let tag = if time.hour() >= 12 { "_PM" } else { "_AM" };
        prop_assert!(out.ends_with(tag));
    }

    /// Duration fields stay within their ranges and add back up
    #[test]
    fn duration_fields_add_up(secs in 0u64..400_000, hundredths in 0u64..100) {
        let value = secs as f64 + hundredths as f64 / 100.0 + 0.001;
        let out = format_duration(value);
        let (whole, frac) = out.split_once('.').unwrap();
        prop_assert_eq!(frac.parse::<u64>().unwrap(), hundredths);

        let mut total = 0u64;
        let fields: Vec<u64> = whole.split(':').map(|f| f.parse().unwrap()).collect();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                prop_assert!(*field < 60);
            }
            total = total * 60 + field;
        }
        prop_assert_eq!(total, secs);
    }
}
