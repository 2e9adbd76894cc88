//! Round-trip checks: local → UTC → Julian Day → calendar.

use proptest::prelude::*;
use rave_time::{Instant, LocalDateTime, UtcTime, days_in_month};

fn local_strategy() -> impl Strategy<Value = LocalDateTime> {
    (1600i32..2400, 1u32..=12, 0u32..24, 0u32..60)
        .prop_flat_map(|(y, m, h, mi)| {
            (Just(y), Just(m), 1..=days_in_month(y, m), Just(h), Just(mi))
        })
        .prop_map(|(y, m, d, h, mi)| LocalDateTime::new(y, m, d, h, mi).unwrap())
}

proptest! {
    #[test]
    fn julian_day_recovers_utc_calendar(
        local in local_strategy(),
        quarter_hours in -56i32..=56,
    ) {
        let offset = quarter_hours as f64 * 0.25;
        let utc = local.to_utc(offset).unwrap();
        let back = Instant::from_utc(&utc).to_utc();
        prop_assert_eq!(
            (back.year, back.month, back.day, back.hour, back.minute),
            (utc.year, utc.month, utc.day, utc.hour, utc.minute)
        );
        prop_assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn offset_shift_matches_jd_difference(local in local_strategy(), offset in -14.0f64..14.0) {
        let shifted = Instant::from_local(&local, offset).unwrap();
        let as_utc = Instant::from_local(&local, 0.0).unwrap();
        let expected = -(offset * 3600.0).round() / 86_400.0;
        prop_assert!((shifted.days_since(as_utc) - expected).abs() < 1e-8);
    }
}

#[test]
fn new_york_scenario() {
    let local = LocalDateTime::parse("2000-01-01", "12:00").unwrap();
    let utc = local.to_utc(-5.0).unwrap();
    assert_eq!(utc, UtcTime::new(2000, 1, 1, 17, 0, 0.0).unwrap());
}

#[test]
fn previous_day_scenario() {
    let local = LocalDateTime::parse("2000-01-01", "01:00").unwrap();
    let utc = local.to_utc(5.0).unwrap();
    assert_eq!(utc, UtcTime::new(1999, 12, 31, 20, 0, 0.0).unwrap());
}
