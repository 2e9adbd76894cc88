//! Design-instant search against the series ephemeris.

use proptest::prelude::*;
use rave_ephem::{Ephemeris, MeeusSeries, normalize_360};
use rave_search::{DesignConfig, find_design_instant, normalize_to_pm180};
use rave_time::{Instant, LocalDateTime};

fn ephemeris() -> Ephemeris<MeeusSeries> {
    Ephemeris::default()
}

#[test]
fn new_york_2000_design_instant() {
    let local = LocalDateTime::parse("2000-01-01", "12:00").unwrap();
    let birth = Instant::from_local(&local, -5.0).unwrap();
    let eph = ephemeris();

    let result = find_design_instant(&eph, birth, &DesignConfig::standard()).unwrap();
    assert!(!result.is_approximate());
    let event = result.into_inner();

    assert!(event.residual_deg < 1e-4, "residual {}", event.residual_deg);
    // Sun near 192.6°, about 12.6° into Libra: early October 1999
    let utc = event.instant.to_utc();
    assert_eq!((utc.year, utc.month), (1999, 10));
    assert!((4..=8).contains(&utc.day), "day {}", utc.day);

    let sun_then = eph.sun(event.instant).into_inner().longitude_deg;
    let arc = normalize_360(event.birth_sun_longitude_deg - sun_then);
    assert!((arc - 88.0).abs() < 1e-4, "arc {arc}");
}

#[test]
fn narrow_window_agrees_with_standard() {
    let eph = ephemeris();
    let birth = Instant::from_jd_utc(2_448_000.5);
    let a = find_design_instant(&eph, birth, &DesignConfig::standard())
        .unwrap()
        .into_inner();
    let b = find_design_instant(&eph, birth, &DesignConfig::narrow())
        .unwrap()
        .into_inner();
    // Sun moves ~1°/day: 1e-6° is well under a second
    assert!(a.instant.days_since(b.instant).abs() < 1e-5);
}

#[test]
fn far_future_birth_uses_fallback_ephemeris() {
    let eph = ephemeris();
    // Year ~6000, past the series validity range
    let birth = Instant::from_jd_utc(2_451_545.0 + 40.0 * 36_525.0);
    let result = find_design_instant(&eph, birth, &DesignConfig::standard()).unwrap();
    assert!(result.is_approximate());
    // The linear Sun still brackets a crossing
    assert!(result.value().iterations > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn residual_is_tiny_for_modern_births(days in -40_000.0f64..40_000.0) {
        let eph = ephemeris();
        let birth = Instant::from_jd_utc(2_451_545.0 + days);
        let result = find_design_instant(&eph, birth, &DesignConfig::standard()).unwrap();
        prop_assert!(!result.is_approximate());

        let event = result.into_inner();
        prop_assert!(event.residual_deg < 1e-4, "residual {}", event.residual_deg);

        let before = event.days_before(birth);
        prop_assert!((85.0..94.0).contains(&before), "days before {}", before);

        let arc = normalize_to_pm180(event.birth_sun_longitude_deg - event.sun_longitude_deg);
        prop_assert!((arc - 88.0).abs() < 1e-4);
    }
}
