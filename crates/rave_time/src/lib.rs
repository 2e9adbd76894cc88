//! Civil-time normalization and astronomical time bases.
//!
//! This crate provides:
//! - Local wall-clock time + UTC offset → UTC with explicit calendar rollover
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - ΔT (TT − UT) for evaluating dynamical-time series from civil input
//! - Greenwich and local mean sidereal time
//! - An `Instant` type for type-safe absolute time handling

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod local;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{decimal_year, delta_t_days, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    julian_centuries,
};
pub use local::{LocalDateTime, MAX_OFFSET_HOURS};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::{MAX_YEAR, MIN_YEAR, UtcTime, validate_date};

/// An absolute point in time, stored as a UTC Julian Date.
///
/// This is the time type handed between the ephemeris, the design-time
/// solver and the chart assembler.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_utc: f64,
}

impl Instant {
    /// Create an instant from a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    /// Create an instant from a validated UTC calendar time.
    pub fn from_utc(utc: &UtcTime) -> Self {
        Self {
            jd_utc: utc.to_jd(),
        }
    }

    /// Normalize a local wall-clock time with a UTC offset in hours.
    pub fn from_local(local: &LocalDateTime, tz_offset_hours: f64) -> Result<Self, TimeError> {
        Ok(Self::from_utc(&local.to_utc(tz_offset_hours)?))
    }

    /// Julian Date (UTC).
    pub fn julian_day(self) -> f64 {
        self.jd_utc
    }

    /// Julian Date in Terrestrial Time (UTC + ΔT).
    pub fn jd_tt(self) -> f64 {
        self.jd_utc + delta_t_days(self.jd_utc)
    }

    /// Calendar form of this instant, rounded to the millisecond.
    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd(self.jd_utc)
    }

    /// The instant `days` later (negative for earlier).
    pub fn offset_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(self, other: Instant) -> f64 {
        self.jd_utc - other.jd_utc
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_utc().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_from_jd_roundtrip() {
        let jd = 2_460_000.5;
        let instant = Instant::from_jd_utc(jd);
        assert_eq!(instant.julian_day(), jd);
    }

    #[test]
    fn instant_j2000() {
        let utc = UtcTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(Instant::from_utc(&utc).julian_day(), J2000_JD);
    }

    #[test]
    fn tt_is_ahead_of_utc() {
        let instant = Instant::from_jd_utc(J2000_JD);
        let dt_s = (instant.jd_tt() - instant.julian_day()) * SECONDS_PER_DAY;
        assert!((dt_s - 63.86).abs() < 0.05, "ΔT = {dt_s}");
    }

    #[test]
    fn offset_and_difference() {
        let a = Instant::from_jd_utc(J2000_JD);
        let b = a.offset_days(-88.5);
        assert!((a.days_since(b) - 88.5).abs() < 1e-12);
        assert!(b < a);
    }

    #[test]
    fn display_uses_calendar() {
        let local = LocalDateTime::new(2000, 1, 1, 12, 0).unwrap();
        let instant = Instant::from_local(&local, -5.0).unwrap();
        assert_eq!(instant.to_string(), "2000-01-01T17:00:00Z");
    }
}
