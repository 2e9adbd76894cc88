//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the calendar face of an [`Instant`](crate::Instant). It is
//! validated on construction so every value maps to exactly one Julian Day.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

/// Earliest accepted calendar year.
pub const MIN_YEAR: i32 = -9_999_999;

/// Latest accepted calendar year.
pub const MAX_YEAR: i32 = 9_999_999;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    /// Build a validated UTC time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        validate_date(year, month, day)?;
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidSecond(second));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Julian Date (UTC) of this calendar time.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar time from a Julian Date (UTC), rounded to the millisecond.
    pub fn from_jd(jd: f64) -> Self {
        let (mut year, mut month, day_frac) = jd_to_calendar(jd);
        let mut day = day_frac.floor() as u32;
        let mut millis = (day_frac.fract() * SECONDS_PER_DAY * 1000.0).round() as u64;
        if millis >= 86_400_000 {
            millis -= 86_400_000;
            (year, month, day) = next_day(year, month, day);
        }
        let hour = (millis / 3_600_000) as u32;
        let minute = ((millis % 3_600_000) / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Check that `(year, month, day)` is a real proleptic Gregorian date.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), TimeError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth(month));
    }
    let max = days_in_month(year, month);
    if day == 0 || day > max {
        return Err(TimeError::InvalidDay {
            year,
            month,
            day,
            max,
        });
    }
    Ok(())
}

/// The calendar day after `(year, month, day)`.
pub(crate) fn next_day(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    if day < days_in_month(year, month) {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year.saturating_add(1), 1, 1)
    }
}

/// The calendar day before `(year, month, day)`.
pub(crate) fn prev_day(year: i32, month: u32, day: u32) -> (i32, u32, u32) {
    if day > 1 {
        (year, month, day - 1)
    } else if month > 1 {
        (year, month - 1, days_in_month(year, month - 1))
    } else {
        (year.saturating_sub(1), 12, 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5).unwrap();
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_components() {
        assert_eq!(
            UtcTime::new(2024, 13, 1, 0, 0, 0.0),
            Err(TimeError::InvalidMonth(13))
        );
        assert!(matches!(
            UtcTime::new(2023, 2, 29, 0, 0, 0.0),
            Err(TimeError::InvalidDay { max: 28, .. })
        ));
        assert_eq!(
            UtcTime::new(2024, 1, 1, 24, 0, 0.0),
            Err(TimeError::InvalidHour(24))
        );
        assert_eq!(
            UtcTime::new(2024, 1, 1, 0, 60, 0.0),
            Err(TimeError::InvalidMinute(60))
        );
        assert!(UtcTime::new(2024, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn j2000_jd() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_eq!(t.to_jd(), J2000_JD);
    }

    #[test]
    fn from_jd_rounds_to_whole_second() {
        // 17:00 is not exactly representable as a fraction of a day.
        let jd = UtcTime::new(2000, 1, 1, 17, 0, 0.0).unwrap().to_jd();
        let t = UtcTime::from_jd(jd);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2000, 1, 1, 17, 0));
        assert!(t.second.abs() < 1e-9);
    }

    #[test]
    fn from_jd_carries_into_next_year() {
        let t = UtcTime::from_jd(calendar_to_jd(2000, 1, 1.0) - 1e-9);
        assert_eq!(t.to_string(), "2000-01-01T00:00:00Z");
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 5.25).unwrap();
        assert_eq!(t.to_string(), "2024-01-15T12:30:05.250Z");
    }

    #[test]
    fn day_stepping_wraps_year() {
        assert_eq!(next_day(1999, 12, 31), (2000, 1, 1));
        assert_eq!(prev_day(2000, 1, 1), (1999, 12, 31));
        assert_eq!(prev_day(2000, 3, 1), (2000, 2, 29));
        assert_eq!(next_day(2100, 2, 28), (2100, 3, 1));
    }

    #[test]
    fn rejects_years_outside_range() {
        assert_eq!(
            UtcTime::new(MAX_YEAR + 1, 1, 1, 0, 0, 0.0),
            Err(TimeError::YearOutOfRange(MAX_YEAR + 1))
        );
        assert_eq!(
            validate_date(i32::MIN, 1, 1),
            Err(TimeError::YearOutOfRange(i32::MIN))
        );
        assert!(UtcTime::new(MAX_YEAR, 12, 31, 23, 59, 0.0).is_ok());
    }
}
