//! Local civil time and its normalization to UTC.
//!
//! Birth data arrives as a wall-clock date/time plus a fixed offset from UTC
//! in hours. The offset may be fractional (India is +5.5, Nepal +5.75) and
//! may push the time across one or more day boundaries, so the day, month,
//! and year are rolled over explicitly before any Julian Day conversion.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::SECONDS_PER_DAY;
use crate::utc_time::{UtcTime, next_day, prev_day, validate_date};

/// Largest accepted timezone offset magnitude, in hours.
pub const MAX_OFFSET_HOURS: f64 = 48.0;

/// A wall-clock date and time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalDateTime {
    /// Build a validated local date/time.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        validate_date(year, month, day)?;
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Parse a `"YYYY-MM-DD"` date and an `"HH:MM"` time.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let (year, month, day) = parse_date(date)?;
        let (hour, minute) = parse_time(time)?;
        Self::new(year, month, day, hour, minute)
    }

    /// Shift by `-tz_offset_hours` and roll the calendar over as needed.
    ///
    /// The offset is rounded to the nearest second, so a fractional offset
    /// always lands on the same UTC time regardless of how it was written.
    pub fn to_utc(&self, tz_offset_hours: f64) -> Result<UtcTime, TimeError> {
        if !tz_offset_hours.is_finite() || tz_offset_hours.abs() > MAX_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(tz_offset_hours));
        }
        let offset_s = (tz_offset_hours * 3600.0).round() as i64;
        let local_s = self.hour as i64 * 3600 + self.minute as i64 * 60;
        let utc_s = local_s - offset_s;

        let day_len = SECONDS_PER_DAY as i64;
        let day_shift = utc_s.div_euclid(day_len);
        let second_of_day = utc_s.rem_euclid(day_len);

        let (mut year, mut month, mut day) = (self.year, self.month, self.day);
        for _ in 0..day_shift.unsigned_abs() {
            (year, month, day) = if day_shift > 0 {
                next_day(year, month, day)
            } else {
                prev_day(year, month, day)
            };
        }

        UtcTime::new(
            year,
            month,
            day,
            (second_of_day / 3600) as u32,
            ((second_of_day % 3600) / 60) as u32,
            (second_of_day % 60) as f64,
        )
    }
}

impl FromStr for LocalDateTime {
    type Err = TimeError;

    /// Parse `"YYYY-MM-DDTHH:MM"` (a space is accepted in place of `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| parse_error("date-time", s, "YYYY-MM-DDTHH:MM"))?;
        Self::parse(date, time)
    }
}

fn parse_error(field: &'static str, value: &str, expected: &'static str) -> TimeError {
    TimeError::Parse {
        field,
        value: value.to_string(),
        expected,
    }
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let err = || parse_error("date", s, "YYYY-MM-DD");
    // A leading '-' is a negative (proleptic) year, not a separator.
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let mut parts = body.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(err());
    };
    let digits = [y, m, d].into_iter().all(is_digits);
    if y.len() < 4 || m.len() != 2 || d.len() != 2 || !digits {
        return Err(err());
    }
    let year: i32 = y.parse().map_err(|_| err())?;
    let month: u32 = m.parse().map_err(|_| err())?;
    let day: u32 = d.parse().map_err(|_| err())?;
    Ok((sign * year, month, day))
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_time(s: &str) -> Result<(u32, u32), TimeError> {
    let err = || parse_error("time", s, "HH:MM");
    let (h, m) = s.split_once(':').ok_or_else(err)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 || !is_digits(h) || !is_digits(m) {
        return Err(err());
    }
    let hour: u32 = h.parse().map_err(|_| err())?;
    let minute: u32 = m.parse().map_err(|_| err())?;
    Ok((hour, minute))
}
