//! Error types for civil-time validation and parsing.

use thiserror::Error;

/// Errors from calendar validation, offset normalization, or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported calendar range.
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),
    /// Month outside 1..=12.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),
    /// Day outside the valid range for its month.
    #[error("day {day} is outside 1..={max} for {year:04}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        max: u32,
    },
    /// Hour outside 0..=23.
    #[error("hour {0} is outside 0..=23")]
    InvalidHour(u32),
    /// Minute outside 0..=59.
    #[error("minute {0} is outside 0..=59")]
    InvalidMinute(u32),
    /// Second outside [0, 60) or not finite.
    #[error("second {0} is outside [0, 60)")]
    InvalidSecond(f64),
    /// Timezone offset not finite or beyond the accepted magnitude.
    #[error("timezone offset {0} h is not finite or exceeds 48 h")]
    InvalidOffset(f64),
    /// Text did not match the expected layout.
    #[error("malformed {field} {value:?}, expected {expected}")]
    Parse {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}
