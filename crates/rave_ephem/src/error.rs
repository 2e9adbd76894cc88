//! Error types for ephemeris evaluation.

use thiserror::Error;

/// Errors from a position source or from chart-angle inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The instant lies outside the range the series is valid for.
    #[error("JD {jd_tt:.3} (TT) is outside the {source_name} validity range")]
    OutOfRange { source_name: &'static str, jd_tt: f64 },
    /// The series produced a non-finite longitude.
    #[error("{0} produced a non-finite longitude")]
    NonFinite(&'static str),
    /// Observer coordinates are out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
}
