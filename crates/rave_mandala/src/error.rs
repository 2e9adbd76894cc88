//! Error types for gate table validation.

use thiserror::Error;

/// Ways a per-sign segment table can fail to partition the wheel.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GateTableError {
    /// Gate number outside 1..=64.
    #[error("gate {0} is outside 1..=64")]
    InvalidGate(u8),
    /// Segments inside a sign leave a gap, overlap, or stop short of 30°.
    #[error("{sign} is not covered contiguously at {at_deg}°")]
    Gap { sign: &'static str, at_deg: f64 },
    /// A gate does not total exactly one gate width.
    #[error("gate {gate} spans {width_deg}°, expected 5.625°")]
    Width { gate: u8, width_deg: f64 },
    /// A gate appears in two separate places.
    #[error("gate {0} appears more than once")]
    Duplicate(u8),
    /// A gate split at a cusp does not continue in the next sign.
    #[error("{sign} should open with the rest of gate {expected}, found gate {found}")]
    SplitMismatch {
        sign: &'static str,
        expected: u8,
        found: u8,
    },
    /// A gate never appears.
    #[error("gate {0} is missing from the table")]
    Missing(u8),
}
