//! Error taxonomy for chart requests.
//!
//! A request aborts for exactly two reasons: the input is malformed, or the
//! birth place could not be resolved. Falling back to an approximate
//! ephemeris or solver is reported in the result, not here.

use rave_mandala::GateTableError;
use rave_search::SearchError;
use rave_time::TimeError;
use thiserror::Error;

/// Malformed date, time, offset, coordinates or request body.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("invalid location: {0}")]
    Location(&'static str),
    #[error("birth place name is empty")]
    EmptyPlace,
    #[error("malformed request: {0}")]
    Malformed(String),
}

/// The geocoder could not turn a place name into coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeocodeError {
    #[error("no match for place {0:?}")]
    NotFound(String),
    #[error("geocoder unavailable: {0}")]
    Unavailable(String),
    #[error("geocoder returned invalid coordinates for {place:?}: {reason}")]
    InvalidCoordinates { place: String, reason: &'static str },
}

/// Why a chart request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("could not resolve birth place: {0}")]
    Resolution(#[from] GeocodeError),
}

impl ChartError {
    /// Whether the caller should ask for a different place.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

/// Engine construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("gate table: {0}")]
    GateTable(#[from] GateTableError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
