//! Birth data: the validated input and its JSON request form.

use rave_ephem::GeoLocation;
use rave_time::{Instant, LocalDateTime};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Validated birth data.
///
/// Construction checks the calendar date, clock time, timezone offset and
/// coordinates, so everything downstream is infallible on input grounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    local: LocalDateTime,
    tz_offset_hours: f64,
    location: GeoLocation,
    instant: Instant,
}

impl BirthInput {
    pub fn new(
        local: LocalDateTime,
        tz_offset_hours: f64,
        location: GeoLocation,
    ) -> Result<Self, InputError> {
        location.validate().map_err(InputError::Location)?;
        let instant = Instant::from_local(&local, tz_offset_hours)?;
        Ok(Self {
            local,
            tz_offset_hours,
            location,
            instant,
        })
    }

    pub fn local(&self) -> &LocalDateTime {
        &self.local
    }

    pub fn tz_offset_hours(&self) -> f64 {
        self.tz_offset_hours
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    /// Birth Instant (UTC).
    pub fn instant(&self) -> Instant {
        self.instant
    }
}

/// Where the person was born: a name to geocode, or coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BirthPlace {
    Coordinates {
        latitude: f64,
        longitude: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        altitude: Option<f64>,
    },
    Name(String),
}

impl BirthPlace {
    /// Coordinates given directly, validated.
    pub fn coordinates(&self) -> Option<Result<GeoLocation, InputError>> {
        match *self {
            Self::Coordinates {
                latitude,
                longitude,
                altitude,
            } => Some(location_from_coordinates(latitude, longitude, altitude)),
            Self::Name(_) => None,
        }
    }
}

pub(crate) fn location_from_coordinates(
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
) -> Result<GeoLocation, InputError> {
    let location = GeoLocation::new(latitude, longitude, altitude.unwrap_or(0.0));
    location.validate().map_err(InputError::Location)?;
    Ok(location)
}

/// Request body: `{ birthDate, birthTime, birthPlace, timezoneOffsetHours }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRequest {
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM`
    pub birth_time: String,
    pub birth_place: BirthPlace,
    pub timezone_offset_hours: f64,
}

impl BirthRequest {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        serde_json::from_str(json).map_err(|e| InputError::Malformed(e.to_string()))
    }

    /// Parse the date and time strings.
    pub fn local_date_time(&self) -> Result<LocalDateTime, InputError> {
        Ok(LocalDateTime::parse(&self.birth_date, &self.birth_time)?)
    }

    /// Build the validated input once the place is known.
    pub fn to_input(&self, location: GeoLocation) -> Result<BirthInput, InputError> {
        BirthInput::new(self.local_date_time()?, self.timezone_offset_hours, location)
    }
}
