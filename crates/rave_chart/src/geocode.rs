//! Place-name resolution.
//!
//! Geocoding is the one awaited call in a chart request. The engine only
//! needs a [`Geocoder`]; timeouts and retries belong to the caller.

use std::collections::HashMap;

use async_trait::async_trait;
use rave_ephem::GeoLocation;
use tracing::debug;

use crate::error::{ChartError, GeocodeError, InputError};
use crate::input::{BirthPlace, location_from_coordinates};

/// Resolves a place name to coordinates or fails explicitly.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve_place(&self, name: &str) -> Result<GeoLocation, GeocodeError>;
}

/// Static name → coordinates table.
///
/// Lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: HashMap<String, GeoLocation>,
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, location: GeoLocation) {
        self.places.insert(key(name), location);
    }

    pub fn with_place(mut self, name: &str, location: GeoLocation) -> Self {
        self.insert(name, location);
        self
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&GeoLocation> {
        self.places.get(&key(name))
    }
}

impl<'a> FromIterator<(&'a str, GeoLocation)> for Gazetteer {
    fn from_iter<I: IntoIterator<Item = (&'a str, GeoLocation)>>(iter: I) -> Self {
        let mut gazetteer = Self::new();
        for (name, location) in iter {
            gazetteer.insert(name, location);
        }
        gazetteer
    }
}

#[async_trait]
impl Geocoder for Gazetteer {
    async fn resolve_place(&self, name: &str) -> Result<GeoLocation, GeocodeError> {
        self.get(name)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound(name.to_string()))
    }
}

/// Turn a [`BirthPlace`] into validated coordinates.
///
/// Bad coordinates in the request are an input error. A failed lookup, or
/// a geocoder answer outside the valid ranges, is a resolution error.
pub async fn resolve_birth_place(
    geocoder: &dyn Geocoder,
    place: &BirthPlace,
) -> Result<GeoLocation, ChartError> {
    let name = match place {
        BirthPlace::Coordinates {
            latitude,
            longitude,
            altitude,
        } => return Ok(location_from_coordinates(*latitude, *longitude, *altitude)?),
        BirthPlace::Name(name) => name,
    };
    if name.trim().is_empty() {
        return Err(InputError::EmptyPlace.into());
    }

    let location = geocoder.resolve_place(name).await?;
    location
        .validate()
        .map_err(|reason| GeocodeError::InvalidCoordinates {
            place: name.clone(),
            reason,
        })?;
    debug!(
        place = %name,
        lat = location.latitude_deg,
        lon = location.longitude_deg,
        "birth place resolved"
    );
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gazetteer() -> Gazetteer {
        [("New York", GeoLocation::new(40.7128, -74.006, 10.0))]
            .into_iter()
            .collect()
    }

    #[tokio::test]
    async fn lookup_ignores_case() {
        let loc = gazetteer().resolve_place("  new YORK ").await.unwrap();
        assert_eq!(loc.latitude_deg, 40.7128);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let err = gazetteer().resolve_place("Atlantis").await.unwrap_err();
        assert_eq!(err, GeocodeError::NotFound("Atlantis".into()));
    }

    #[tokio::test]
    async fn coordinates_skip_the_geocoder() {
        let place = BirthPlace::Coordinates {
            latitude: 10.0,
            longitude: 20.0,
            altitude: Some(5.0),
        };
        let loc = resolve_birth_place(&Gazetteer::new(), &place).await.unwrap();
        assert_eq!((loc.latitude_deg, loc.longitude_deg, loc.altitude_m), (10.0, 20.0, 5.0));
    }

    #[tokio::test]
    async fn empty_name_is_input_error() {
        let err = resolve_birth_place(&gazetteer(), &BirthPlace::Name("  ".into()))
            .await
            .unwrap_err();
        assert_eq!(err, ChartError::Input(InputError::EmptyPlace));
    }

    #[tokio::test]
    async fn bogus_geocoder_answer_is_resolution_error() {
        let bad = Gazetteer::new().with_place("Nowhere", GeoLocation::new(123.0, 0.0, 0.0));
        let err = resolve_birth_place(&bad, &BirthPlace::Name("Nowhere".into()))
            .await
            .unwrap_err();
        assert!(err.is_resolution());
    }
}
