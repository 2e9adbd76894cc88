//! Bodies, observer locations and normalized ecliptic positions.

use rave_time::Instant;

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Chart points computed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Ascendant,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Ascendant => "Ascendant",
        }
    }
}

/// An ecliptic longitude in [0, 360) for one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    pub body: Body,
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub instant: Instant,
}

impl EclipticPosition {
    /// Build a position, normalizing the longitude.
    pub fn new(body: Body, longitude_deg: f64, instant: Instant) -> Self {
        Self {
            body,
            longitude_deg: normalize_360(longitude_deg),
            instant,
        }
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check coordinate ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err("latitude must be within [-90, 90]");
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err("longitude must be within [-180, 180]");
        }
        if !self.altitude_m.is_finite() {
            return Err("altitude must be finite");
        }
        Ok(())
    }
}
