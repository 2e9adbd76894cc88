//! Position sources for the Sun and the Moon.
//!
//! [`MeeusSeries`] is the precise path. [`LinearModel`] is the
//! degrees-per-day fallback; it never fails and is only ever reported as
//! approximate by [`crate::Ephemeris`].

use rave_time::{J2000_JD, Instant, julian_centuries};

use crate::error::EphemerisError;
use crate::moon::moon_apparent_longitude_deg;
use crate::position::normalize_360;
use crate::sun::sun_apparent_longitude_deg;

/// Something that can place the Sun and the Moon on the ecliptic.
pub trait EphemerisSource {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Apparent ecliptic longitude of the Sun in degrees.
    fn sun_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError>;

    /// Geocentric ecliptic longitude of the Moon in degrees.
    fn moon_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError>;
}

/// Truncated analytical series evaluated in TT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeeusSeries {
    /// Validity half-width around J2000.0, in Julian centuries.
    pub max_centuries: f64,
}

impl MeeusSeries {
    /// ±30 centuries around J2000.0 (roughly 1000 BCE to 5000 CE).
    pub const DEFAULT_MAX_CENTURIES: f64 = 30.0;

    pub fn new(max_centuries: f64) -> Self {
        Self { max_centuries }
    }

    fn centuries(&self, instant: Instant) -> Result<f64, EphemerisError> {
        let jd_tt = instant.jd_tt();
        let t = julian_centuries(jd_tt);
        if !t.is_finite() || t.abs() > self.max_centuries {
            return Err(EphemerisError::OutOfRange {
                source_name: self.name(),
                jd_tt,
            });
        }
        Ok(t)
    }
}

impl Default for MeeusSeries {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_CENTURIES)
    }
}

fn finite(name: &'static str, deg: f64) -> Result<f64, EphemerisError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(EphemerisError::NonFinite(name))
    }
}

impl EphemerisSource for MeeusSeries {
    fn name(&self) -> &'static str {
        "meeus-series"
    }

    fn sun_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError> {
        let t = self.centuries(instant)?;
        finite(self.name(), sun_apparent_longitude_deg(t))
    }

    fn moon_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError> {
        let t = self.centuries(instant)?;
        finite(self.name(), moon_apparent_longitude_deg(t))
    }
}

/// March equinox 2000-03-20 07:35 UT, where the Sun is at 0°.
pub const EQUINOX_2000_JD: f64 = 2_451_623.815_97;

/// Mean solar motion in degrees per day (one tropical year per 360°).
pub const SUN_DEG_PER_DAY: f64 = 360.0 / 365.242_189;

/// Mean lunar longitude at J2000.0 in degrees.
pub const MOON_LONGITUDE_J2000_DEG: f64 = 218.316_5;

/// Mean lunar motion in degrees per day.
pub const MOON_DEG_PER_DAY: f64 = 13.176_396_48;

/// Uniform-motion model anchored at known epochs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearModel;

impl LinearModel {
    /// Sun longitude in degrees, [0, 360).
    pub fn sun_deg(&self, instant: Instant) -> f64 {
        let days = instant.julian_day() - EQUINOX_2000_JD;
        normalize_360(days * SUN_DEG_PER_DAY)
    }

    /// Moon longitude in degrees, [0, 360).
    pub fn moon_deg(&self, instant: Instant) -> f64 {
        let days = instant.julian_day() - J2000_JD;
        normalize_360(MOON_LONGITUDE_J2000_DEG + days * MOON_DEG_PER_DAY)
    }
}

impl EphemerisSource for LinearModel {
    fn name(&self) -> &'static str {
        "linear-model"
    }

    fn sun_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError> {
        Ok(self.sun_deg(instant))
    }

    fn moon_longitude_deg(&self, instant: Instant) -> Result<f64, EphemerisError> {
        Ok(self.moon_deg(instant))
    }
}
