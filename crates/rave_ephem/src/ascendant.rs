//! Ascendant and Midheaven from apparent local sidereal time.
//!
//! The Ascendant is the ecliptic point on the eastern horizon:
//!
//! `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
//!
//! and the Midheaven is the ecliptic point on the upper meridian:
//!
//! `MC = atan2(sin θ, cos θ·cos ε)`
//!
//! with θ the local apparent sidereal time, ε the true obliquity and φ the
//! geodetic latitude. Both results are in [0, 360).
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12, 13, 22.

use rave_frames::{equation_of_equinoxes_deg, true_obliquity_deg};
use rave_time::{Instant, gmst_deg, julian_centuries, local_sidereal_time_deg};

use crate::error::EphemerisError;
use crate::position::{GeoLocation, normalize_360};

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
pub fn ascendant_from_lst_deg(lst_deg: f64, obliquity_deg: f64, latitude_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    normalize_360(asc.to_degrees())
}

/// Ecliptic longitude of the Midheaven in degrees, [0, 360).
pub fn midheaven_from_lst_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let theta = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

/// Local apparent sidereal time in degrees, [0, 360).
///
/// GMST is taken at the UTC Julian Date; the equation of the equinoxes is
/// evaluated in TT.
pub fn local_apparent_sidereal_time_deg(instant: Instant, longitude_east_deg: f64) -> f64 {
    let t = julian_centuries(instant.jd_tt());
    let gast = gmst_deg(instant.julian_day()) + equation_of_equinoxes_deg(t);
    local_sidereal_time_deg(gast, longitude_east_deg)
}

/// Ascendant and Midheaven for one observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAngles {
    pub ascendant_deg: f64,
    pub midheaven_deg: f64,
    /// Local apparent sidereal time used for both angles.
    pub lst_deg: f64,
    /// True obliquity used for both angles.
    pub obliquity_deg: f64,
}

/// Compute both angles, sharing the sidereal time and obliquity.
pub fn chart_angles(instant: Instant, location: &GeoLocation) -> Result<ChartAngles, EphemerisError> {
    location
        .validate()
        .map_err(EphemerisError::InvalidLocation)?;

    let lst_deg = local_apparent_sidereal_time_deg(instant, location.longitude_deg);
    let obliquity_deg = true_obliquity_deg(julian_centuries(instant.jd_tt()));

    Ok(ChartAngles {
        ascendant_deg: ascendant_from_lst_deg(lst_deg, obliquity_deg, location.latitude_deg),
        midheaven_deg: midheaven_from_lst_deg(lst_deg, obliquity_deg),
        lst_deg,
        obliquity_deg,
    })
}
