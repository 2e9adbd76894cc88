//! Greenwich and local mean sidereal time.
//!
//! Inputs are UT Julian Dates. UTC is used as a stand-in for UT1; the
//! difference stays under 0.9 s, well below what the Ascendant needs.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time from a sidereal time at Greenwich and an east longitude.
///
/// Returns degrees in [0, 360).
pub fn local_sidereal_time_deg(greenwich_deg: f64, longitude_east_deg: f64) -> f64 {
    (greenwich_deg + longitude_east_deg).rem_euclid(360.0)
}
