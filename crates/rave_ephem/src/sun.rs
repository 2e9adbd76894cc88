//! Apparent geocentric longitude of the Sun.
//!
//! Low-accuracy solar theory, about 0.01° over several centuries around
//! J2000. The series is continuous and strictly increasing in time, which
//! the design-time bisection relies on.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.

use crate::position::normalize_360;

/// Apparent ecliptic longitude of the Sun in degrees, [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    // Geometric mean longitude and mean anomaly
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();

    // Equation of center
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_longitude = l0 + c;

    // Aberration and nutation in longitude
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(true_longitude - 0.005_69 - 0.004_78 * omega.sin())
}
