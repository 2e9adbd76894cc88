//! Obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU 1980
//! polynomial, good to 1″ within a few centuries of J2000.0).

use crate::nutation::nutation;

/// Mean obliquity at J2000.0: 23°26′21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.0 + 26.0 / 60.0 + 21.448 / 3600.0;

/// Mean obliquity of the ecliptic in degrees at `t` Julian centuries (TT).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = -46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity, in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).delta_epsilon_deg()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_EXAMPLE_22A: f64 = -0.127_296_372_348;

    #[test]
    fn j2000_value() {
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
        assert!((OBLIQUITY_J2000_DEG - 23.439_291).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a_mean() {
        // ε₀ = 23°26′27.407″
        let expected = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        let eps0 = mean_obliquity_deg(T_EXAMPLE_22A);
        assert!((eps0 - expected).abs() < 1e-6, "ε₀ = {eps0}");
    }

    #[test]
    fn meeus_example_22a_true() {
        // ε = 23°26′36.850″, abridged nutation is within 0.1″
        let expected = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
        let eps = true_obliquity_deg(T_EXAMPLE_22A);
        assert!((eps - expected).abs() < 0.1 / 3600.0, "ε = {eps}");
    }

    #[test]
    fn obliquity_decreases_this_era() {
        assert!(mean_obliquity_deg(0.5) < mean_obliquity_deg(0.0));
    }
}
