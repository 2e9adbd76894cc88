//! Abridged nutation in longitude (Δψ) and obliquity (Δε).
//!
//! Four-term series good to about 0.5″ in Δψ and 0.1″ in Δε, far inside the
//! tolerance of a gate boundary (5.625° / 6 ≈ 0.94° per line).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22.

/// Nutation angles in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ, arcseconds.
    pub delta_psi_arcsec: f64,
    /// Nutation in obliquity Δε, arcseconds.
    pub delta_epsilon_arcsec: f64,
}

impl Nutation {
    /// Δψ in degrees.
    pub fn delta_psi_deg(&self) -> f64 {
        self.delta_psi_arcsec / 3600.0
    }

    /// Δε in degrees.
    pub fn delta_epsilon_deg(&self) -> f64 {
        self.delta_epsilon_arcsec / 3600.0
    }
}

/// Nutation at `t` Julian centuries (TT) since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Ω: longitude of the Moon's ascending node
    let om = (125.044_52 - 1934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0)
        .to_radians();
    // Mean longitudes of the Sun and Moon
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let delta_psi_arcsec = -17.20 * om.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * om).sin();
    let delta_epsilon_arcsec = 9.20 * om.cos() + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * om).cos();

    Nutation {
        delta_psi_arcsec,
        delta_epsilon_arcsec,
    }
}

/// Equation of the equinoxes (apparent − mean sidereal time) in degrees.
pub fn equation_of_equinoxes_deg(t: f64) -> f64 {
    let n = nutation(t);
    let eps = crate::obliquity::true_obliquity_deg(t).to_radians();
    n.delta_psi_deg() * eps.cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1987 April 10, 0h TD.
    const T_EXAMPLE_22A: f64 = -0.127_296_372_348;

    #[test]
    fn meeus_example_22a() {
        let n = nutation(T_EXAMPLE_22A);
        assert!(
            (n.delta_psi_arcsec - (-3.788)).abs() < 0.5,
            "Δψ = {}",
            n.delta_psi_arcsec
        );
        assert!(
            (n.delta_epsilon_arcsec - 9.443).abs() < 0.1,
            "Δε = {}",
            n.delta_epsilon_arcsec
        );
    }

    #[test]
    fn typical_amplitude() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let n = nutation(t);
            assert!(n.delta_psi_arcsec.abs() < 19.5, "|Δψ| at T={t}");
            assert!(n.delta_epsilon_arcsec.abs() < 10.5, "|Δε| at T={t}");
        }
    }

    #[test]
    fn equation_of_equinoxes_is_small() {
        let ee = equation_of_equinoxes_deg(0.24);
        assert!(ee.abs() < 0.006, "EqEq = {ee}°");
    }
}
