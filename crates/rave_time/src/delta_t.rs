//! ΔT = TT − UT, the drift of Earth rotation time against dynamical time.
//!
//! The planetary series are expressed in Terrestrial Time while civil input
//! is UTC. ΔT is about a minute for modern births, which moves the Moon by
//! roughly 0.01°, so a piecewise polynomial is plenty.
//!
//! Source: Espenak & Meeus, "Five Millennium Canon of Solar Eclipses"
//! (NASA TP-2006-214141), polynomial expressions for ΔT. Public domain.

use crate::julian::J2000_JD;

/// Decimal Gregorian year for a Julian Date.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.2425
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    match year {
        y if y < -500.0 => long_term(y),
        y if y < 500.0 => {
            let u = y / 100.0;
            10_583.6 - 1014.41 * u + 33.783_11 * u.powi(2) - 5.952_053 * u.powi(3)
                - 0.179_845_2 * u.powi(4)
                + 0.022_174_192 * u.powi(5)
                + 0.009_031_652_1 * u.powi(6)
        }
        y if y < 1600.0 => {
            let u = (y - 1000.0) / 100.0;
            1574.2 - 556.01 * u + 71.234_72 * u.powi(2) + 0.319_781 * u.powi(3)
                - 0.850_346_3 * u.powi(4)
                - 0.005_050_998 * u.powi(5)
                + 0.008_357_207_3 * u.powi(6)
        }
        y if y < 1700.0 => {
            let t = y - 1600.0;
            120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            8.83 + 0.1603 * t - 0.005_928_5 * t.powi(2) + 0.000_133_36 * t.powi(3)
                - t.powi(4) / 1_174_000.0
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
                - 0.00037436 * t.powi(4)
                + 0.0000121272 * t.powi(5)
                - 0.0000001699 * t.powi(6)
                + 0.000000000875 * t.powi(7)
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233_174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

/// Long-term parabola used outside the fitted intervals.
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in days for a Julian Date (UT).
pub fn delta_t_days(jd_ut: f64) -> f64 {
    delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_is_about_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1950_is_about_29s() {
        let dt = delta_t_seconds(1950.0);
        assert!((dt - 29.07).abs() < 0.01, "ΔT(1950) = {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        for boundary in [
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
            1986.0, 2005.0, 2050.0,
        ] {
            let before = delta_t_seconds(boundary - 1e-6);
            let after = delta_t_seconds(boundary);
            assert!(
                (before - after).abs() < 1.0,
                "jump at {boundary}: {before} → {after}"
            );
        }
    }

    #[test]
    fn year_1700_is_about_9s() {
        let dt = delta_t_seconds(1700.0);
        assert!((dt - 8.83).abs() < 0.01, "ΔT(1700) = {dt}");
    }

    #[test]
    fn decimal_year_at_epoch() {
        assert_eq!(decimal_year(J2000_JD), 2000.0);
    }
}
