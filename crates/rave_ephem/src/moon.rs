//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated ELP-2000/82 series: the 60 periodic longitude terms plus the
//! Venus/Jupiter/flattening additive terms. Accuracy is about 10″, and
//! nutation in longitude is added so the result is an apparent longitude
//! like the Sun's.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47, Table 47.A.

use rave_frames::nutation;

use crate::position::normalize_360;

/// Periodic longitude terms: `[D, M, M', F, Σl coefficient in 1e-6 degrees]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 60] = [
    [0,  0,  1,  0, 6_288_774],
    [2,  0, -1,  0, 1_274_027],
    [2,  0,  0,  0,   658_314],
    [0,  0,  2,  0,   213_618],
    [0,  1,  0,  0,  -185_116],
    [0,  0,  0,  2,  -114_332],
    [2,  0, -2,  0,    58_793],
    [2, -1, -1,  0,    57_066],
    [2,  0,  1,  0,    53_322],
    [2, -1,  0,  0,    45_758],
    [0,  1, -1,  0,   -40_923],
    [1,  0,  0,  0,   -34_720],
    [0,  1,  1,  0,   -30_383],
    [2,  0,  0, -2,    15_327],
    [0,  0,  1,  2,   -12_528],
    [0,  0,  1, -2,    10_980],
    [4,  0, -1,  0,    10_675],
    [0,  0,  3,  0,    10_034],
    [4,  0, -2,  0,     8_548],
    [2,  1, -1,  0,    -7_888],
    [2,  1,  0,  0,    -6_766],
    [1,  0, -1,  0,    -5_163],
    [1,  1,  0,  0,     4_987],
    [2, -1,  1,  0,     4_036],
    [2,  0,  2,  0,     3_994],
    [4,  0,  0,  0,     3_861],
    [2,  0, -3,  0,     3_665],
    [0,  1, -2,  0,    -2_689],
    [2,  0, -1,  2,    -2_602],
    [2, -1, -2,  0,     2_390],
    [1,  0,  1,  0,    -2_348],
    [2, -2,  0,  0,     2_236],
    [0,  1,  2,  0,    -2_120],
    [0,  2,  0,  0,    -2_069],
    [2, -2, -1,  0,     2_048],
    [2,  0,  1, -2,    -1_773],
    [2,  0,  0,  2,    -1_595],
    [4, -1, -1,  0,     1_215],
    [0,  0,  2,  2,    -1_110],
    [3,  0, -1,  0,      -892],
    [2,  1,  1,  0,      -810],
    [4, -1, -2,  0,       759],
    [0,  2, -1,  0,      -713],
    [2,  2, -1,  0,      -700],
    [2,  1, -2,  0,       691],
    [2, -1,  0, -2,       596],
    [4,  0,  1,  0,       549],
    [0,  0,  4,  0,       537],
    [4, -1,  0,  0,       520],
    [1,  0, -2,  0,      -487],
    [2,  1,  0, -2,      -399],
    [0,  0,  2, -2,      -381],
    [1,  1,  1,  0,       351],
    [3,  0, -2,  0,      -340],
    [4,  0, -3,  0,       330],
    [2, -1,  2,  0,       327],
    [0,  2,  1,  0,      -323],
    [1,  1, -1,  0,       299],
    [2,  0,  3,  0,       294],
    [2,  0, -1, -2,         0],
];

/// Mean longitude of the Moon in degrees (not normalized).
pub fn moon_mean_longitude_deg(t: f64) -> f64 {
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0
}

/// Geometric geocentric longitude of the Moon in degrees, [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_geometric_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = moon_mean_longitude_deg(t);
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity of Earth's orbit scales terms that involve M
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sigma_l = 0.0;
    for row in &LONGITUDE_TERMS {
        let arg = row[0] as f64 * d_r + row[1] as f64 * m_r + row[2] as f64 * mp_r
            + row[3] as f64 * f_r;
        let scale = match row[1].abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma_l += row[4] as f64 * scale * arg.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    normalize_360(lp + sigma_l / 1_000_000.0)
}

/// Apparent geocentric longitude of the Moon in degrees, [0, 360).
pub fn moon_apparent_longitude_deg(t: f64) -> f64 {
    normalize_360(moon_geometric_longitude_deg(t) + nutation(t).delta_psi_deg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rave_time::julian_centuries;

    /// 1992 April 12, 0h TD.
    const JD_EXAMPLE_47A: f64 = 2_448_724.5;

    #[test]
    fn meeus_example_47a_geometric() {
        let lon = moon_geometric_longitude_deg(julian_centuries(JD_EXAMPLE_47A));
        assert!((lon - 133.162_655).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn meeus_example_47a_apparent() {
        let lon = moon_apparent_longitude_deg(julian_centuries(JD_EXAMPLE_47A));
        assert!((lon - 133.167_265).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn daily_motion_in_lunar_range() {
        let day = 1.0 / 36_525.0;
        for i in 0..60 {
            let t = i as f64 * day;
            let a = moon_apparent_longitude_deg(t);
            let b = moon_apparent_longitude_deg(t + day);
            let step = (b - a).rem_euclid(360.0);
            assert!((11.5..15.6).contains(&step), "step {step} on day {i}");
        }
    }
}
