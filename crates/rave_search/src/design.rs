//! Design-instant search.
//!
//! Finds the instant before birth at which the Sun's apparent longitude was
//! `birth_longitude − 88°`. Uses a coarse scan + bisection on
//! f(t) = normalize(sun(t) − target), wrapped to (−180, +180] so that zero
//! crossings correspond to the target longitude.
//!
//! The scan covers `±window_days` around the instant implied by uniform solar
//! motion. If no crossing is bracketed the fixed offset `88/360 × 365.25`
//! days is returned, tagged approximate.

use rave_ephem::{Computed, Ephemeris, EphemerisSource, normalize_360};
use rave_time::Instant;
use tracing::{debug, warn};

use crate::design_types::{DesignConfig, DesignEvent};
use crate::error::SearchError;

/// Normalize an angle to (−180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Check if a sign change is a genuine zero crossing vs a wrap-around discontinuity.
///
/// When the normalized function jumps from ~+180 to ~-180 (or vice versa),
/// the product is negative but it's not a real zero crossing.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Sun longitude at `jd`, with a flag set once any evaluation fell back.
struct SunProbe<'a, S> {
    ephemeris: &'a Ephemeris<S>,
    target_deg: f64,
    approximate: bool,
}

impl<S: EphemerisSource> SunProbe<'_, S> {
    /// Returns (f, longitude).
    fn eval(&mut self, jd: f64) -> (f64, f64) {
        let sun = self.ephemeris.sun(Instant::from_jd_utc(jd));
        self.approximate |= sun.is_approximate();
        let lon = sun.into_inner().longitude_deg;
        (normalize_to_pm180(lon - self.target_deg), lon)
    }
}

/// Bisect to refine the zero crossing between t_a and t_b.
///
/// Returns (t, longitude, iterations).
fn bisect_refinement<S: EphemerisSource>(
    probe: &mut SunProbe<'_, S>,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    config: &DesignConfig,
) -> (f64, f64, u32) {
    let mut best = (t_a, f64::INFINITY, 0.0);
    let mut iterations = 0;

    for _ in 0..config.max_iterations {
        iterations += 1;
        let t_mid = 0.5 * (t_a + t_b);
        let (f_mid, lon) = probe.eval(t_mid);

        if f_mid.abs() < best.1 {
            best = (t_mid, f_mid.abs(), lon);
        }
        if f_mid.abs() < config.tolerance_deg {
            break;
        }

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    (best.0, best.2, iterations)
}

/// Find the Design Instant for a birth instant.
///
/// Errors only on an invalid config. The event is [`Computed::Approximate`]
/// when the scan found no crossing or any Sun position came from the
/// fallback ephemeris.
pub fn find_design_instant<S: EphemerisSource>(
    ephemeris: &Ephemeris<S>,
    birth: Instant,
    config: &DesignConfig,
) -> Result<Computed<DesignEvent>, SearchError> {
    Ok(DesignSolver::new(*config)?.solve(ephemeris, birth))
}

/// A validated [`DesignConfig`]; solving with it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSolver {
    config: DesignConfig,
}

impl DesignSolver {
    pub fn new(config: DesignConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// Scan, bracket and bisect; fall back to the fixed offset.
    pub fn solve<S: EphemerisSource>(
        &self,
        ephemeris: &Ephemeris<S>,
        birth: Instant,
    ) -> Computed<DesignEvent> {
        let config = &self.config;
        let birth_sun = ephemeris.sun(birth);
        let birth_lon = birth_sun.value().longitude_deg;
        let target_deg = normalize_360(birth_lon - config.target_arc_deg);

        let mut probe = SunProbe {
            ephemeris,
            target_deg,
            approximate: birth_sun.is_approximate(),
        };

        let expected = birth.julian_day() - config.expected_offset_days();
        let start = expected - config.window_days;
        let end = expected + config.window_days;
        let max_steps = (2.0 * config.window_days / config.step_days).ceil() as usize;

        let (mut f_prev, _) = probe.eval(start);
        let mut t_prev = start;

        for _ in 0..max_steps {
            let t_curr = (t_prev + config.step_days).min(end);
            let (f_curr, _) = probe.eval(t_curr);

            if f_curr == 0.0 || is_genuine_crossing(f_prev, f_curr) {
                let (jd, lon, iterations) = if f_curr == 0.0 {
                    (t_curr, target_deg, 0)
                } else {
                    bisect_refinement(&mut probe, t_prev, f_prev, t_curr, config)
                };
                let event = DesignEvent {
                    instant: Instant::from_jd_utc(jd),
                    birth_sun_longitude_deg: birth_lon,
                    target_longitude_deg: target_deg,
                    sun_longitude_deg: lon,
                    residual_deg: normalize_to_pm180(lon - target_deg).abs(),
                    iterations,
                };
                debug!(
                    jd = jd,
                    residual_deg = event.residual_deg,
                    iterations,
                    "design instant bracketed"
                );
                return Computed::Accurate(event).degrade_if(probe.approximate);
            }

            if t_curr >= end {
                break;
            }
            t_prev = t_curr;
            f_prev = f_curr;
        }

        warn!(
            birth_jd = birth.julian_day(),
            window_days = config.window_days,
            "no solar-arc crossing in window, using fixed offset"
        );
        Computed::Approximate(approximate_design_event(ephemeris, birth, config))
    }
}

/// Design event at the fixed offset `arc/360 × 365.25` days before birth.
pub fn approximate_design_event<S: EphemerisSource>(
    ephemeris: &Ephemeris<S>,
    birth: Instant,
    config: &DesignConfig,
) -> DesignEvent {
    let birth_lon = ephemeris.sun(birth).into_inner().longitude_deg;
    let target_deg = normalize_360(birth_lon - config.target_arc_deg);
    let instant = birth.offset_days(-config.expected_offset_days());
    let lon = ephemeris.sun(instant).into_inner().longitude_deg;

    DesignEvent {
        instant,
        birth_sun_longitude_deg: birth_lon,
        target_longitude_deg: target_deg,
        sun_longitude_deg: lon,
        residual_deg: normalize_to_pm180(lon - target_deg).abs(),
        iterations: 0,
    }
}
