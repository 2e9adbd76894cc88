//! Types for the design-instant search.

use rave_time::Instant;

/// Mean length of a year in days used to convert solar arc into time.
pub const YEAR_DAYS: f64 = 365.25;

/// Configuration for [`crate::find_design_instant`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    /// Solar arc before birth in degrees (default 88).
    pub target_arc_deg: f64,
    /// Half-width of the scan window around the expected instant, in days.
    pub window_days: f64,
    /// Coarse scan step in days (default 0.5).
    pub step_days: f64,
    /// Maximum bisection iterations (default 60).
    pub max_iterations: u32,
    /// Stop bisecting once the longitude residual is below this, in degrees.
    pub tolerance_deg: f64,
}

impl DesignConfig {
    /// 88° of arc, ±12 days, half-day steps, 60 iterations, 1e-6°.
    pub fn standard() -> Self {
        Self {
            target_arc_deg: 88.0,
            window_days: 12.0,
            step_days: 0.5,
            max_iterations: 60,
            tolerance_deg: 1e-6,
        }
    }

    /// Narrowest window that still brackets the root for any birth date.
    pub fn narrow() -> Self {
        Self {
            window_days: 10.0,
            ..Self::standard()
        }
    }

    /// Days before birth where the Sun is expected to be `target_arc_deg`
    /// behind, assuming uniform motion.
    pub fn expected_offset_days(&self) -> f64 {
        self.target_arc_deg / 360.0 * YEAR_DAYS
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.target_arc_deg.is_finite()
            || self.target_arc_deg <= 0.0
            || self.target_arc_deg >= 360.0
        {
            return Err("target_arc_deg must be within (0, 360)");
        }
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err("window_days must be positive");
        }
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.step_days > self.window_days {
            return Err("step_days must not exceed window_days");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        Ok(())
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Outcome of a design-instant search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignEvent {
    /// The Design Instant.
    pub instant: Instant,
    /// Sun longitude at birth in degrees [0, 360).
    pub birth_sun_longitude_deg: f64,
    /// Longitude the Sun had to reach, in degrees [0, 360).
    pub target_longitude_deg: f64,
    /// Sun longitude at the returned instant, in degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// |achieved − target| in degrees, wrapped to the short arc.
    pub residual_deg: f64,
    /// Bisection iterations used (0 for the fixed-offset fallback).
    pub iterations: u32,
}

impl DesignEvent {
    /// Days between this instant and birth (positive).
    pub fn days_before(&self, birth: Instant) -> f64 {
        birth.days_since(self.instant)
    }
}
