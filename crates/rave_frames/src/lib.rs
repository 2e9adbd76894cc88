//! Ecliptic/equator geometry for the chart engine.
//!
//! Provides the mean and true obliquity of the ecliptic and a low-order
//! nutation series, which together turn sidereal time into an Ascendant and
//! correct geometric longitudes to apparent ones.

pub mod nutation;
pub mod obliquity;

pub use nutation::{Nutation, equation_of_equinoxes_deg, nutation};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
