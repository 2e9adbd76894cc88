//! Design-instant search.
//!
//! The Design Instant is when the Sun stood a fixed solar arc (88°) behind
//! its birth longitude, roughly three months before birth. It is defined by
//! arc, not by elapsed time, so it is found by root-finding on the Sun's
//! longitude.

pub mod design;
pub mod design_types;
pub mod error;

pub use design::{
    DesignSolver, approximate_design_event, find_design_instant, normalize_to_pm180,
};
pub use design_types::{DesignConfig, DesignEvent, YEAR_DAYS};
pub use error::SearchError;
