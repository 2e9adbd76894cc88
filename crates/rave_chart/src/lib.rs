//! Birth chart and Human Design profile assembly.
//!
//! Ties the pipeline together: a [`BirthRequest`] is parsed, its place
//! resolved through a [`Geocoder`], normalized to a UTC instant, and the
//! Sun/Moon/Ascendant are computed at birth and at the Design Instant. The
//! [`ChartEngine`] maps those onto signs and gates and hands the profile to
//! a swappable [`TypeStrategy`] for the energy-type labels.

pub mod bodygraph;
pub mod engine;
pub mod error;
pub mod geocode;
pub mod input;
pub mod output;
pub mod profile;
pub mod strategy;

pub use bodygraph::{ALL_CENTERS, Center, center_of_gate, connected_groups};
pub use engine::{Chart, ChartEngine};
pub use error::{ChartError, ConfigError, GeocodeError, InputError};
pub use geocode::{Gazetteer, Geocoder, resolve_birth_place};
pub use input::{BirthInput, BirthPlace, BirthRequest};
pub use output::{
    ActivationDetail, ActivationSetDetail, CalculationMethod, ChartDetails, ChartResult,
    HumanDesignSummary,
};
pub use profile::{Activation, ActivationSet, HdProfile};
pub use strategy::{
    Authority, Definition, EnergyType, GateHeuristic, HumanDesignLabels, TypeStrategy,
    active_centers,
};
