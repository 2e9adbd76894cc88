//! Sun, Moon and Ascendant ecliptic longitudes.
//!
//! The precise path is a truncated analytical series (Meeus) evaluated in
//! TT. When it cannot serve an instant, [`Ephemeris`] substitutes a linear
//! degrees-per-day model and tags the result [`Computed::Approximate`].

pub mod ascendant;
pub mod computed;
pub mod ephemeris;
pub mod error;
pub mod moon;
pub mod position;
pub mod source;
pub mod sun;

pub use ascendant::{
    ChartAngles, ascendant_from_lst_deg, chart_angles, local_apparent_sidereal_time_deg,
    midheaven_from_lst_deg,
};
pub use computed::Computed;
pub use ephemeris::Ephemeris;
pub use error::EphemerisError;
pub use moon::{moon_apparent_longitude_deg, moon_geometric_longitude_deg};
pub use position::{Body, EclipticPosition, GeoLocation, normalize_360};
pub use source::{EphemerisSource, LinearModel, MeeusSeries};
pub use sun::sun_apparent_longitude_deg;
