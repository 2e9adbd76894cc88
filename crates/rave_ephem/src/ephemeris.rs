//! Composite ephemeris: precise source first, linear model on failure.

use rave_time::Instant;
use tracing::warn;

use crate::ascendant::{ChartAngles, chart_angles};
use crate::computed::Computed;
use crate::error::EphemerisError;
use crate::position::{Body, EclipticPosition, GeoLocation};
use crate::source::{EphemerisSource, LinearModel, MeeusSeries};

/// Sun, Moon and Ascendant positions with an explicit accuracy tag.
///
/// Sun and Moon come from `S`; when `S` fails the linear model is used and
/// the position is returned as [`Computed::Approximate`]. The Ascendant
/// depends only on sidereal time and obliquity and is always accurate.
#[derive(Debug, Clone, Default)]
pub struct Ephemeris<S = MeeusSeries> {
    primary: S,
    fallback: LinearModel,
}

impl<S: EphemerisSource> Ephemeris<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary,
            fallback: LinearModel,
        }
    }

    /// The precise source in use.
    pub fn primary(&self) -> &S {
        &self.primary
    }

    /// Apparent longitude of the Sun.
    pub fn sun(&self, instant: Instant) -> Computed<EclipticPosition> {
        self.resolve(
            Body::Sun,
            instant,
            self.primary.sun_longitude_deg(instant),
            || self.fallback.sun_deg(instant),
        )
    }

    /// Geocentric longitude of the Moon.
    pub fn moon(&self, instant: Instant) -> Computed<EclipticPosition> {
        self.resolve(
            Body::Moon,
            instant,
            self.primary.moon_longitude_deg(instant),
            || self.fallback.moon_deg(instant),
        )
    }

    /// Longitude of the Ascendant for an observer.
    pub fn ascendant(
        &self,
        instant: Instant,
        location: &GeoLocation,
    ) -> Result<Computed<EclipticPosition>, EphemerisError> {
        let angles = self.angles(instant, location)?;
        Ok(Computed::Accurate(EclipticPosition::new(
            Body::Ascendant,
            angles.ascendant_deg,
            instant,
        )))
    }

    /// Ascendant and Midheaven together.
    pub fn angles(
        &self,
        instant: Instant,
        location: &GeoLocation,
    ) -> Result<ChartAngles, EphemerisError> {
        chart_angles(instant, location)
    }

    fn resolve(
        &self,
        body: Body,
        instant: Instant,
        precise: Result<f64, EphemerisError>,
        linear: impl FnOnce() -> f64,
    ) -> Computed<EclipticPosition> {
        match precise {
            Ok(lon) => Computed::Accurate(EclipticPosition::new(body, lon, instant)),
            Err(err) => {
                warn!(
                    body = body.name(),
                    jd = instant.julian_day(),
                    source = self.primary.name(),
                    error = %err,
                    "precise ephemeris unavailable, using linear model"
                );
                Computed::Approximate(EclipticPosition::new(body, linear(), instant))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rave_time::J2000_JD;

    struct Unavailable;

    impl EphemerisSource for Unavailable {
        fn name(&self) -> &'static str {
            "unavailable"
        }
        fn sun_longitude_deg(&self, _: Instant) -> Result<f64, EphemerisError> {
            Err(EphemerisError::NonFinite("unavailable"))
        }
        fn moon_longitude_deg(&self, _: Instant) -> Result<f64, EphemerisError> {
            Err(EphemerisError::NonFinite("unavailable"))
        }
    }

    #[test]
    fn precise_path_is_accurate() {
        let eph = Ephemeris::<MeeusSeries>::default();
        let instant = Instant::from_jd_utc(J2000_JD);
        assert!(!eph.sun(instant).is_approximate());
        assert!(!eph.moon(instant).is_approximate());
    }

    #[test]
    fn failure_falls_back_and_is_tagged() {
        let eph = Ephemeris::new(Unavailable);
        let instant = Instant::from_jd_utc(J2000_JD);
        let sun = eph.sun(instant);
        assert!(sun.is_approximate());
        assert_eq!(sun.value().body, Body::Sun);
        assert!((0.0..360.0).contains(&sun.value().longitude_deg));
        assert!(eph.moon(instant).is_approximate());
    }

    #[test]
    fn out_of_range_instant_falls_back() {
        let eph = Ephemeris::<MeeusSeries>::default();
        let far = Instant::from_jd_utc(J2000_JD - 45.0 * 36_525.0);
        assert!(eph.sun(far).is_approximate());
    }

    #[test]
    fn ascendant_ignores_source_failure() {
        let eph = Ephemeris::new(Unavailable);
        let asc = eph
            .ascendant(Instant::from_jd_utc(J2000_JD), &GeoLocation::new(51.5, 0.0, 0.0))
            .unwrap();
        assert!(!asc.is_approximate());
        assert_eq!(asc.value().body, Body::Ascendant);
    }
}
