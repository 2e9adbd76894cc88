//! Personality and Design activations.

use rave_ephem::{
    Body, Computed, EclipticPosition, Ephemeris, EphemerisError, EphemerisSource, GeoLocation,
};
use rave_mandala::{GateLine, GateTable, ZodiacSign, sign_of};
use rave_search::DesignEvent;
use rave_time::Instant;

/// One body's position mapped onto the zodiac and the gate wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub body: Body,
    pub longitude_deg: f64,
    pub sign: ZodiacSign,
    pub gate_line: GateLine,
}

impl Activation {
    pub fn new(position: &EclipticPosition, gates: &GateTable) -> Self {
        Self {
            body: position.body,
            longitude_deg: position.longitude_deg,
            sign: sign_of(position.longitude_deg),
            gate_line: gates.gate_line(position.longitude_deg),
        }
    }
}

/// Sun, Moon and Ascendant activations at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationSet {
    pub instant: Instant,
    pub sun: Activation,
    pub moon: Activation,
    pub ascendant: Activation,
}

impl ActivationSet {
    /// Compute all three activations. Approximate if the Sun or Moon is.
    pub fn compute<S: EphemerisSource>(
        ephemeris: &Ephemeris<S>,
        gates: &GateTable,
        instant: Instant,
        location: &GeoLocation,
    ) -> Result<Computed<Self>, EphemerisError> {
        let ascendant = ephemeris.ascendant(instant, location)?;
        let bodies = ephemeris
            .sun(instant)
            .zip(ephemeris.moon(instant))
            .zip(ascendant);

        Ok(bodies.map(|((sun, moon), asc)| Self {
            instant,
            sun: Activation::new(&sun, gates),
            moon: Activation::new(&moon, gates),
            ascendant: Activation::new(&asc, gates),
        }))
    }

    pub fn activations(&self) -> [Activation; 3] {
        [self.sun, self.moon, self.ascendant]
    }
}

/// Personality (birth) and Design activations for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HdProfile {
    pub personality: ActivationSet,
    pub design: ActivationSet,
    pub design_event: DesignEvent,
}

impl HdProfile {
    /// All six activated gates, personality first.
    pub fn gates(&self) -> impl Iterator<Item = u8> + '_ {
        self.personality
            .activations()
            .into_iter()
            .chain(self.design.activations())
            .map(|a| a.gate_line.gate)
    }

    /// Profile notation: personality Sun line / design Sun line.
    pub fn profile_notation(&self) -> String {
        format!(
            "{}/{}",
            self.personality.sun.gate_line.line, self.design.sun.gate_line.line
        )
    }
}
