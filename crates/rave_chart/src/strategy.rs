//! Energy type, strategy, authority and definition labels.
//!
//! A full Human Design reading needs all planetary activations and complete
//! channels. This engine only has Sun, Moon and Ascendant, so the labels
//! are produced by a [`TypeStrategy`]. The default, [`GateHeuristic`],
//! treats a center as defined when any of the six activated gates sits in
//! it. It is a heuristic and is labeled as such in every result.

use serde::Serialize;

use crate::bodygraph::{ALL_CENTERS, Center, center_of_gate, connected_groups};
use crate::profile::HdProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnergyType {
    Manifestor,
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Projector,
    Reflector,
}

impl EnergyType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manifestor => "Manifestor",
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }

    /// The strategy that goes with each type.
    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Manifestor => "To Inform",
            Self::Generator | Self::ManifestingGenerator => "To Respond",
            Self::Projector => "Wait for the Invitation",
            Self::Reflector => "Wait a Lunar Cycle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    Mental,
    Lunar,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::Ego => "Ego",
            Self::SelfProjected => "Self-Projected",
            Self::Mental => "Mental",
            Self::Lunar => "Lunar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Definition {
    #[serde(rename = "No Definition")]
    NoDefinition,
    #[serde(rename = "Single Definition")]
    Single,
    #[serde(rename = "Split Definition")]
    Split,
    #[serde(rename = "Triple Split")]
    TripleSplit,
    #[serde(rename = "Quadruple Split")]
    QuadrupleSplit,
}

impl Definition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoDefinition => "No Definition",
            Self::Single => "Single Definition",
            Self::Split => "Split Definition",
            Self::TripleSplit => "Triple Split",
            Self::QuadrupleSplit => "Quadruple Split",
        }
    }

    pub fn from_groups(groups: usize) -> Self {
        match groups {
            0 => Self::NoDefinition,
            1 => Self::Single,
            2 => Self::Split,
            3 => Self::TripleSplit,
            _ => Self::QuadrupleSplit,
        }
    }
}

/// Labels shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanDesignLabels {
    pub energy_type: EnergyType,
    pub strategy: &'static str,
    pub authority: Authority,
    /// `"personality line/design line"`, e.g. `"6/2"`.
    pub profile: String,
    pub definition: Definition,
}

/// Derives labels from a profile.
pub trait TypeStrategy: Send + Sync {
    /// Identifier reported alongside the labels.
    fn name(&self) -> &'static str;

    fn labels(&self, profile: &HdProfile) -> HumanDesignLabels;
}

/// Centers touched by the activated gates.
pub fn active_centers(profile: &HdProfile) -> [bool; 9] {
    let mut active = [false; 9];
    for center in profile.gates().filter_map(center_of_gate) {
        active[center.index()] = true;
    }
    active
}

/// Center-membership heuristic over the six activated gates.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateHeuristic;

impl GateHeuristic {
    fn energy_type(active: &[bool; 9]) -> EnergyType {
        let on = |c: Center| active[c.index()];
        let count = active.iter().filter(|&&a| a).count();

        if on(Center::Sacral) {
            if on(Center::Throat) {
                EnergyType::ManifestingGenerator
            } else {
                EnergyType::Generator
            }
        } else if on(Center::Throat) && ALL_CENTERS.iter().any(|&c| c.is_motor() && on(c)) {
            EnergyType::Manifestor
        } else if count <= 2 {
            EnergyType::Reflector
        } else {
            EnergyType::Projector
        }
    }

    fn authority(energy_type: EnergyType, active: &[bool; 9]) -> Authority {
        if energy_type == EnergyType::Reflector {
            return Authority::Lunar;
        }
        let on = |c: Center| active[c.index()];
        if on(Center::SolarPlexus) {
            Authority::Emotional
        } else if on(Center::Sacral) {
            Authority::Sacral
        } else if on(Center::Spleen) {
            Authority::Splenic
        } else if on(Center::Heart) {
            Authority::Ego
        } else if on(Center::G) {
            Authority::SelfProjected
        } else {
            Authority::Mental
        }
    }
}

impl TypeStrategy for GateHeuristic {
    fn name(&self) -> &'static str {
        "gate-heuristic"
    }

    fn labels(&self, profile: &HdProfile) -> HumanDesignLabels {
        let active = active_centers(profile);
        let energy_type = Self::energy_type(&active);
        HumanDesignLabels {
            energy_type,
            strategy: energy_type.strategy(),
            authority: Self::authority(energy_type, &active),
            profile: profile.profile_notation(),
            definition: Definition::from_groups(connected_groups(&active)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(centers: &[Center]) -> [bool; 9] {
        let mut a = [false; 9];
        for c in centers {
            a[c.index()] = true;
        }
        a
    }

    #[test]
    fn sacral_makes_a_generator() {
        let a = active(&[Center::Sacral, Center::G, Center::Root]);
        assert_eq!(GateHeuristic::energy_type(&a), EnergyType::Generator);
        assert_eq!(
            GateHeuristic::authority(EnergyType::Generator, &a),
            Authority::Sacral
        );
    }

    #[test]
    fn sacral_and_throat_make_a_manifesting_generator() {
        let a = active(&[Center::Sacral, Center::Throat]);
        assert_eq!(
            GateHeuristic::energy_type(&a),
            EnergyType::ManifestingGenerator
        );
    }

    #[test]
    fn motor_to_throat_without_sacral_is_a_manifestor() {
        let a = active(&[Center::Heart, Center::Throat, Center::Ajna]);
        assert_eq!(GateHeuristic::energy_type(&a), EnergyType::Manifestor);
        assert_eq!(
            GateHeuristic::authority(EnergyType::Manifestor, &a),
            Authority::Ego
        );
    }

    #[test]
    fn few_centers_is_a_reflector() {
        let a = active(&[Center::Head, Center::G]);
        assert_eq!(GateHeuristic::energy_type(&a), EnergyType::Reflector);
        assert_eq!(
            GateHeuristic::authority(EnergyType::Reflector, &a),
            Authority::Lunar
        );
    }

    #[test]
    fn otherwise_a_projector() {
        let a = active(&[Center::Head, Center::Ajna, Center::Spleen]);
        assert_eq!(GateHeuristic::energy_type(&a), EnergyType::Projector);
        assert_eq!(
            GateHeuristic::authority(EnergyType::Projector, &a),
            Authority::Splenic
        );
    }

    #[test]
    fn emotional_authority_wins() {
        let a = active(&[Center::SolarPlexus, Center::Sacral]);
        assert_eq!(
            GateHeuristic::authority(EnergyType::Generator, &a),
            Authority::Emotional
        );
    }

    #[test]
    fn strategies() {
        assert_eq!(EnergyType::Generator.strategy(), "To Respond");
        assert_eq!(EnergyType::ManifestingGenerator.strategy(), "To Respond");
        assert_eq!(EnergyType::Projector.strategy(), "Wait for the Invitation");
        assert_eq!(EnergyType::Manifestor.strategy(), "To Inform");
        assert_eq!(EnergyType::Reflector.strategy(), "Wait a Lunar Cycle");
    }

    #[test]
    fn definition_from_groups() {
        assert_eq!(Definition::from_groups(0), Definition::NoDefinition);
        assert_eq!(Definition::from_groups(2), Definition::Split);
        assert_eq!(Definition::from_groups(7), Definition::QuadrupleSplit);
    }
}
