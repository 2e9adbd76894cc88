//! Result contract returned to callers.

use serde::Serialize;

use crate::profile::{Activation, ActivationSet};

/// How the positions behind a result were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// Series ephemeris and a bracketed design instant throughout.
    Accurate,
    /// At least one value came from a fallback path.
    Simplified,
}

impl CalculationMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::Simplified => "simplified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanDesignSummary {
    pub energy_type: String,
    pub strategy: String,
    pub authority: String,
    pub profile: String,
    pub definition: String,
    /// Which label strategy produced the fields above.
    pub label_strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationDetail {
    pub longitude: f64,
    pub sign: &'static str,
    pub gate: u8,
    pub line: u8,
}

impl From<&Activation> for ActivationDetail {
    fn from(a: &Activation) -> Self {
        Self {
            longitude: a.longitude_deg,
            sign: a.sign.name(),
            gate: a.gate_line.gate,
            line: a.gate_line.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationSetDetail {
    /// `YYYY-MM-DDThh:mm:ssZ`
    pub instant: String,
    pub julian_day: f64,
    pub sun: ActivationDetail,
    pub moon: ActivationDetail,
    pub ascendant: ActivationDetail,
}

impl From<&ActivationSet> for ActivationSetDetail {
    fn from(set: &ActivationSet) -> Self {
        Self {
            instant: set.instant.to_string(),
            julian_day: set.instant.julian_day(),
            sun: (&set.sun).into(),
            moon: (&set.moon).into(),
            ascendant: (&set.ascendant).into(),
        }
    }
}

/// Raw longitudes and instants behind a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDetails {
    pub personality: ActivationSetDetail,
    pub design: ActivationSetDetail,
    pub design_residual_deg: f64,
    pub design_iterations: u32,
}

/// `{ sunSign, moonSign, risingSign, humanDesign, calculationMethod }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResult {
    pub sun_sign: &'static str,
    pub moon_sign: &'static str,
    pub rising_sign: &'static str,
    pub human_design: HumanDesignSummary,
    pub calculation_method: CalculationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ChartDetails>,
}

impl ChartResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
