//! Chart engine: input → activations → labels.

use rave_ephem::{Ephemeris, EphemerisError, EphemerisSource, MeeusSeries};
use rave_mandala::GateTable;
use rave_search::{DesignConfig, DesignSolver};
use tracing::{debug, info, info_span};

use crate::error::{ChartError, ConfigError, InputError};
use crate::geocode::{Geocoder, resolve_birth_place};
use crate::input::{BirthInput, BirthRequest};
use crate::output::{CalculationMethod, ChartDetails, ChartResult, HumanDesignSummary};
use crate::profile::{ActivationSet, HdProfile};
use crate::strategy::{GateHeuristic, HumanDesignLabels, TypeStrategy};

/// A computed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub profile: HdProfile,
    pub labels: HumanDesignLabels,
    /// Name of the [`TypeStrategy`] behind `labels`.
    pub label_strategy: &'static str,
    pub method: CalculationMethod,
}

impl Chart {
    /// Output contract; `include_details` adds raw longitudes and instants.
    pub fn to_result(&self, include_details: bool) -> ChartResult {
        let p = &self.profile;
        ChartResult {
            sun_sign: p.personality.sun.sign.name(),
            moon_sign: p.personality.moon.sign.name(),
            rising_sign: p.personality.ascendant.sign.name(),
            human_design: HumanDesignSummary {
                energy_type: self.labels.energy_type.name().to_string(),
                strategy: self.labels.strategy.to_string(),
                authority: self.labels.authority.name().to_string(),
                profile: self.labels.profile.clone(),
                definition: self.labels.definition.name().to_string(),
                label_strategy: self.label_strategy.to_string(),
            },
            calculation_method: self.method,
            details: include_details.then(|| ChartDetails {
                personality: (&p.personality).into(),
                design: (&p.design).into(),
                design_residual_deg: p.design_event.residual_deg,
                design_iterations: p.design_event.iterations,
            }),
        }
    }
}

/// Validated configuration plus the label strategy.
///
/// Building an engine checks the gate table partition and the solver
/// config once; every calculation afterwards can only fail on its input.
pub struct ChartEngine<S = MeeusSeries> {
    ephemeris: Ephemeris<S>,
    gates: GateTable,
    solver: DesignSolver,
    strategy: Box<dyn TypeStrategy>,
}

impl ChartEngine<MeeusSeries> {
    /// Series ephemeris, standard gate table, 88° solver, gate heuristic.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(Ephemeris::default(), DesignConfig::standard())
    }
}

impl<S: EphemerisSource> ChartEngine<S> {
    pub fn new(ephemeris: Ephemeris<S>, design: DesignConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            ephemeris,
            gates: GateTable::standard()?,
            solver: DesignSolver::new(design)?,
            strategy: Box::new(GateHeuristic),
        })
    }

    /// Replace the label strategy.
    pub fn with_strategy(mut self, strategy: impl TypeStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn ephemeris(&self) -> &Ephemeris<S> {
        &self.ephemeris
    }

    pub fn gates(&self) -> &GateTable {
        &self.gates
    }

    pub fn design_config(&self) -> &DesignConfig {
        self.solver.config()
    }

    /// Compute a chart from validated birth data.
    pub fn calculate(&self, input: &BirthInput) -> Result<Chart, ChartError> {
        let birth = input.instant();
        let span = info_span!("chart", birth = %birth);
        let _enter = span.enter();

        let personality =
            ActivationSet::compute(&self.ephemeris, &self.gates, birth, input.location())
                .map_err(location_error)?;
        debug!(
            sun = personality.value().sun.longitude_deg,
            moon = personality.value().moon.longitude_deg,
            asc = personality.value().ascendant.longitude_deg,
            "personality activations"
        );

        let design_event = self.solver.solve(&self.ephemeris, birth);
        let design_instant = design_event.value().instant;
        let design = ActivationSet::compute(
            &self.ephemeris,
            &self.gates,
            design_instant,
            input.location(),
        )
        .map_err(location_error)?;
        debug!(design = %design_instant, "design activations");

        let approximate = personality.is_approximate()
            || design_event.is_approximate()
            || design.is_approximate();
        let method = if approximate {
            CalculationMethod::Simplified
        } else {
            CalculationMethod::Accurate
        };

        let profile = HdProfile {
            personality: personality.into_inner(),
            design: design.into_inner(),
            design_event: design_event.into_inner(),
        };
        let labels = self.strategy.labels(&profile);
        info!(
            method = method.name(),
            energy_type = labels.energy_type.name(),
            profile = %labels.profile,
            "chart calculated"
        );

        Ok(Chart {
            profile,
            labels,
            label_strategy: self.strategy.name(),
            method,
        })
    }

    /// Parse, resolve the place, then compute.
    pub async fn calculate_request(
        &self,
        request: &BirthRequest,
        geocoder: &dyn Geocoder,
    ) -> Result<Chart, ChartError> {
        // Reject bad dates before spending a geocoder call
        let local = request.local_date_time()?;
        let location = resolve_birth_place(geocoder, &request.birth_place).await?;
        let input = BirthInput::new(local, request.timezone_offset_hours, location)?;
        self.calculate(&input)
    }
}

fn location_error(err: EphemerisError) -> ChartError {
    match err {
        EphemerisError::InvalidLocation(reason) => InputError::Location(reason).into(),
        other => InputError::Malformed(other.to_string()).into(),
    }
}
