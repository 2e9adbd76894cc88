//! TOML configuration for the CLI.
//!
//! ```toml
//! [solver]
//! window_days = 10.0
//!
//! [log]
//! filter = "rave_search=debug"
//!
//! [[places]]
//! name = "New York"
//! latitude = 40.7128
//! longitude = -74.006
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use rave_chart::Gazetteer;
use rave_ephem::GeoLocation;
use rave_search::DesignConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub solver: SolverSection,
    pub log: LogSection,
    pub places: Vec<PlaceEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    pub target_arc_deg: f64,
    pub window_days: f64,
    pub step_days: f64,
    pub max_iterations: u32,
    pub tolerance_deg: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        let d = DesignConfig::standard();
        Self {
            target_arc_deg: d.target_arc_deg,
            window_days: d.window_days,
            step_days: d.step_days,
            max_iterations: d.max_iterations,
            tolerance_deg: d.tolerance_deg,
        }
    }
}

impl From<SolverSection> for DesignConfig {
    fn from(s: SolverSection) -> Self {
        Self {
            target_arc_deg: s.target_arc_deg,
            window_days: s.window_days,
            step_days: s.step_days,
            max_iterations: s.max_iterations,
            tolerance_deg: s.tolerance_deg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
}

impl CliConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("failed to parse config TOML")
    }

    /// Read `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
    }

    pub fn design_config(&self) -> DesignConfig {
        self.solver.into()
    }

    pub fn gazetteer(&self) -> Gazetteer {
        self.places
            .iter()
            .map(|p| {
                (
                    p.name.as_str(),
                    GeoLocation::new(p.latitude, p.longitude, p.altitude),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.design_config(), DesignConfig::standard());
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn partial_solver_section() {
        let config = CliConfig::from_toml("[solver]\nwindow_days = 10.0\n").unwrap();
        let design = config.design_config();
        assert_eq!(design.window_days, 10.0);
        assert_eq!(design.step_days, 0.5);
    }

    #[test]
    fn places_build_a_gazetteer() {
        let config = CliConfig::from_toml(
            r#"
            [[places]]
            name = "New York"
            latitude = 40.7128
            longitude = -74.006

            [[places]]
            name = "Kathmandu"
            latitude = 27.7172
            longitude = 85.324
            altitude = 1400.0
            "#,
        )
        .unwrap();
        let gazetteer = config.gazetteer();
        assert_eq!(gazetteer.len(), 2);
        assert_eq!(gazetteer.get("kathmandu").unwrap().altitude_m, 1400.0);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(CliConfig::from_toml("[solver\n").is_err());
    }
}
