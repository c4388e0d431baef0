// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Site spectrum request as stored on disk.
/// Either section may be absent; selectors are kept as raw strings and
/// resolved by the calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectraConfig {
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacySiteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentSiteConfig>,
}

/// DBYBHY-2007 site parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySiteConfig {
    /// Effective ground acceleration coefficient A0 [g].
    pub pga: f64,
    /// Local site class: "A", "B", "C" or "D".
    pub soil_class: String,
    #[serde(default = "default_importance_factor")]
    pub importance_factor: f64,
}

/// TBDY-2018 site parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSiteConfig {
    /// Vs30 [m/s] or site class name, interpreted through `soil_unit`.
    pub soil: SoilValue,
    /// Short-period (0.2 s) map spectral acceleration.
    #[serde(rename = "Ss")]
    pub ss: f64,
    /// 1.0 s map spectral acceleration.
    #[serde(rename = "S1")]
    pub s1: f64,
    /// "vs30" or "soiltype".
    #[serde(default = "default_soil_unit")]
    pub soil_unit: String,
    /// "cms2" or "g".
    #[serde(default = "default_hazard_unit")]
    pub hazard_unit: String,
    /// Custom period axis [s]. Default axis when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SoilValue {
    Velocity(f64),
    Class(String),
}

fn default_importance_factor() -> f64 {
    1.0
}
fn default_soil_unit() -> String {
    "vs30".to_string()
}
fn default_hazard_unit() -> String {
    "cms2".to_string()
}

impl SpectraConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::SpectraResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> crate::error::SpectraResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        Ok(config)
    }
}
