// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — TBDY-2018 Design Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Horizontal and vertical design spectra of the 2018 Turkish Building
//! Earthquake Regulation (TBDY-2018).
//!
//! Pipeline: resolve units and soil class, interpolate Fs/F1, derive
//! SDs/SD1 and the corner periods, then evaluate both shapes pointwise.

use std::str::FromStr;

use ndarray::Array1;
use serde::Serialize;
use spectra_math::axis::stepped_from_step;
use spectra_types::config::{CurrentSiteConfig, SoilValue};
use spectra_types::constants::{cms2_to_g, DEFAULT_PERIOD_COUNT, PERIOD_STEP_S};
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::state::{PeriodAxis, SpectrumCurve};
use tracing::{debug, trace};

use crate::coefficients::{one_second_coefficient, short_period_coefficient};
use crate::render::{PlotLabels, SpectrumSink};
use crate::shape::{horizontal_sa, vertical_sa, ControlPeriods};
use crate::soil::SoilClass;

/// Unit of the mapped spectral accelerations Ss and S1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HazardUnit {
    /// cm/s², as published by the AFAD hazard map.
    CmPerS2,
    /// Fractions of g.
    G,
}

impl HazardUnit {
    pub fn to_g(self, value: f64) -> f64 {
        match self {
            HazardUnit::CmPerS2 => cms2_to_g(value),
            HazardUnit::G => value,
        }
    }
}

impl FromStr for HazardUnit {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cms2" => Ok(HazardUnit::CmPerS2),
            "g" => Ok(HazardUnit::G),
            other => Err(SpectraError::InvalidUnitSelector {
                selector: "hazard unit",
                value: other.to_string(),
                expected: "cms2, g",
            }),
        }
    }
}

/// Site soil given either as Vs30 [m/s] or directly as a class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SoilInput {
    Vs30(f64),
    Class(SoilClass),
}

impl SoilInput {
    /// Interpret `value` through the `kind` selector ("vs30" or "soiltype").
    pub fn from_selector(kind: &str, value: &SoilValue) -> SpectraResult<Self> {
        match (kind, value) {
            ("vs30", SoilValue::Velocity(vs30)) => Ok(SoilInput::Vs30(*vs30)),
            ("vs30", SoilValue::Class(text)) => Err(SpectraError::InvalidCategoricalInput {
                kind: "Vs30 value",
                value: text.clone(),
                expected: "a velocity in m/s",
            }),
            ("soiltype", SoilValue::Class(text)) => Ok(SoilInput::Class(text.parse()?)),
            ("soiltype", SoilValue::Velocity(v)) => Err(SpectraError::InvalidCategoricalInput {
                kind: "soil class",
                value: v.to_string(),
                expected: "ZA, ZB, ZC, ZD, ZE",
            }),
            (other, _) => Err(SpectraError::InvalidUnitSelector {
                selector: "soil unit",
                value: other.to_string(),
                expected: "vs30, soiltype",
            }),
        }
    }

    pub fn resolve(self) -> SpectraResult<SoilClass> {
        match self {
            SoilInput::Vs30(vs30) => SoilClass::from_vs30(vs30),
            SoilInput::Class(class) => Ok(class),
        }
    }
}

/// Inputs of one TBDY-2018 spectrum evaluation.
#[derive(Debug, Clone)]
pub struct CurrentSpectrumRequest {
    pub soil: SoilInput,
    /// Short-period map acceleration, in `unit`.
    pub ss: f64,
    /// 1.0 s map acceleration, in `unit`.
    pub s1: f64,
    pub unit: HazardUnit,
    /// Evaluation periods. [`default_period_axis`] when `None`.
    pub periods: Option<PeriodAxis>,
}

impl CurrentSpectrumRequest {
    pub fn new(soil: SoilInput, ss: f64, s1: f64, unit: HazardUnit) -> Self {
        CurrentSpectrumRequest {
            soil,
            ss,
            s1,
            unit,
            periods: None,
        }
    }

    pub fn with_periods(mut self, periods: PeriodAxis) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Validate the selectors and custom axis of a stored site section.
    pub fn from_config(config: &CurrentSiteConfig) -> SpectraResult<Self> {
        let unit: HazardUnit = config.hazard_unit.parse()?;
        let soil = SoilInput::from_selector(&config.soil_unit, &config.soil)?;
        let mut request = CurrentSpectrumRequest::new(soil, config.ss, config.s1, unit);
        if let Some(periods) = &config.periods {
            request = request.with_periods(PeriodAxis::from_vec(periods.clone())?);
        }
        Ok(request)
    }
}

/// Intermediate design quantities of a TBDY-2018 spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignParameters {
    pub soil: SoilClass,
    /// Map accelerations [g].
    pub ss: f64,
    pub s1: f64,
    /// Local site coefficients.
    pub fs: f64,
    pub f1: f64,
    /// Design accelerations [g].
    pub sds: f64,
    pub sd1: f64,
}

impl DesignParameters {
    /// `SDs = Ss * Fs`, `SD1 = S1 * F1` with Ss, S1 in g.
    pub fn derive(soil: SoilClass, ss: f64, s1: f64) -> SpectraResult<Self> {
        for (name, value) in [("Ss", ss), ("S1", s1)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SpectraError::NumericDomain(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let fs = short_period_coefficient(soil, ss)?;
        let f1 = one_second_coefficient(soil, s1)?;
        Ok(DesignParameters {
            soil,
            ss,
            s1,
            fs,
            f1,
            sds: ss * fs,
            sd1: s1 * f1,
        })
    }
}

/// TBDY-2018 spectrum pair with the quantities that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentSpectrum {
    pub horizontal: SpectrumCurve,
    pub vertical: SpectrumCurve,
    pub design: DesignParameters,
    pub control: ControlPeriods,
}

impl CurrentSpectrum {
    pub fn labels(&self) -> PlotLabels {
        PlotLabels::new(self.design.ss, self.design.s1, self.design.soil.name())
    }

    /// Hand both curves and their labels to a presentation sink.
    pub fn render(&self, sink: &mut dyn SpectrumSink) -> SpectraResult<()> {
        sink.render(&self.horizontal, &self.vertical, &self.labels())
    }
}

/// 0.01 s, 0.02 s, ..., 10.00 s.
pub fn default_period_axis() -> SpectraResult<PeriodAxis> {
    PeriodAxis::new(stepped_from_step(DEFAULT_PERIOD_COUNT, PERIOD_STEP_S))
}

/// Horizontal and vertical TBDY-2018 design spectra for one site.
pub fn current_spectrum(request: &CurrentSpectrumRequest) -> SpectraResult<CurrentSpectrum> {
    let soil = request.soil.resolve()?;
    let ss = request.unit.to_g(request.ss);
    let s1 = request.unit.to_g(request.s1);

    let design = DesignParameters::derive(soil, ss, s1)?;
    let control = ControlPeriods::from_design(design.sds, design.sd1)?;
    let vertical_control = control.vertical();

    debug!(
        soil = %soil,
        ss,
        s1,
        fs = design.fs,
        f1 = design.f1,
        sds = design.sds,
        sd1 = design.sd1,
        ta = control.ta,
        tb = control.tb,
        "TBDY-2018 design parameters"
    );

    let axis = match &request.periods {
        Some(periods) => periods.clone(),
        None => default_period_axis()?,
    };
    trace!(points = axis.len(), "evaluating TBDY-2018 spectra");

    let mut sa_h = Array1::<f64>::zeros(axis.len());
    let mut sa_v = Array1::<f64>::zeros(axis.len());
    for (i, t) in axis.iter().enumerate() {
        sa_h[i] = horizontal_sa(t, design.sds, design.sd1, &control)?;
        sa_v[i] = vertical_sa(t, design.sds, &vertical_control)?;
    }

    let periods = axis.into_inner();
    Ok(CurrentSpectrum {
        horizontal: SpectrumCurve::new(periods.clone(), sa_h)?,
        vertical: SpectrumCurve::new(periods, sa_v)?,
        design,
        control,
    })
}

/// Resolve a stored site section and compute its spectra.
pub fn current_spectrum_from_config(config: &CurrentSiteConfig) -> SpectraResult<CurrentSpectrum> {
    current_spectrum(&CurrentSpectrumRequest::from_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectra_types::constants::g_to_cms2;

    fn istanbul() -> CurrentSpectrumRequest {
        CurrentSpectrumRequest::new(SoilInput::Vs30(420.0), 1153.0, 318.0, HazardUnit::CmPerS2)
    }

    #[test]
    fn test_istanbul_design_parameters() {
        let spectrum = current_spectrum(&istanbul()).unwrap();
        let d = spectrum.design;
        assert_eq!(d.soil, SoilClass::ZC);
        assert!((d.ss - 1153.0 / 980.665).abs() < 1e-12);
        assert_eq!(d.fs, 1.21);
        assert_eq!(d.f1, 1.49);
        assert!((d.sds - d.ss * 1.21).abs() < 1e-12);
        assert!((d.sd1 - d.s1 * 1.49).abs() < 1e-12);
        assert!((spectrum.control.tb - d.sd1 / d.sds).abs() < 1e-12);
    }

    #[test]
    fn test_default_axis_shape() {
        let spectrum = current_spectrum(&istanbul()).unwrap();
        assert_eq!(spectrum.horizontal.len(), 1000);
        assert_eq!(spectrum.vertical.len(), 1000);
        let t = spectrum.horizontal.periods();
        assert!((t[0] - 0.01).abs() < 1e-15);
        assert!((t[999] - 10.0).abs() < 1e-12);
        assert_eq!(spectrum.horizontal.periods(), spectrum.vertical.periods());
    }

    #[test]
    fn test_plateau_peak_and_vertical_ratio() {
        let spectrum = current_spectrum(&istanbul()).unwrap();
        let sds = spectrum.design.sds;
        let (_, h_peak) = spectrum.horizontal.peak().unwrap();
        let (_, v_peak) = spectrum.vertical.peak().unwrap();
        assert!((h_peak - sds).abs() < 1e-12);
        assert!((v_peak - 0.8 * sds).abs() < 1e-12);
    }

    #[test]
    fn test_units_agree() {
        let in_g = CurrentSpectrumRequest::new(
            SoilInput::Class(SoilClass::ZD),
            1.1,
            0.3,
            HazardUnit::G,
        );
        let in_cms2 = CurrentSpectrumRequest::new(
            SoilInput::Class(SoilClass::ZD),
            g_to_cms2(1.1),
            g_to_cms2(0.3),
            HazardUnit::CmPerS2,
        );
        let a = current_spectrum(&in_g).unwrap();
        let b = current_spectrum(&in_cms2).unwrap();
        assert_eq!(a.design.fs, b.design.fs);
        assert_eq!(a.design.f1, b.design.f1);
        for (x, y) in a.horizontal.accelerations().iter().zip(b.horizontal.accelerations()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_hazard_is_domain_error() {
        for soil in SoilClass::ALL {
            let request =
                CurrentSpectrumRequest::new(SoilInput::Class(soil), 0.0, 0.0, HazardUnit::G);
            assert!(
                matches!(current_spectrum(&request), Err(SpectraError::NumericDomain(_))),
                "{soil}"
            );
        }
    }

    #[test]
    fn test_negative_extrapolated_coefficient_rejected() {
        // ZE Fs line crosses zero near Ss = 2.0 g.
        let request =
            CurrentSpectrumRequest::new(SoilInput::Class(SoilClass::ZE), 2.4, 0.5, HazardUnit::G);
        assert!(matches!(
            current_spectrum(&request),
            Err(SpectraError::NumericDomain(_))
        ));
    }

    #[test]
    fn test_default_axis_roundtrip_identical() {
        let first = current_spectrum(&istanbul()).unwrap();
        let axis = default_period_axis().unwrap();
        let again = current_spectrum(&istanbul().with_periods(axis)).unwrap();
        assert_eq!(first.horizontal, again.horizontal);
        assert_eq!(first.vertical, again.vertical);
    }

    #[test]
    fn test_custom_axis_with_zero_period() {
        let axis = PeriodAxis::from_vec(vec![0.0, 0.5, 7.0]).unwrap();
        let request =
            CurrentSpectrumRequest::new(SoilInput::Class(SoilClass::ZB), 0.8, 0.2, HazardUnit::G)
                .with_periods(axis);
        let spectrum = current_spectrum(&request).unwrap();
        let sds = spectrum.design.sds;
        let sd1 = spectrum.design.sd1;
        let h = spectrum.horizontal.accelerations();
        assert!((h[0] - 0.4 * sds).abs() < 1e-12);
        assert!((h[1] - sd1 / 0.5).abs() < 1e-12);
        assert!((h[2] - sd1 * 6.0 / 49.0).abs() < 1e-12);
        assert!((spectrum.vertical.accelerations()[0] - 0.32 * sds).abs() < 1e-12);
    }

    #[test]
    fn test_selectors() {
        assert_eq!("cms2".parse::<HazardUnit>().unwrap(), HazardUnit::CmPerS2);
        assert_eq!("g".parse::<HazardUnit>().unwrap(), HazardUnit::G);
        assert!(matches!(
            "gal".parse::<HazardUnit>(),
            Err(SpectraError::InvalidUnitSelector { .. })
        ));

        let v = SoilInput::from_selector("vs30", &SoilValue::Velocity(200.0)).unwrap();
        assert_eq!(v.resolve().unwrap(), SoilClass::ZD);
        let c = SoilInput::from_selector("soiltype", &SoilValue::Class("ZE".into())).unwrap();
        assert_eq!(c, SoilInput::Class(SoilClass::ZE));
        assert!(matches!(
            SoilInput::from_selector("vs", &SoilValue::Velocity(200.0)),
            Err(SpectraError::InvalidUnitSelector { .. })
        ));
        assert!(matches!(
            SoilInput::from_selector("soiltype", &SoilValue::Class("ZF".into())),
            Err(SpectraError::InvalidCategoricalInput { .. })
        ));
        assert!(SoilInput::from_selector("vs30", &SoilValue::Class("ZC".into())).is_err());
    }

    #[test]
    fn test_from_config_custom_axis() {
        let config = CurrentSiteConfig {
            soil: SoilValue::Class("ZE".to_string()),
            ss: 0.95,
            s1: 0.26,
            soil_unit: "soiltype".to_string(),
            hazard_unit: "g".to_string(),
            periods: Some(vec![0.1, 0.2, 0.4]),
        };
        let spectrum = current_spectrum_from_config(&config).unwrap();
        assert_eq!(spectrum.horizontal.len(), 3);
        assert_eq!(spectrum.design.soil, SoilClass::ZE);

        let bad_unit = CurrentSiteConfig {
            hazard_unit: "m/s2".to_string(),
            ..config.clone()
        };
        assert!(matches!(
            current_spectrum_from_config(&bad_unit),
            Err(SpectraError::InvalidUnitSelector { .. })
        ));

        let bad_axis = CurrentSiteConfig {
            periods: Some(vec![0.4, 0.2]),
            ..config
        };
        assert!(matches!(
            current_spectrum_from_config(&bad_axis),
            Err(SpectraError::InvalidPeriodAxis(_))
        ));
    }

    #[test]
    fn test_labels() {
        let spectrum = current_spectrum(&istanbul()).unwrap();
        let labels = spectrum.labels();
        assert_eq!(labels.soil, "ZC");
        assert_eq!(labels.ss, 1.18);
        assert_eq!(labels.s1, 0.32);
    }
}
