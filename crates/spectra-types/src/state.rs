// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use serde::Serialize;

use crate::error::{SpectraError, SpectraResult};

/// Structural periods [s] at which a spectrum is evaluated.
/// Non-negative, finite and strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAxis {
    periods: Array1<f64>,
}

impl PeriodAxis {
    pub fn new(periods: Array1<f64>) -> SpectraResult<Self> {
        for (i, &t) in periods.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(SpectraError::InvalidPeriodAxis(format!(
                    "period[{i}] = {t} is not a finite non-negative value"
                )));
            }
            if i > 0 && t <= periods[i - 1] {
                return Err(SpectraError::InvalidPeriodAxis(format!(
                    "period[{i}] = {t} does not exceed period[{}] = {}",
                    i - 1,
                    periods[i - 1]
                )));
            }
        }
        Ok(PeriodAxis { periods })
    }

    pub fn from_vec(periods: Vec<f64>) -> SpectraResult<Self> {
        Self::new(Array1::from(periods))
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.periods.iter().copied()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.periods
    }
}

/// Spectral acceleration [g] versus period [s].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumCurve {
    periods: Array1<f64>,
    accelerations: Array1<f64>,
}

impl SpectrumCurve {
    pub fn new(periods: Array1<f64>, accelerations: Array1<f64>) -> SpectraResult<Self> {
        if periods.len() != accelerations.len() {
            return Err(SpectraError::NumericDomain(format!(
                "curve length mismatch: {} periods vs {} accelerations",
                periods.len(),
                accelerations.len()
            )));
        }
        if let Some((i, sa)) = accelerations
            .iter()
            .enumerate()
            .find(|(_, sa)| !sa.is_finite() || **sa < 0.0)
        {
            return Err(SpectraError::NumericDomain(format!(
                "acceleration[{i}] = {sa} at T = {} s is negative or non-finite",
                periods[i]
            )));
        }
        Ok(SpectrumCurve {
            periods,
            accelerations,
        })
    }

    pub fn periods(&self) -> &Array1<f64> {
        &self.periods
    }

    pub fn accelerations(&self) -> &Array1<f64> {
        &self.accelerations
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// (T, Sa) pairs in axis order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.periods
            .iter()
            .copied()
            .zip(self.accelerations.iter().copied())
    }

    /// Period and value of the largest acceleration. First one wins on ties.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .fold(None, |best: Option<(f64, f64)>, (t, sa)| match best {
                Some((_, best_sa)) if best_sa >= sa => best,
                _ => Some((t, sa)),
            })
    }
}
