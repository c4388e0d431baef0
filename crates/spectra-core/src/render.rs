//! Presentation seam for spectrum output.
//!
//! The calculators never draw. A caller that wants a figure or a table
//! implements [`SpectrumSink`] and hands it to
//! [`CurrentSpectrum::render`](crate::current::CurrentSpectrum::render).

use serde::Serialize;
use spectra_math::fit::round_to;
use spectra_types::error::SpectraResult;
use spectra_types::state::SpectrumCurve;

/// Title data shown next to a TBDY-2018 spectrum pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLabels {
    /// Short-period map acceleration [g], two decimals.
    pub ss: f64,
    /// 1.0 s map acceleration [g], two decimals.
    pub s1: f64,
    pub soil: String,
}

impl PlotLabels {
    pub fn new(ss: f64, s1: f64, soil: impl Into<String>) -> Self {
        PlotLabels {
            ss: round_to(ss, 2),
            s1: round_to(s1, 2),
            soil: soil.into(),
        }
    }

    /// `Ss: 1.18 g | S1: 0.32 g | Soil: ZC`
    pub fn title(&self) -> String {
        format!(
            "Ss: {} g | S1: {} g | Soil: {}",
            self.ss, self.s1, self.soil
        )
    }
}

/// Consumer of a horizontal/vertical spectrum pair.
pub trait SpectrumSink {
    fn render(
        &mut self,
        horizontal: &SpectrumCurve,
        vertical: &SpectrumCurve,
        labels: &PlotLabels,
    ) -> SpectraResult<()>;
}
