//! Numerical primitives for SCPN Seismic Spectra.

pub mod axis;
pub mod fit;
