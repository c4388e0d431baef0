// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Standard gravity [cm/s²]. Hazard maps publish Ss and S1 in cm/s².
pub const G_CMS2: f64 = 980.665;

/// Period step of every generated axis [s].
pub const PERIOD_STEP_S: f64 = 0.01;

/// Number of points on the default TBDY-2018 axis (0.01 s .. 10.00 s).
pub const DEFAULT_PERIOD_COUNT: usize = 1000;

/// Long-period transition TL of the horizontal TBDY-2018 spectrum [s].
pub const TL_HORIZONTAL_S: f64 = 6.0;

/// Exclusive upper bound of the DBYBHY-2007 axis [s].
pub const LEGACY_PERIOD_END_S: f64 = 3.0;

/// Building importance factors tabulated by DBYBHY-2007.
pub const IMPORTANCE_FACTORS: [f64; 4] = [1.0, 1.2, 1.4, 1.5];

/// Convert a spectral value from cm/s² to g.
pub fn cms2_to_g(value: f64) -> f64 {
    value / G_CMS2
}

/// Convert a spectral value from g to cm/s².
pub fn g_to_cms2(value: f64) -> f64 {
    value * G_CMS2
}
