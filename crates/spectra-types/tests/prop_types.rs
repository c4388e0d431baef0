// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Property-Based Tests (proptest) for spectra-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for spectra-types using proptest.
//!
//! Covers: PeriodAxis validation, SpectrumCurve invariants, unit conversion.

use ndarray::Array1;
use proptest::prelude::*;
use spectra_types::constants::{cms2_to_g, g_to_cms2};
use spectra_types::state::{PeriodAxis, SpectrumCurve};

// ── PeriodAxis Invariants ────────────────────────────────────────────

proptest! {
    /// Cumulative sums of positive steps always form a valid axis.
    #[test]
    fn axis_from_positive_steps(steps in prop::collection::vec(1e-3f64..1.0, 1..200)) {
        let mut t = 0.0;
        let periods: Vec<f64> = steps.iter().map(|dt| { t += dt; t }).collect();
        let axis = PeriodAxis::from_vec(periods.clone()).unwrap();
        prop_assert_eq!(axis.len(), periods.len());
        for (a, b) in axis.iter().zip(periods.iter()) {
            prop_assert_eq!(a, *b);
        }
    }

    /// Reversing any axis of two or more points invalidates it.
    #[test]
    fn reversed_axis_rejected(n in 2usize..100) {
        let periods: Vec<f64> = (0..n).rev().map(|i| i as f64 * 0.05).collect();
        prop_assert!(PeriodAxis::from_vec(periods).is_err());
    }
}

// ── SpectrumCurve Invariants ─────────────────────────────────────────

proptest! {
    /// Equal-length, non-negative input always builds; the peak is the max.
    #[test]
    fn curve_peak_is_max(values in prop::collection::vec(0.0f64..3.0, 1..300)) {
        let n = values.len();
        let periods = Array1::from_shape_fn(n, |i| 0.01 * (i + 1) as f64);
        let curve = SpectrumCurve::new(periods, Array1::from(values.clone())).unwrap();
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        let (_, peak) = curve.peak().unwrap();
        prop_assert_eq!(peak, max);
        prop_assert_eq!(curve.len(), n);
    }

    /// Any length mismatch is rejected.
    #[test]
    fn curve_length_mismatch(n in 1usize..100, extra in 1usize..10) {
        let periods = Array1::from_shape_fn(n, |i| i as f64);
        let accel = Array1::from_elem(n + extra, 0.5);
        prop_assert!(SpectrumCurve::new(periods, accel).is_err());
    }
}

// ── Unit Conversion ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn cms2_g_inverse(v in 0.0f64..5_000.0) {
        let back = g_to_cms2(cms2_to_g(v));
        prop_assert!((back - v).abs() <= 1e-9 * v.max(1.0), "{} -> {}", v, back);
    }
}
