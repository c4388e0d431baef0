//! Fixed-step period ranges.

use ndarray::Array1;

/// Relative tolerance for snapping a step count to an integer.
const COUNT_SNAP_TOL: f64 = 1e-9;

/// Number of samples in `[start, stop)` at spacing `step`.
///
/// Counts within [`COUNT_SNAP_TOL`] of an integer are snapped, so
/// `(0.4 - 0.15) / 0.01 = 25.000000000000004` yields 25 points and the
/// segment never repeats its own exclusive end.
pub fn step_count(start: f64, stop: f64, step: f64) -> usize {
    let raw = (stop - start) / step;
    if !raw.is_finite() || step <= 0.0 || raw <= 0.0 {
        return 0;
    }
    let nearest = raw.round();
    if (raw - nearest).abs() <= COUNT_SNAP_TOL * nearest.max(1.0) {
        nearest as usize
    } else {
        raw.ceil() as usize
    }
}

/// Half-open range `start, start + step, ...` below `stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Array1<f64> {
    let n = step_count(start, stop, step);
    Array1::from_shape_fn(n, |i| start + step * i as f64)
}

/// `n` points `step, 2*step, ..., n*step`.
pub fn stepped_from_step(n: usize, step: f64) -> Array1<f64> {
    Array1::from_shape_fn(n, |i| step * (i + 1) as f64)
}
