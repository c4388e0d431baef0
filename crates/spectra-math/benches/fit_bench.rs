use criterion::{criterion_group, criterion_main, Criterion};
use spectra_math::axis::arange;
use spectra_math::fit::{linear_least_squares, round_to};
use std::hint::black_box;

fn bench_fit_six_points(c: &mut Criterion) {
    let x = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5];
    let y = [2.4, 1.7, 1.3, 1.1, 0.9, 0.8];

    c.bench_function("linear_fit_6pt", |b| {
        b.iter(|| {
            let fit = linear_least_squares(black_box(&x), black_box(&y));
            black_box(fit.map(|f| round_to(f.eval(1.1), 2)))
        })
    });
}

fn bench_arange_legacy_axis(c: &mut Criterion) {
    c.bench_function("arange_0_3s", |b| {
        b.iter(|| black_box(arange(black_box(0.0), 3.0, 0.01)))
    });
}

criterion_group!(benches, bench_fit_six_points, bench_arange_legacy_axis);
criterion_main!(benches);
