use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diffraction::algo::QuadratureOptions;
use diffraction::models::{fraunhofer_curve, fresnel_curve};
use diffraction::ExperimentConfig;

fn bench_fraunhofer_curve(c: &mut Criterion) {
    let config = ExperimentConfig::default();

    let mut group = c.benchmark_group("fraunhofer_curve");
    group.bench_function("500_samples", |b| {
        b.iter(|| fraunhofer_curve(black_box(&config), black_box(500), black_box(255.0)))
    });
    group.bench_function("4000_samples", |b| {
        b.iter(|| fraunhofer_curve(black_box(&config), black_box(4000), black_box(255.0)))
    });
    group.finish();
}

fn bench_fresnel_curve(c: &mut Criterion) {
    let narrow = ExperimentConfig::default();
    let wide = ExperimentConfig::default().with_slit_width(2e-3);
    let options = QuadratureOptions::default();

    let mut group = c.benchmark_group("fresnel_curve");
    group.bench_function("500_samples_0.5mm", |b| {
        b.iter(|| {
            fresnel_curve(
                black_box(&narrow),
                black_box(500),
                black_box(255.0),
                black_box(&options),
            )
        })
    });
    group.bench_function("500_samples_2mm", |b| {
        b.iter(|| {
            fresnel_curve(
                black_box(&wide),
                black_box(500),
                black_box(255.0),
                black_box(&options),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_fraunhofer_curve, bench_fresnel_curve);
criterion_main!(benches);
