// File: crates/scatter-core/benches/scale_bench.rs
// Summary: Criterion benches for extent scanning and scale construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{build_scales, Channels, Dimensions, WeatherRecord};

fn synthetic_records(n: usize) -> Vec<WeatherRecord> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            WeatherRecord {
                dew_point: 20.0 + 60.0 * t,
                humidity: 0.2 + 0.7 * (t * 7.3).sin().abs(),
                cloud_cover: (t * 3.1).fract(),
                date: None,
            }
        })
        .collect()
}

fn bench_build_scales(c: &mut Criterion) {
    let dims = Dimensions::from_viewport(1000.0, 1000.0).unwrap();
    for n in [365usize, 10_000] {
        let records = synthetic_records(n);
        c.bench_function(&format!("build_scales_{n}"), |b| {
            b.iter(|| build_scales(black_box(&records), Channels::default(), &dims).unwrap())
        });
    }
}

criterion_group!(benches, bench_build_scales);
criterion_main!(benches);
