//! Benchmarks for the rustwrr pick path.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rustwrr::{CallOutcome, Endpoint, PickerBuilder, WeightedPicker};

fn create_picker(num_backends: usize) -> WeightedPicker<usize> {
    PickerBuilder::new().build((0..num_backends).map(|i| {
        let endpoint = Endpoint::new(format!("127.0.0.1:{}", 9000 + i))
            .with_metadata("weight", (i as u32 % 10) + 1);
        (i, endpoint)
    }))
}

fn benchmark_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    group.throughput(Throughput::Elements(1));

    for num_backends in [2usize, 10, 100] {
        let picker = create_picker(num_backends);
        group.bench_function(format!("{num_backends}_backends"), |b| {
            b.iter(|| {
                black_box(picker.pick().unwrap());
            })
        });
    }

    group.finish();
}

fn benchmark_pick_and_complete(c: &mut Criterion) {
    let picker = create_picker(10);

    c.bench_function("pick_and_complete", |b| {
        b.iter(|| {
            let pick = picker.pick().unwrap();
            black_box(pick.handle());
            pick.complete(CallOutcome::Success);
        })
    });
}

fn benchmark_build(c: &mut Criterion) {
    let builder = PickerBuilder::new();
    let endpoints: Vec<(usize, Endpoint)> = (0..10)
        .map(|i| {
            (
                i,
                Endpoint::new(format!("127.0.0.1:{}", 9000 + i)).with_metadata("weight", 5u32),
            )
        })
        .collect();

    c.bench_function("build_10_backends", |b| {
        b.iter(|| {
            black_box(builder.build(endpoints.clone()));
        })
    });
}

criterion_group!(
    benches,
    benchmark_pick,
    benchmark_pick_and_complete,
    benchmark_build
);
criterion_main!(benches);
