use cantilever::{Coordinate, Scale, Triangle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");

    let triangle = Triangle::new(Coordinate::new(1, 0, 0));
    group.bench_function("region triangulation", |b| {
        b.iter(|| black_box(triangle).triangulation(Scale::Region))
    });
    group.bench_function("region handles", |b| {
        b.iter(|| black_box(triangle).handles(Scale::Region))
    });
    group.bench_function("region profile", |b| {
        b.iter(|| black_box(triangle).profile(Scale::Region))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
