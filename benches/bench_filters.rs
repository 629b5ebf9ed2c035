use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lidarviz::core::{ImageSize, ProjectedPoints};
use lidarviz::filters::{preprocess, remove_negative_depth};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_projection(n: usize, seed: u64) -> ProjectedPoints {
    let mut rng = StdRng::seed_from_u64(seed);
    let u: Vec<f32> = (0..n).map(|_| rng.gen_range(-200.0f32..1440.0)).collect();
    let v: Vec<f32> = (0..n).map(|_| rng.gen_range(-200.0f32..576.0)).collect();
    let z: Vec<f32> = (0..n).map(|_| rng.gen_range(-20.0f32..80.0)).collect();
    ProjectedPoints::new(u, v, z).unwrap()
}

fn bench_depth_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_negative_depth");
    for size in [100_000, 1_000_000] {
        let points = random_projection(size, 42);
        group.bench_with_input(BenchmarkId::new("lidarviz", size), &points, |b, points| {
            b.iter(|| remove_negative_depth(points))
        });
    }
    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess_kitti_frame");
    let frame = ImageSize::new(1242, 375);
    for size in [100_000, 1_000_000] {
        let points = random_projection(size, 42);
        group.bench_with_input(BenchmarkId::new("lidarviz", size), &points, |b, points| {
            b.iter(|| preprocess(points, frame))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_depth_filter, bench_preprocess);
criterion_main!(benches);
