use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use image::RgbImage;
use lidarviz::core::ProjectedPoints;
use lidarviz::render::{render_projections, DepthColorMap, OverlayOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_projection(n: usize, seed: u64) -> ProjectedPoints {
    let mut rng = StdRng::seed_from_u64(seed);
    let u: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0f32..1242.0)).collect();
    let v: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0f32..375.0)).collect();
    let z: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0f32..80.0)).collect();
    ProjectedPoints::new(u, v, z).unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_projections");
    for size in [20_000, 120_000] {
        let points = random_projection(size, 42);
        let base = RgbImage::new(1242, 375);
        group.bench_with_input(BenchmarkId::new("lidarviz", size), &points, |b, points| {
            b.iter(|| {
                let mut image = base.clone();
                render_projections(points, &mut image, &OverlayOptions::default()).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_colormap(c: &mut Criterion) {
    let cmap = DepthColorMap::shared();
    let depths: Vec<f32> = (0..100_000).map(|i| (i % 9000) as f32 * 0.01).collect();
    c.bench_function("depth_colormap_100k", |b| {
        b.iter(|| depths.iter().map(|&z| cmap.color(z)[0] as u64).sum::<u64>())
    });
}

criterion_group!(benches, bench_render, bench_colormap);
criterion_main!(benches);
