use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huddle::cluster::{is_close, partition};
use huddle::geo::{GeoPoint, MarkerSize, PixelPoint};
use huddle::Projection;
use rand::prelude::*;

/// One pixel per millidegree.
struct Viewport;

impl Projection for Viewport {
    fn to_pixels(&self, position: GeoPoint) -> Option<PixelPoint> {
        Some(PixelPoint::new(position.lon_e6 / 1_000, position.lat_e6 / 1_000))
    }
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    // Synthetic city-sized marker set in a ~1 degree square
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let points: Vec<GeoPoint> = (0..n)
        .map(|_| {
            GeoPoint::new(
                rng.random_range(47_000_000..48_000_000),
                rng.random_range(8_000_000..9_000_000),
            )
        })
        .collect();

    let footprint = MarkerSize::new(24, 24);

    group.bench_function("greedy_n1000", |b| {
        b.iter(|| {
            partition(black_box(points.clone()), |a, b| {
                is_close(&Viewport, *a, *b, footprint)
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
