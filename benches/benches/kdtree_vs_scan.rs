// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{KdTree, LinearScan, Point2D, Rect};

fn gen_grid_points(n: usize) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for x in 0..n {
        for y in 0..n {
            out.push(Point2D::new(x as f64, y as f64));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, max_w: f64, max_h: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Point2D::new(rng.next_f64() * max_w, rng.next_f64() * max_h));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point2D::new(cx + dx, cy + dy));
        }
    }
    out
}

fn bench_grid_small_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_small_query");
    for &n in &[64usize, 128, 256] {
        let points = gen_grid_points(n);
        let mid = (n / 2) as f64;
        let query = Rect::from_xywh(mid, mid, 4.0, 4.0);
        let tree: KdTree<_> = points.iter().copied().collect();
        let scan: LinearScan<_> = points.iter().copied().collect();
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("kdtree_query_n{}", n), |b| {
            b.iter(|| black_box(tree.range(black_box(query)).len()))
        });
        group.bench_function(format!("scan_query_n{}", n), |b| {
            b.iter(|| black_box(scan.range(black_box(query)).len()))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let random = gen_random_points(16_384, 2000.0, 2000.0);
    let grid = gen_grid_points(128);
    for (name, points) in [("random", &random), ("grid", &grid)] {
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("kdtree_insert_{}", name), |b| {
            b.iter_batched(
                KdTree::<Point2D<f64>>::new,
                |mut tree| {
                    tree.insert(points.iter().copied());
                    black_box(tree.node_count());
                    tree
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let points = gen_random_points(16_384, 2000.0, 2000.0);
    let tree: KdTree<_> = points.iter().copied().collect();
    let scan: LinearScan<_> = points.iter().copied().collect();
    let queries: Vec<_> = (0..256)
        .map(|q| {
            let x = (q % 16) as f64 * 120.0;
            let y = (q / 16) as f64 * 120.0;
            Rect::from_xywh(x, y, 64.0, 64.0)
        })
        .collect();
    group.bench_function("kdtree_many_queries", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            let mut total = 0usize;
            for q in &queries {
                buf.clear();
                tree.range_into(*q, &mut buf);
                total += buf.len();
            }
            black_box(total)
        })
    });
    group.bench_function("scan_many_queries", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            let mut total = 0usize;
            for q in &queries {
                buf.clear();
                scan.range_into(*q, &mut buf);
                total += buf.len();
            }
            black_box(total)
        })
    });
    group.finish();
}

fn bench_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustered");
    let points = gen_clustered_points(16, 256, 128.0);
    let query = Rect::from_xywh(800.0, 800.0, 400.0, 400.0);
    group.bench_function("kdtree_insert_query", |b| {
        b.iter_batched(
            KdTree::<Point2D<f64>>::new,
            |mut tree| {
                tree.insert(points.iter().copied());
                black_box(tree.range(query).len());
                tree
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("scan_insert_query", |b| {
        b.iter_batched(
            LinearScan::<Point2D<f64>>::new,
            |mut scan| {
                scan.insert(points.iter().copied());
                black_box(scan.range(query).len());
                scan
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_grid_small_query,
    bench_build,
    bench_query_heavy,
    bench_clustered,
);
criterion_main!(benches);
