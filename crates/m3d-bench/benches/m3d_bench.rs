//! Benchmarks for m3d operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use m3d_core::{Degrees, Rotation};
use m3d_math::{Mat4, Vec4, simd};

fn mvp() -> Mat4 {
    let proj = Mat4::perspective(Degrees::new(90.0).into(), 1.5, 0.1, 10000.0)
        .unwrap_or(Mat4::IDENTITY);
    let view = Mat4::rotate_xyz(&Rotation::from_degrees(5.0, 45.0, 10.0)).transposed()
        * Mat4::translate_xyz(Vec4::direction(12.0, -1.0, -10.0))
        * Mat4::scale(1.5);
    proj * view
}

fn points(n: usize) -> Vec<Vec4> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Vec4::point(t * 10.0 - 5.0, (t * 37.0).sin(), -t * 50.0)
        })
        .collect()
}

/// Benchmark stream transforms against a per-vector loop.
fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let m = mvp();

    for size in [1_000usize, 10_000, 100_000] {
        let input = points(size);
        let mut output = vec![Vec4::ZERO; size];
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scalar_coord", size), &input, |b, v| {
            b.iter(|| v.iter().map(|p| m.transform_point(black_box(*p))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("transform_stream", size), &input, |b, v| {
            b.iter(|| simd::transform_stream(&mut output, black_box(v), &m))
        });

        group.bench_with_input(BenchmarkId::new("coord_stream", size), &input, |b, v| {
            b.iter(|| simd::transform_coord_stream(&mut output, black_box(v), &m))
        });

        group.bench_with_input(BenchmarkId::new("par_coord_stream", size), &input, |b, v| {
            b.iter(|| simd::par_transform_coord_stream(&mut output, black_box(v), &m))
        });

        group.bench_with_input(BenchmarkId::new("glam_coord", size), &input, |b, v| {
            let g = m.to_glam();
            b.iter(|| {
                v.iter()
                    .map(|p| g.project_point3(black_box(p.to_glam().truncate())))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark matrix operations.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");
    let m = mvp();

    group.bench_function("multiply", |b| b.iter(|| black_box(m) * black_box(m)));
    group.bench_function("determinant", |b| b.iter(|| black_box(m).determinant()));
    group.bench_function("inversed", |b| b.iter(|| black_box(m).inversed()));
    group.bench_function("glam_inverse", |b| {
        let g = m.to_glam();
        b.iter(|| black_box(g).inverse())
    });
    group.bench_function("rotate_xyz", |b| {
        let rot = Rotation::from_degrees(20.0, 40.0, 0.0);
        b.iter(|| Mat4::rotate_xyz(black_box(&rot)))
    });

    group.finish();
}

/// Benchmark vector operations.
fn bench_vec4(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec4");
    let a = Vec4::new(1.0, -2.0, 3.0, 0.5);
    let b4 = Vec4::new(-0.25, 8.0, 0.125, -4.0);

    group.bench_function("dot", |b| b.iter(|| black_box(a).dot(black_box(b4))));
    group.bench_function("cross", |b| b.iter(|| black_box(a).cross(black_box(b4))));
    group.bench_function("normalized", |b| b.iter(|| black_box(a).normalized()));

    group.finish();
}

criterion_group!(benches, bench_streams, bench_mat4, bench_vec4);
criterion_main!(benches);
