use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gallery_walk::camera::CameraPose;
use gallery_walk::math::{Ray, AABB};
use gallery_walk::picking::{pick, pick_ray};
use gallery_walk::projects::ProjectRegistry;
use gallery_walk::scene::SceneGraph;
use gallery_walk::scenes::build_gallery;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Benchmark: Single ray vs box (hit case)
fn bench_ray_aabb_hit(c: &mut Criterion) {
    let bounds = AABB::new(Vec3::new(-1.0, -1.0, 4.0), Vec3::new(1.0, 1.0, 6.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);

    c.bench_function("ray_aabb_hit", |b| {
        b.iter(|| black_box(black_box(&ray).intersect_aabb(black_box(&bounds))))
    });
}

/// Benchmark: Single ray vs box (miss case)
fn bench_ray_aabb_miss(c: &mut Criterion) {
    let bounds = AABB::new(Vec3::new(10.0, 10.0, 4.0), Vec3::new(12.0, 12.0, 6.0));
    let ray = Ray::new(Vec3::ZERO, Vec3::Z);

    c.bench_function("ray_aabb_miss", |b| {
        b.iter(|| black_box(black_box(&ray).intersect_aabb(black_box(&bounds))))
    });
}

/// Benchmark: Center-screen pick in the built-in gallery
fn bench_gallery_pick(c: &mut Criterion) {
    let graph = build_gallery(&ProjectRegistry::builtin().unwrap()).graph;
    let mut camera = CameraPose::new(Vec3::new(0.0, 1.7, 11.0));
    camera.yaw = -FRAC_PI_2;

    c.bench_function("gallery_pick_frame", |b| {
        b.iter(|| black_box(pick(black_box(&graph), black_box(&camera))))
    });
}

/// Benchmark: Picking through a wide wall of frames
fn bench_many_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_frames");

    for count in [10, 100, 1000].iter() {
        let mut graph = SceneGraph::new();
        for i in 0..*count {
            let z = i as f32 * 3.0;
            let frame = graph.add_group(None, "frame", Vec3::new(-7.0, 2.2, z));
            graph.set_rotation_y(frame, FRAC_PI_2);
            graph.set_tag(frame, &format!("project-{i}"));
            graph.add_mesh(
                Some(frame),
                "art",
                Vec3::ZERO,
                AABB::from_center_size(Vec3::ZERO, Vec3::new(2.4, 1.6, 0.06)),
            );
        }
        let ray = Ray::new(Vec3::new(0.0, 2.2, (*count / 2) as f32 * 3.0), -Vec3::X);

        group.bench_with_input(BenchmarkId::new("frames", count), count, |b, _| {
            b.iter(|| black_box(pick_ray(black_box(&graph), black_box(&ray))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ray_aabb_hit,
    bench_ray_aabb_miss,
    bench_gallery_pick,
    bench_many_frames,
);

criterion_main!(benches);
