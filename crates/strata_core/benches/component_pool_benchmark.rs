//! # Component Pool Benchmark
//!
//! Compares routing through `ComponentPool` with direct set access; the two
//! should be indistinguishable since pool selection is static.
//!
//! Run with: `cargo bench --package strata_core --bench component_pool_benchmark`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use bytemuck::{Pod, Zeroable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_core::{component_pool, ComponentPool, SparseSet};

const ENTITY_COUNT: u32 = 100_000;

#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
#[repr(C)]
struct Position {
    x: f32,
    y: f32,
    z: f32,
    _padding: f32,
}

#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
#[repr(C)]
struct Velocity {
    x: f32,
    y: f32,
    z: f32,
    _padding: f32,
}

component_pool! {
    struct Motion for u32 {
        positions: Position,
        velocities: Velocity,
    }
}

fn filled_motion() -> Motion {
    let mut motion = Motion::with_capacity(ENTITY_COUNT as usize);
    for entity in 0..ENTITY_COUNT {
        motion.construct(entity, Position::default());
        if entity % 4 != 0 {
            motion.construct(
                entity,
                Velocity {
                    x: 0.1,
                    y: 0.2,
                    z: 0.3,
                    _padding: 0.0,
                },
            );
        }
    }
    motion
}

/// Benchmark: typed `has`/`get` through the pool versus the set itself.
fn bench_routing(c: &mut Criterion) {
    let mut motion = filled_motion();
    let mut group = c.benchmark_group("routing");

    group.bench_function("pool_get_100K", |b| {
        b.iter(|| {
            let mut sum = 0.0_f32;
            for entity in 0..ENTITY_COUNT {
                if motion.has::<Velocity>(entity) {
                    sum += motion.get::<Velocity>(entity).x;
                }
            }
            black_box(sum)
        });
    });

    group.bench_function("set_get_100K", |b| {
        let velocities: &SparseSet<u32, Velocity> = motion.storage();
        b.iter(|| {
            let mut sum = 0.0_f32;
            for entity in 0..ENTITY_COUNT {
                if velocities.has(entity) {
                    sum += velocities.get(entity).x;
                }
            }
            black_box(sum)
        });
    });

    group.finish();
    motion.reset();
}

/// Benchmark: integrate velocity into position, driven by the velocity set.
fn bench_integrate(c: &mut Criterion) {
    let mut motion = filled_motion();

    c.bench_function("integrate_75K_moving", |b| {
        b.iter(|| {
            let count = motion.len::<Velocity>();
            for slot in 0..count {
                let entity = motion.entities::<Velocity>()[slot];
                let velocity = motion.components::<Velocity>()[slot];
                let position = motion.get_mut::<Position>(entity);
                position.x += velocity.x * 0.016;
                position.y += velocity.y * 0.016;
                position.z += velocity.z * 0.016;
            }
            black_box(count)
        });
    });

    motion.reset();
}

/// Benchmark: aggregate reset and refill.
fn bench_reset(c: &mut Criterion) {
    c.bench_function("fill_and_reset_100K", |b| {
        b.iter(|| {
            let mut motion = filled_motion();
            let len = black_box(motion.len::<Position>());
            motion.reset();
            len
        });
    });
}

criterion_group!(benches, bench_routing, bench_integrate, bench_reset);

criterion_main!(benches);
