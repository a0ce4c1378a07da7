// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use petri_cells::{CellId, CellTable, CellType};
use petri_quadtree::{Aabb, NodeStack, QuadTree};
use petri_sim::{SimConfig, integrate_tick, move_player_cells, resolve_tick};

const WORLD: f32 = 8000.0;

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
    fn next_f32(&mut self, lo: f32, hi: f32) -> f32 {
        let unit = (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32;
        lo + unit * (hi - lo)
    }
}

struct World {
    table: CellTable,
    tree: QuadTree,
    stack: NodeStack,
    active: Vec<CellId>,
    cfg: SimConfig,
}

fn gen_world(players: u8, per_player: u32, pellets: u32, viruses: u32) -> World {
    let mut rng = Rng::new(0x5eed_cafe_f00d_d00d);
    let mut table = CellTable::with_capacity(1 << 14);
    for p in 0..players {
        for _ in 0..per_player {
            let x = rng.next_f32(-WORLD, WORLD);
            let y = rng.next_f32(-WORLD, WORLD);
            let r = rng.next_f32(30.0, 200.0);
            let id = table.spawn(CellType::player(p), x, y, r);
            table.get_mut(id).age = 1000;
        }
    }
    for _ in 0..pellets {
        let x = rng.next_f32(-WORLD, WORLD);
        let y = rng.next_f32(-WORLD, WORLD);
        table.spawn(CellType::PELLET, x, y, 3.0);
    }
    for _ in 0..viruses {
        let x = rng.next_f32(-WORLD, WORLD);
        let y = rng.next_f32(-WORLD, WORLD);
        table.spawn(CellType::VIRUS, x, y, 70.0);
    }

    let tree = QuadTree::new(Aabb::new(-WORLD, -WORLD, WORLD, WORLD), 16, 12);
    let stack = NodeStack::for_tree(&tree);
    World {
        table,
        tree,
        stack,
        active: Vec::new(),
        cfg: SimConfig {
            no_merge_delay: 100,
            merge_time: 0,
            ..SimConfig::default()
        },
    }
}

fn tick(world: &mut World) -> u32 {
    let bounds = Rect::new(
        f64::from(-WORLD),
        f64::from(-WORLD),
        f64::from(WORLD),
        f64::from(WORLD),
    );
    world.table.collect_active(&mut world.active);
    integrate_tick(
        &mut world.table,
        &world.active,
        bounds,
        1.0,
        &|_| 10_000.0,
        &world.cfg,
    );
    let mut slice: Vec<CellId> = Vec::new();
    for p in 0..8u8 {
        slice.clear();
        let ty = CellType::player(p);
        slice.extend(world.table.iter_live().filter(|&id| world.table.get(id).ty == ty));
        move_player_cells(&mut world.table, &slice, Point::new(0.0, 0.0), 1.0, &world.cfg);
    }
    world.table.collect_active(&mut world.active);
    world.tree.rebuild(&world.table, &world.active);
    resolve_tick(
        &mut world.table,
        &world.tree,
        &mut world.stack,
        &world.active,
        &world.cfg,
    )
}

fn bench_full_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_tick");
    for (label, pellets) in [("sparse_2k", 2_000u32), ("dense_10k", 10_000u32)] {
        let world = gen_world(8, 24, pellets, 64);
        group.throughput(Throughput::Elements(u64::from(pellets)));
        group.bench_function(label, |b| {
            b.iter_batched_ref(
                || world_clone(&world),
                |w| black_box(tick(w)),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn world_clone(world: &World) -> World {
    World {
        table: world.table.clone(),
        tree: world.tree.clone(),
        stack: NodeStack::for_tree(&world.tree),
        active: Vec::new(),
        cfg: world.cfg.clone(),
    }
}

fn bench_resolve_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_only");
    let mut world = gen_world(8, 24, 6_000, 64);
    world.table.collect_active(&mut world.active);
    world.tree.rebuild(&world.table, &world.active);
    group.bench_function("mid_density", |b| {
        b.iter_batched_ref(
            || world_clone(&world),
            |w| {
                w.table.collect_active(&mut w.active);
                w.tree.rebuild(&w.table, &w.active);
                black_box(resolve_tick(
                    &mut w.table,
                    &w.tree,
                    &mut w.stack,
                    &w.active,
                    &w.cfg,
                ))
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_full_tick, bench_resolve_only);
criterion_main!(benches);
