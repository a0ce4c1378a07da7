// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use petri_cells::{CellId, CellTable, CellType};
use petri_quadtree::{Aabb, NodeStack, QuadTree};
use petri_sim::{is_safe, select_rect};

const WORLD: f32 = 8000.0;

struct Rng(u64);

impl Rng {
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

fn gen_world(count: u32) -> (CellTable, Vec<CellId>) {
    let mut rng = Rng(0xfeed_beef_1234_5678);
    let mut table = CellTable::with_capacity(1 << 15);
    for k in 0..count {
        let x = rng.next_f32(-WORLD, WORLD);
        let y = rng.next_f32(-WORLD, WORLD);
        let ty = match k % 10 {
            0 => CellType::player((k % 5) as u8),
            1 => CellType::VIRUS,
            _ => CellType::PELLET,
        };
        let r = if ty.is_pellet() { 3.0 } else { rng.next_f32(40.0, 160.0) };
        let id = table.spawn(ty, x, y, r);
        table.get_mut(id).age = 10;
    }
    let mut active: Vec<CellId> = table.iter_live().collect();
    active.push(CellId::NONE);
    (table, active)
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for count in [2_000u32, 16_000] {
        let (table, active) = gen_world(count);
        let mut tree = QuadTree::new(Aabb::new(-WORLD, -WORLD, WORLD, WORLD), 16, 12);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_function(format!("{count}_cells"), |b| {
            b.iter(|| {
                tree.rebuild(&table, &active);
                black_box(tree.node_count())
            });
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_rect");
    let (table, active) = gen_world(16_000);
    let mut tree = QuadTree::new(Aabb::new(-WORLD, -WORLD, WORLD, WORLD), 16, 12);
    tree.rebuild(&table, &active);
    let mut stack = NodeStack::for_tree(&tree);
    let mut out = Vec::new();

    for (label, half) in [("narrow_view", 400.0f64), ("wide_view", 2_400.0)] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let view = Rect::new(-half, -half, half, half);
                black_box(select_rect(&table, &tree, &mut stack, &mut out, view))
            });
        });
    }
    group.finish();
}

fn bench_is_safe(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_safe");
    let (table, active) = gen_world(16_000);
    let mut tree = QuadTree::new(Aabb::new(-WORLD, -WORLD, WORLD, WORLD), 16, 12);
    tree.rebuild(&table, &active);
    let mut stack = NodeStack::for_tree(&tree);

    group.bench_function("probe_sweep", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for k in 0..64i64 {
                let x = -7_000.0 + 220.0 * k as f64;
                acc += i64::from(is_safe(
                    &table,
                    &tree,
                    &mut stack,
                    Point::new(x, 0.25 * x),
                    60.0,
                ));
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_select, bench_is_safe);
criterion_main!(benches);
