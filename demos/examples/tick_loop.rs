// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full tick pipeline over a small world.
//!
//! Runs integrate → steer → rebuild → resolve for a handful of ticks and
//! prints what the arena looks like from one player's viewport.
//!
//! Run:
//! - `cargo run -p petri_demos --example tick_loop`

use kurbo::{Point, Rect};
use petri_cells::{CellId, CellTable, CellType};
use petri_quadtree::{Aabb, NodeStack, QuadTree};
use petri_sim::{SimConfig, integrate_tick, move_player_cells, resolve_tick, select_rect};

const WORLD: f64 = 2000.0;
const TICKS: u32 = 30;

fn main() {
    let bounds = Rect::new(-WORLD, -WORLD, WORLD, WORLD);
    let cfg = SimConfig {
        no_merge_delay: 10,
        merge_time: 0,
        ..SimConfig::default()
    };

    let mut table = CellTable::with_capacity(4096);
    // Two players chasing the same spot, plus scenery.
    for (player, x) in [(0_u8, -400.0_f32), (1, 400.0)] {
        for i in 0..8 {
            table.spawn(CellType::player(player), x, -350.0 + 100.0 * i as f32, 80.0);
        }
    }
    for i in 0..40 {
        for j in 0..40 {
            let x = -1950.0 + 100.0 * i as f32;
            let y = -1950.0 + 100.0 * j as f32;
            table.spawn(CellType::PELLET, x, y, 3.0);
        }
    }
    for i in 0..10 {
        table.spawn(CellType::VIRUS, -900.0 + 200.0 * i as f32, 0.0, 70.0);
    }

    let mut tree = QuadTree::new(
        Aabb::new(-WORLD as f32, -WORLD as f32, WORLD as f32, WORLD as f32),
        16,
        12,
    );
    let mut stack = NodeStack::for_tree(&tree);
    let mut active = Vec::new();
    let mut slice: Vec<CellId> = Vec::new();
    let mut visible = Vec::new();

    for tick in 1..=TICKS {
        table.collect_active(&mut active);
        integrate_tick(&mut table, &active, bounds, 1.0, &|_| 50_000.0, &cfg);

        for player in [0_u8, 1] {
            slice.clear();
            slice.extend(
                table
                    .iter_live()
                    .filter(|&id| table.get(id).ty == CellType::player(player)),
            );
            move_player_cells(&mut table, &slice, Point::new(0.0, 0.0), 1.0, &cfg);
        }

        table.collect_active(&mut active);
        tree.rebuild(&table, &active);
        let checks = resolve_tick(&mut table, &tree, &mut stack, &active, &cfg);

        if tick % 5 == 0 {
            let viewport = Rect::new(-500.0, -500.0, 500.0, 500.0);
            let n = select_rect(&table, &tree, &mut stack, &mut visible, viewport);
            println!(
                "tick {tick:>3}: {} live, {checks} pair checks, {n} visible in {viewport:?}",
                table.live_count(),
            );
        }
    }
}
