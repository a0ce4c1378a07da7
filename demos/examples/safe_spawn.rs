// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe-spawn probing over an occupied arena.
//!
//! Scatters players and viruses, then probes a coarse grid of candidate
//! spawn discs and prints the resulting safety map.
//!
//! Run:
//! - `cargo run -p petri_demos --example safe_spawn`

use kurbo::Point;
use petri_cells::{CellId, CellTable, CellType};
use petri_quadtree::{Aabb, NodeStack, QuadTree};
use petri_sim::is_safe;

const WORLD: f32 = 800.0;
const SPAWN_R: f64 = 40.0;

fn main() {
    let mut table = CellTable::with_capacity(1024);
    for (player, &(x, y, r)) in [
        (-400.0, -400.0, 150.0),
        (-100.0, 250.0, 220.0),
        (300.0, -150.0, 180.0),
        (500.0, 500.0, 120.0),
    ]
    .iter()
    .enumerate()
    {
        table.spawn(CellType::player(player as u8), x, y, r);
    }
    for k in 0..6 {
        table.spawn(CellType::VIRUS, -600.0 + 240.0 * k as f32, 600.0 - 200.0 * k as f32, 70.0);
    }
    // Pellets never block a spawn.
    for k in 0..200 {
        let x = -780.0 + ((k * 97) % 1560) as f32;
        let y = -780.0 + ((k * 41) % 1560) as f32;
        table.spawn(CellType::PELLET, x, y, 3.0);
    }

    let mut tree = QuadTree::new(Aabb::new(-WORLD, -WORLD, WORLD, WORLD), 8, 10);
    let mut active: Vec<CellId> = table.iter_live().collect();
    active.push(CellId::NONE);
    tree.rebuild(&table, &active);
    let mut stack = NodeStack::for_tree(&tree);

    let mut free = 0_u32;
    println!("safety map ('.' safe, '#' blocked), probe radius {SPAWN_R}:");
    for row in 0..16 {
        let y = f64::from(WORLD) - 100.0 * (f64::from(row) + 0.5);
        let mut line = String::new();
        for col in 0..16 {
            let x = -f64::from(WORLD) + 100.0 * (f64::from(col) + 0.5);
            let verdict = is_safe(&table, &tree, &mut stack, Point::new(x, y), SPAWN_R);
            if verdict >= 0 {
                free += 1;
                line.push('.');
            } else {
                line.push('#');
            }
        }
        println!("  {line}");
    }
    println!("{free}/256 candidate discs are safe");
}
