// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise physical resolution: eat and collide.

use petri_cells::{Cell, CellFlags, CellId, CellTable};
use petri_quadtree::{Aabb, NodeStack, QuadTree, ROOT};

use crate::config::SimConfig;
use crate::math;

/// What the acting (larger) cell does to the other one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    None,
    Eat,
    Collide,
}

/// Pick the pair outcome from the two kinds and their state.
///
/// `c_flags` is the actor's flag snapshot from the top of its outer-loop
/// iteration: merge decisions are made against the state the actor entered
/// the scan with, not against bits gained mid-scan.
#[inline]
fn classify(cell: &Cell, c_flags: CellFlags, other: &Cell, cfg: &SimConfig) -> Action {
    if cell.ty.is_player() {
        if cell.ty == other.ty {
            if c_flags.intersects(CellFlags::MERGE) && other.flags.intersects(CellFlags::MERGE) {
                Action::Eat
            } else if cell.age > cfg.no_colli_delay && other.age > cfg.no_colli_delay {
                Action::Collide
            } else {
                Action::None
            }
        } else {
            Action::Eat
        }
    } else if cell.ty.is_virus() && other.ty.is_ejected() {
        Action::Eat
    } else if cell.ty.is_ejected() && other.ty.is_ejected() {
        Action::Collide
    } else if cell.ty.is_dead() {
        if other.ty.is_dead() {
            Action::Collide
        } else {
            Action::None
        }
    } else if cell.ty.is_mother() {
        Action::Eat
    } else {
        Action::None
    }
}

/// Resolve every physical interaction for one tick.
///
/// For each cell on the active list (skipping cells carrying any
/// SKIP_RESOLVE bit, and tombstoning expired dead cells), walks the quadtree
/// with the cell's disc and examines every candidate in the visited buckets.
/// The half-pair rule (the larger radius acts, ties broken toward the lower
/// handle) ensures each unordered pair is resolved at most once per tick.
///
/// Returns the number of exact distance checks performed, so hosts can watch
/// resolver load.
pub fn resolve_tick(
    cells: &mut CellTable,
    tree: &QuadTree,
    stack: &mut NodeStack,
    active: &[CellId],
    cfg: &SimConfig,
) -> u32 {
    let mut collisions = 0_u32;

    for &cid in active {
        if cid.is_none() {
            break;
        }

        let c_flags = cells.get(cid).flags;
        if c_flags.intersects(CellFlags::SKIP_RESOLVE) {
            continue;
        }

        if cells.get(cid).ty.is_dead() && cells.get(cid).age > cfg.remove_tick {
            let cell = cells.get_mut(cid);
            cell.flags.insert(CellFlags::REMOVE);
            cell.eaten_by = CellId::NONE;
            continue;
        }

        stack.clear();
        stack.push(ROOT);
        while let Some(node) = stack.pop() {
            // The query disc tracks the actor: pair resolution moves it and
            // eating grows it mid-walk.
            let c = cells.get(cid);
            tree.push_overlapping_children(node, &Aabb::from_disc(c.x, c.y, c.r), stack);

            for &oid in tree.bucket(node) {
                if oid == cid {
                    continue;
                }
                let c = cells.get(cid);
                let o = cells.get(oid);
                // Half-pair rule.
                if c.r < o.r {
                    continue;
                }
                if c.r == o.r && cid.raw() > oid.raw() {
                    continue;
                }
                if o.flags.intersects(CellFlags::SKIP_RESOLVE) {
                    continue;
                }

                let action = classify(c, c_flags, o, cfg);
                if action == Action::None {
                    continue;
                }

                let dx = o.x - c.x;
                let dy = o.y - c.y;
                let (r1, r2) = (c.r, o.r);
                // Coarse cull on the raw deltas. Deliberately sign-sensitive:
                // a candidate on the negative side always falls through to
                // the exact test.
                if dx > r1 + r2 || dy > r1 + r2 {
                    continue;
                }
                let d = math::sqrtf(dx * dx + dy * dy);
                collisions += 1;

                match action {
                    Action::Collide => collide(cells, cid, oid, dx, dy, d, r1, r2),
                    Action::Eat => eat(cells, cid, oid, d, r1, r2, cfg),
                    Action::None => unreachable!(),
                }
            }
        }
    }

    collisions
}

/// Push an overlapping pair apart, weighting displacement by mass.
fn collide(
    cells: &mut CellTable,
    cid: CellId,
    oid: CellId,
    mut dx: f32,
    mut dy: f32,
    mut d: f32,
    r1: f32,
    r2: f32,
) {
    let m = r1 + r2 - d;
    if m <= 0.0 {
        return;
    }
    if d == 0.0 {
        // Coincident centers: fabricate a separation axis.
        d = 1.0;
        dx = 1.0;
        dy = 0.0;
    } else {
        dx /= d;
        dy /= d;
    }

    let (cell, other) = cells.pair_mut(cid, oid);
    if d + r2 < r1 {
        other.flags.insert(CellFlags::INSIDE);
    }
    let a = r1 * r1;
    let b = r2 * r2;
    let a_m = b / (a + b);
    let b_m = a / (a + b);
    cell.x -= dx * m.min(r1) * a_m;
    cell.y -= dy * m.min(r1) * a_m;
    other.x += dx * m.min(r2) * b_m;
    other.y += dy * m.min(r2) * b_m;
    cell.flags.insert(CellFlags::UPDATE);
    other.flags.insert(CellFlags::UPDATE);
}

/// Let the actor consume the other cell if the eat gate passes.
fn eat(cells: &mut CellTable, cid: CellId, oid: CellId, d: f32, r1: f32, r2: f32, cfg: &SimConfig) {
    let (cell, other) = cells.pair_mut(cid, oid);

    let allowed = cell.ty == other.ty || cell.r > other.r * cfg.eat_multi;
    if !(allowed && d < cell.r - other.r / cfg.eat_overlap) {
        return;
    }

    // Area conservation: the eater's disc absorbs the other's.
    cell.r = math::sqrtf(r1 * r1 + r2 * r2);
    if other.ty.is_virus() || other.ty.is_mother() {
        other.eaten_by = CellId::NONE;
    } else {
        other.eaten_by = cid;
    }
    other.flags.insert(CellFlags::REMOVE);

    if cell.ty.is_player() && other.ty.is_ejected() {
        // Swallowed ejecta nudge the eater's impulse toward their own.
        let ratio = other.r / (cell.r + 100.0);
        cell.boost += ratio * 0.02 * other.boost;
        let bx = cell.boost_x + ratio * 0.02 * other.boost_x;
        let by = cell.boost_y + ratio * 0.02 * other.boost_y;
        let norm = math::sqrtf(bx * bx + by * by);
        cell.boost_x = bx / norm;
        cell.boost_y = by / norm;
    }
    if other.ty.is_virus() || other.ty.is_mother() {
        cell.flags.insert(CellFlags::POP);
    }
    if cell.ty.is_virus() && other.ty.is_ejected() && cell.r >= cfg.virus_max_size {
        // Full virus: request the split and launch it along the ejecta path.
        cell.flags.insert(CellFlags::POP);
        cell.boost_x = other.boost_x;
        cell.boost_y = other.boost_y;
    }
}
