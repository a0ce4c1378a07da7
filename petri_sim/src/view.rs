// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only world queries: viewport selection and safe-spawn probing.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use petri_cells::{CellId, CellTable};
use petri_quadtree::{Aabb, NodeStack, QuadTree, ROOT};

use crate::util::{point_to_f32, rect_to_aabb};

/// Collect the handles of cells visible in `view` into `out`.
///
/// A cell is emitted when its disc's AABB touches the rectangle, except for
/// pellets on their first tick of life: hosts spawn pellets in bulk and the
/// one-tick delay keeps them out of the frame their creation lands in.
///
/// `out` is cleared first; the emission order is the traversal order and
/// carries no other guarantee. Returns the number of visible cells.
pub fn select_rect(
    cells: &CellTable,
    tree: &QuadTree,
    stack: &mut NodeStack,
    out: &mut Vec<CellId>,
    view: Rect,
) -> usize {
    out.clear();
    let view = rect_to_aabb(view);

    stack.clear();
    stack.push(ROOT);
    while let Some(node) = stack.pop() {
        tree.push_overlapping_children(node, &view, stack);
        for &id in tree.bucket(node) {
            let c = cells.get(id);
            if Aabb::from_disc(c.x, c.y, c.r).overlaps(&view) && (!c.ty.is_pellet() || c.age > 1) {
                out.push(id);
            }
        }
    }
    out.len()
}

/// Probe whether a disc at `center` with radius `r` is a safe spawn spot.
///
/// Scans the quadtree with the candidate disc and counts every blocking-kind
/// cell whose distance is actually checked. Returns that count when nothing
/// overlaps; on the first overlapping player/virus/mother/dead cell it bails
/// out with the negated count, so a negative result means "unsafe" and its
/// magnitude is the work done to find out.
pub fn is_safe(
    cells: &CellTable,
    tree: &QuadTree,
    stack: &mut NodeStack,
    center: Point,
    r: f64,
) -> i32 {
    let (x, y) = point_to_f32(center);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "world coordinates are chosen by hosts to fit f32"
    )]
    let r = r as f32;
    let query = Aabb::from_disc(x, y, r);
    let mut counter = 0_i32;

    stack.clear();
    stack.push(ROOT);
    while let Some(node) = stack.pop() {
        tree.push_overlapping_children(node, &query, stack);
        for &id in tree.bucket(node) {
            let c = cells.get(id);
            if !c.ty.blocks_spawn() {
                continue;
            }
            let dx = c.x - x;
            let dy = c.y - y;
            counter += 1;
            if dx * dx + dy * dy < (r + c.r) * (r + c.r) {
                return -counter;
            }
        }
    }
    counter
}
