// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick kinematics and lifecycle integration.

use kurbo::Rect;
use petri_cells::{CellFlags, CellId, CellTable, CellType};

use crate::config::SimConfig;
use crate::util::rect_to_aabb;

/// Advance every cell on the active list by one tick.
///
/// Walks the list in order: frees the leading run of REMOVE-flagged slots,
/// then for each remaining cell bumps its age, clears the tick-local flags,
/// applies boost motion, applies player radius decay and the auto-split
/// check, and clamps the disc into the world box (reflecting the boost
/// direction while an impulse is active).
///
/// `score` is consulted once per contiguous run of cells sharing a player
/// type, so active lists must keep one player's cells adjacent. The list
/// itself is not modified; freed slots are zeroed in the table and the list
/// is expected to be rebuilt before the next tick.
pub fn integrate_tick(
    cells: &mut CellTable,
    active: &[CellId],
    bounds: Rect,
    dt_multi: f32,
    score: &dyn Fn(u8) -> f32,
    cfg: &SimConfig,
) {
    let world = rect_to_aabb(bounds);
    let mut i = 0_usize;

    // Free the leading run of removed slots.
    loop {
        let Some(&id) = active.get(i) else { return };
        if id.is_none() {
            return;
        }
        if !cells.get(id).flags.contains(CellFlags::REMOVE) {
            break;
        }
        cells.clear_slot(id);
        i += 1;
    }

    let mut curr_type = CellType(0);
    let mut curr_multi = 1.0_f32;

    while let Some(&id) = active.get(i) {
        if id.is_none() {
            break;
        }
        i += 1;
        let cell = cells.get_mut(id);

        cell.age += 1;
        cell.flags &= CellFlags::PERSIST;

        if cell.ty.is_ejected() && cell.age > cfg.eject_max_age {
            cell.flags.insert(CellFlags::REMOVE);
        }

        if cell.boost > 1.0 {
            let db = cell.boost / 9.0 * dt_multi;
            cell.x += cell.boost_x * db;
            cell.y += cell.boost_y * db;
            cell.flags.insert(CellFlags::UPDATE);
            cell.boost -= db;
        }

        if cell.ty.is_player() {
            if curr_type != cell.ty {
                curr_type = cell.ty;
                let s = score(curr_type.0);
                curr_multi = ((s - 0.01 * cfg.decay_min * cfg.decay_min) * 5e-5).max(1.0);
            }
            if cell.r > cfg.decay_min {
                cell.r -= curr_multi * cell.r * cfg.decay_multi * dt_multi / 50.0;
                cell.flags.insert(CellFlags::UPDATE);
            }
            if cfg.auto_size > 0.0 && cell.r > cfg.auto_size {
                cell.flags.insert(CellFlags::AUTOSPLIT);
            }
        }

        // Clamp into the box; an active impulse reflects off the wall it hit.
        let bounce = cell.boost > 1.0;
        let hr = cell.r / 2.0;
        if cell.x < world.min_x + hr {
            cell.x = world.min_x + hr;
            cell.flags.insert(CellFlags::UPDATE);
            if bounce {
                cell.boost_x = -cell.boost_x;
            }
        }
        if cell.x > world.max_x - hr {
            cell.x = world.max_x - hr;
            cell.flags.insert(CellFlags::UPDATE);
            if bounce {
                cell.boost_x = -cell.boost_x;
            }
        }
        if cell.y > world.max_y - hr {
            cell.y = world.max_y - hr;
            cell.flags.insert(CellFlags::UPDATE);
            if bounce {
                cell.boost_y = -cell.boost_y;
            }
        }
        if cell.y < world.min_y + hr {
            cell.y = world.min_y + hr;
            cell.flags.insert(CellFlags::UPDATE);
            if bounce {
                cell.boost_y = -cell.boost_y;
            }
        }
    }
}
