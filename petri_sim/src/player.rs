// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Player steering and merge eligibility.

use kurbo::Point;
use petri_cells::{CellFlags, CellId, CellTable};

use crate::config::SimConfig;
use crate::math;
use crate::util::point_to_f32;

/// Mark merge-eligible cells and steer one player's cells toward the mouse.
///
/// `ids` is the player's own slice of handles; slices of distinct players are
/// disjoint, so hosts may run this per player in any order (or in parallel)
/// without changing the outcome.
///
/// Merge eligibility has three policies, selected by the config:
///
/// - `merge_time == 0`: a plain age gate, `age > no_merge_delay`.
/// - radius-scaled (`merge_version_new`): the delay grows with the cell,
///   `age > merge_initial` and `age > max(round(25 * r * merge_increase),
///   no_merge_delay)`.
/// - legacy flat sum: `age > no_merge_delay` and
///   `age > merge_initial + merge_increase`, radius-independent.
///
/// Motion seeks the mouse at `88 * r^-0.4396754 * player_speed`, never
/// overshooting the target point within one step.
pub fn move_player_cells(
    cells: &mut CellTable,
    ids: &[CellId],
    mouse: Point,
    dt: f32,
    cfg: &SimConfig,
) {
    if ids.is_empty() {
        return;
    }

    if cfg.merge_time > 0 {
        if cfg.merge_version_new {
            for &id in ids {
                let cell = cells.get_mut(id);
                let increase = math::roundf(25.0 * cell.r * cfg.merge_increase);
                let time = increase.max(cfg.no_merge_delay as f32);
                if cell.age as f32 > cfg.merge_initial && cell.age as f32 > time {
                    cell.flags.insert(CellFlags::MERGE);
                }
            }
        } else {
            for &id in ids {
                let cell = cells.get_mut(id);
                let time = cfg.merge_initial + cfg.merge_increase;
                if cell.age > cfg.no_merge_delay && cell.age as f32 > time {
                    cell.flags.insert(CellFlags::MERGE);
                }
            }
        }
    } else {
        for &id in ids {
            let cell = cells.get_mut(id);
            if cell.age > cfg.no_merge_delay {
                cell.flags.insert(CellFlags::MERGE);
            }
        }
    }

    let (mx, my) = point_to_f32(mouse);
    for &id in ids {
        let cell = cells.get_mut(id);
        let dx = mx - cell.x;
        let dy = my - cell.y;
        let d = math::sqrtf(dx * dx + dy * dy);
        if d < 1.0 {
            continue;
        }
        let (dx, dy) = (dx / d, dy / d);
        let speed = 88.0 * math::powf(cell.r, -0.439_675_4) * cfg.player_speed;
        let step = speed.min(d) * dt;
        cell.x += dx * step;
        cell.y += dy * step;
    }
}
