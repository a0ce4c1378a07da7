// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the Kurbo API seam and the `f32` hot path.

use kurbo::{Point, Rect};
use petri_quadtree::Aabb;

/// Narrow a world/viewport rectangle to query geometry.
#[allow(
    clippy::cast_possible_truncation,
    reason = "world coordinates are chosen by hosts to fit f32"
)]
#[inline]
pub(crate) fn rect_to_aabb(rect: Rect) -> Aabb {
    Aabb::new(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
}

/// Narrow a point to hot-path coordinates.
#[allow(
    clippy::cast_possible_truncation,
    reason = "world coordinates are chosen by hosts to fit f32"
)]
#[inline]
pub(crate) fn point_to_f32(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}
