// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-place heap sort of id lists by cell radius.

use crate::table::CellTable;
use crate::types::CellId;

/// Sort `ids` in place by ascending radius, ties broken by handle value.
///
/// Classic binary-heap sort: build a max-heap, then repeatedly swap the root
/// behind the shrinking heap. O(n log n), no allocation, and deterministic
/// for any permutation of the same ids, which is what the consumers (size-
/// ordered eating within one bucket group) rely on.
pub fn sort_by_radius(table: &CellTable, ids: &mut [CellId]) {
    let n = ids.len();
    if n < 2 {
        return;
    }
    for start in (0..n / 2).rev() {
        sift_down(table, ids, start, n);
    }
    for end in (1..n).rev() {
        ids.swap(0, end);
        sift_down(table, ids, 0, end);
    }
}

/// Strict `(radius, handle)` ordering. Radii are assumed NaN-free.
#[inline]
fn less(table: &CellTable, a: CellId, b: CellId) -> bool {
    let (ra, rb) = (table.get(a).r, table.get(b).r);
    ra < rb || (ra == rb && a.raw() < b.raw())
}

fn sift_down(table: &CellTable, ids: &mut [CellId], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && less(table, ids[child], ids[child + 1]) {
            child += 1;
        }
        if less(table, ids[root], ids[child]) {
            ids.swap(root, child);
            root = child;
        } else {
            return;
        }
    }
}
