// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dense cell table and active-id list helpers.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{Cell, CellFlags, CellId, CellType};

/// Fixed-capacity table of cell records addressed by [`CellId`].
///
/// Slot 0 is reserved so the zero handle stays a sentinel. The table never
/// reallocates after construction; creation walks a rotating cursor over the
/// slots, and removal zeroes a slot in full so a freed record is
/// indistinguishable from a never-used one.
#[derive(Clone, Debug)]
pub struct CellTable {
    cells: Vec<Cell>,
    cursor: u16,
}

impl CellTable {
    /// Create a table with `capacity` slots (including the reserved slot 0).
    ///
    /// `capacity` must be at least 2 and at most `u16::MAX as usize + 1`.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(
            (2..=u16::MAX as usize + 1).contains(&capacity),
            "capacity must fit 16-bit handles"
        );
        Self {
            cells: vec![Cell::default(); capacity],
            cursor: 1,
        }
    }

    /// Number of slots, including the reserved slot 0.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Shared access to a record.
    #[inline]
    pub fn get(&self, id: CellId) -> &Cell {
        debug_assert!(!id.is_none(), "sentinel handle dereferenced");
        &self.cells[id.idx()]
    }

    /// Exclusive access to a record.
    #[inline]
    pub fn get_mut(&mut self, id: CellId) -> &mut Cell {
        debug_assert!(!id.is_none(), "sentinel handle dereferenced");
        &mut self.cells[id.idx()]
    }

    /// Exclusive access to two distinct records at once.
    ///
    /// Needed by pair resolution, which moves both sides of a contact.
    #[inline]
    pub fn pair_mut(&mut self, a: CellId, b: CellId) -> (&mut Cell, &mut Cell) {
        debug_assert!(!a.is_none() && !b.is_none(), "sentinel handle dereferenced");
        debug_assert!(a != b, "pair_mut requires distinct handles");
        let (lo, hi) = if a.idx() < b.idx() { (a, b) } else { (b, a) };
        let (head, tail) = self.cells.split_at_mut(hi.idx());
        let (lo_cell, hi_cell) = (&mut head[lo.idx()], &mut tail[0]);
        if a.idx() < b.idx() {
            (lo_cell, hi_cell)
        } else {
            (hi_cell, lo_cell)
        }
    }

    /// Zero a slot in full.
    #[inline]
    pub fn clear_slot(&mut self, id: CellId) {
        debug_assert!(!id.is_none(), "sentinel handle dereferenced");
        self.cells[id.idx()] = Cell::default();
    }

    /// Create a cell in a free slot and return its handle.
    ///
    /// Probes from a rotating cursor so handles are not immediately reused.
    /// Returns the sentinel when the table is full.
    pub fn spawn(&mut self, ty: CellType, x: f32, y: f32, r: f32) -> CellId {
        let cap = self.cells.len();
        for _ in 1..cap {
            let slot = self.cursor as usize;
            self.cursor = if (self.cursor as usize) + 1 >= cap {
                1
            } else {
                self.cursor + 1
            };
            if !self.cells[slot].exists() {
                self.cells[slot] = Cell {
                    x,
                    y,
                    r,
                    ty,
                    flags: CellFlags::EXIST,
                    ..Cell::default()
                };
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "slots are bounded by the 16-bit handle space at construction"
                )]
                return CellId::new(slot as u16);
            }
        }
        CellId::NONE
    }

    /// Iterate the handles of live cells in slot order.
    pub fn iter_live(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().enumerate().skip(1).filter_map(|(i, c)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "slots are bounded by the 16-bit handle space at construction"
            )]
            let id = CellId::new(i as u16);
            c.exists().then_some(id)
        })
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.exists()).count()
    }

    /// Rebuild a sentinel-terminated active-id list into `out`.
    ///
    /// The list upholds the two contracts the integrator relies on:
    /// REMOVE-flagged cells lead the list (so the start-of-tick compaction
    /// frees them), and the remainder is ordered by `(type, handle)` so
    /// player cells of one owner form a contiguous run.
    pub fn collect_active(&self, out: &mut Vec<CellId>) {
        out.clear();
        for id in self.iter_live() {
            if self.cells[id.idx()].flags.contains(CellFlags::REMOVE) {
                out.push(id);
            }
        }
        let removed = out.len();
        for id in self.iter_live() {
            if !self.cells[id.idx()].flags.contains(CellFlags::REMOVE) {
                out.push(id);
            }
        }
        out[removed..].sort_unstable_by_key(|id| (self.cells[id.idx()].ty.0, id.raw()));
        out.push(CellId::NONE);
    }
}

/// Length of the live prefix of a sentinel-terminated id list.
#[inline]
pub fn active_len(list: &[CellId]) -> usize {
    list.iter().position(|id| id.is_none()).unwrap_or(list.len())
}
