// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri Quadtree: a point-region quadtree over cell discs.
//!
//! The simulation rebuilds this index once per tick over the live cells and
//! then queries it under motion: the pairwise resolver walks it with each
//! cell's disc, the viewport selector with a rectangle, and the safe-spawn
//! probe with a candidate disc. All three use the same explicit depth-first
//! walk driven by a caller-supplied [`NodeStack`], so the query paths never
//! allocate and traversal order is fixed.
//!
//! - [`QuadTree`]: node arena with per-node id buckets;
//!   [`QuadTree::rebuild`] re-indexes an active-id list.
//! - [`NodeStack`]: fixed-capacity traversal scratch, sized once per tree.
//! - [`Aabb`]: plain `f32` query geometry.
//!
//! # Example
//!
//! ```rust
//! use petri_cells::{CellTable, CellType};
//! use petri_quadtree::{Aabb, NodeStack, QuadTree, ROOT};
//!
//! let mut cells = CellTable::with_capacity(64);
//! let a = cells.spawn(CellType::PELLET, -20.0, -20.0, 2.0);
//! let b = cells.spawn(CellType::PELLET, 30.0, 30.0, 2.0);
//! let active = [a, b, petri_cells::CellId::NONE];
//!
//! let mut tree = QuadTree::new(Aabb::new(-50.0, -50.0, 50.0, 50.0), 8, 8);
//! tree.rebuild(&cells, &active);
//!
//! // Collect everything a disc around `a` could touch.
//! let mut stack = NodeStack::for_tree(&tree);
//! let query = Aabb::from_disc(-20.0, -20.0, 5.0);
//! let mut candidates = Vec::new();
//! stack.push(ROOT);
//! while let Some(n) = stack.pop() {
//!     tree.push_overlapping_children(n, &query, &mut stack);
//!     candidates.extend_from_slice(tree.bucket(n));
//! }
//! assert!(candidates.contains(&a));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod stack;
mod tree;
mod types;

pub use stack::NodeStack;
pub use tree::{QuadTree, ROOT};
pub use types::Aabb;
