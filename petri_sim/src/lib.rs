// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petri Sim: the tick-driven cell simulation core.
//!
//! ## Overview
//!
//! One tick runs the stages below, in order, to completion; the core is
//! single-threaded within a tick and no stage suspends:
//!
//! 1. [`integrate_tick`]: boost decay, position integration, wall
//!    bounce/clamp, aging, player radius decay, auto-split marking; frees
//!    the leading run of removed slots.
//! 2. [`move_player_cells`]: per-player merge-eligibility marking and
//!    mouse-seek motion. Player slices are disjoint, so hosts may run them
//!    in any order or in parallel.
//! 3. Quadtree rebuild over the live cells
//!    ([`petri_quadtree::QuadTree::rebuild`]).
//! 4. [`resolve_tick`]: the pairwise eat/collide pass over the rebuilt
//!    index.
//! 5. [`select_rect`] per viewer, and [`is_safe`] wherever the host probes
//!    spawn spots.
//!
//! Determinism comes from three fixed orders: active-list iteration, the
//! half-pair rule (larger radius acts, ties toward the lower handle), and
//! the quadtree's fixed child push order. Two runs over identical tables
//! with identical inputs produce identical tables.
//!
//! ## Inputs and configuration
//!
//! World bounds, viewports, and mouse targets enter as [`kurbo`] types and
//! are narrowed to the `f32` hot path at the boundary. Everything tunable
//! sits in [`SimConfig`]. Scoring stays host-side: the integrator asks for
//! a player's score through a plain callback when a new player run starts.
//!
//! ## Errors
//!
//! There are none: every operation is total over well-formed inputs.
//! Out-of-range handles and undersized scratch are programmer errors:
//! debug builds assert, release builds assume validity.
//!
//! This crate is `no_std` and uses `alloc`. Float math needs either the
//! `std` feature (default) or `libm`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("petri_sim requires either the `std` or `libm` feature for float math");

mod config;
mod integrate;
mod math;
mod player;
mod resolve;
mod util;
mod view;

pub use config::SimConfig;
pub use integrate::integrate_tick;
pub use player::move_player_cells;
pub use resolve::resolve_tick;
pub use view::{is_safe, select_rect};
