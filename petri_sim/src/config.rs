// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The simulation's tunable surface.

/// Tunable parameters consumed by the tick stages.
///
/// One flat struct: hosts build it once from their settings layer and hand it
/// to the stage functions by reference. The defaults describe a playable
/// mid-size world and exist mainly for demos and tests; real hosts overwrite
/// all of them.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Ticks before an ejected cell removes itself.
    pub eject_max_age: u32,
    /// Player radius that raises AUTOSPLIT; `0.0` disables the check.
    pub auto_size: f32,
    /// Radius floor below which player decay stops.
    pub decay_min: f32,
    /// Scale on the player radius decay rate.
    pub decay_multi: f32,
    /// Minimum age before same-player cells may merge, in ticks.
    pub no_merge_delay: u32,
    /// Flat term of the timed merge delay.
    pub merge_initial: f32,
    /// Radius-scaled term of the timed merge delay.
    pub merge_increase: f32,
    /// Enables the timed merge policies; `0` keeps the plain age gate.
    pub merge_time: u32,
    /// Selects the radius-scaled merge policy over the legacy flat-sum one.
    pub merge_version_new: bool,
    /// Scale on player seek speed.
    pub player_speed: f32,
    /// Minimum age before same-player cells collide instead of phasing
    /// through each other, in ticks.
    pub no_colli_delay: u32,
    /// Overlap divisor of the eat gate: eating requires
    /// `d < r_big - r_small / eat_overlap`.
    pub eat_overlap: f32,
    /// Radius-ratio gate for eating across types: the eater needs
    /// `r_big > r_small * eat_multi`.
    pub eat_multi: f32,
    /// Virus radius at which eating one more ejected cell pops the virus.
    pub virus_max_size: f32,
    /// Dead-cell tombstone lifetime, in ticks.
    pub remove_tick: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            eject_max_age: 1000,
            auto_size: 1500.0,
            decay_min: 100.0,
            decay_multi: 1.0,
            no_merge_delay: 650,
            merge_initial: 25.0,
            merge_increase: 0.02,
            merge_time: 750,
            merge_version_new: true,
            player_speed: 1.0,
            no_colli_delay: 13,
            eat_overlap: 3.0,
            eat_multi: 1.140_175_4,
            virus_max_size: 200.0,
            remove_tick: 100,
        }
    }
}
