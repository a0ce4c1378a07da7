// Copyright 2025 the Petri Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float math routed through `std` intrinsics or `libm`, by feature.

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn sqrtf(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
pub(crate) fn sqrtf(x: f32) -> f32 {
    libm::sqrtf(x)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn powf(x: f32, y: f32) -> f32 {
    x.powf(y)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
pub(crate) fn powf(x: f32, y: f32) -> f32 {
    libm::powf(x, y)
}

#[cfg(feature = "std")]
#[inline(always)]
pub(crate) fn roundf(x: f32) -> f32 {
    x.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline(always)]
pub(crate) fn roundf(x: f32) -> f32 {
    libm::roundf(x)
}
