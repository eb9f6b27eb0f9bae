// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use crate::fxp::policy::OverflowPolicy;

/// Number of fractional bits for the fixed-point representation (Q53.10).
pub const FRAC_BITS: u32 = 10;

/// Scaling factor for the fixed-point representation (1 << FRAC_BITS).
pub const SCALE: i64 = 1 << FRAC_BITS;

/// Half of one whole unit in raw form, added before a shift to round to nearest.
pub const HALF_UNIT: i64 = 1 << (FRAC_BITS - 1);

/// Fractional bits the built-in sine table was generated with.
pub const TABLE_FRAC_BITS: u32 = 10;

const _: () = assert!(FRAC_BITS >= TABLE_FRAC_BITS && FRAC_BITS <= 31);

/// Upper bound on Newton-Raphson steps taken by `sqrt`.
pub const SQRT_MAX_ITERATIONS: usize = 12;

/// Raw dot product (~0.999) at or above which slerp falls back to a
/// normalized lerp.
pub const SLERP_LERP_THRESHOLD: i64 = (SCALE * 999 + 500) / 1000;

/// Overflow behaviour applied by the infix operators.
#[cfg(not(feature = "overflow-fail"))]
pub const OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Saturate;

/// Overflow behaviour applied by the infix operators.
#[cfg(feature = "overflow-fail")]
pub const OVERFLOW_POLICY: OverflowPolicy = OverflowPolicy::Fail;
