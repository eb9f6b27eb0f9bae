// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Integer Newton-Raphson square root.

use crate::config::{FRAC_BITS, SQRT_MAX_ITERATIONS};
use crate::error::{FxpError, Result};
use crate::types::scalar::FixedScalar;
use crate::types::wide::WideInt128;

/// Square root, rounded down to the nearest raw unit.
///
/// Taking the root of a raw value also takes the root of the scale factor,
/// so the radicand is lifted by one more scale factor first.
pub fn sqrt(value: FixedScalar) -> Result<FixedScalar> {
    if value.is_negative() {
        tracing::debug!(raw = value.raw(), "sqrt of a negative value");
        return Err(FxpError::InvalidArgument("sqrt of a negative value"));
    }
    if value.is_zero() {
        return Ok(FixedScalar::ZERO);
    }

    let target = WideInt128::from_i64(value.raw()) << FRAC_BITS;
    Ok(FixedScalar::from_raw(isqrt_wide(target)))
}

/// `floor(sqrt(target))` for a radicand of at most 124 bits; zero for a
/// non-positive one.
///
/// The seed `2^ceil(bits / 2)` is never below the true root, and every
/// Newton step from above moves down toward it; the walk stops as soon as a
/// step would not decrease.
pub(crate) fn isqrt_wide(target: WideInt128) -> i64 {
    if target <= WideInt128::ZERO {
        return 0;
    }

    let mut guess: i64 = 1 << target.bit_length().div_ceil(2);
    for _ in 0..SQRT_MAX_ITERATIONS {
        let wide_guess = WideInt128::from_i64(guess);
        let next = ((wide_guess + target / wide_guess) >> 1).to_i64_saturating();
        if next >= guess {
            return guess;
        }
        guess = next;
    }

    tracing::warn!(%target, guess, "sqrt exhausted its iteration budget");
    guess
}
