// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point operations on raw scaled values.

use crate::config::{FRAC_BITS, HALF_UNIT};
use crate::error::{FxpError, Result};
use crate::fxp::policy::OverflowPolicy;
use crate::types::wide::WideInt128;

/// Largest integer whose scaled form still fits in i64.
const MAX_INT: i64 = i64::MAX >> FRAC_BITS;
const MIN_INT: i64 = i64::MIN >> FRAC_BITS;

/// Scales a whole number.
pub fn from_int(value: i64, policy: OverflowPolicy) -> Result<i64> {
    if value > MAX_INT {
        return policy.overflowed(false, "from_int");
    }
    if value < MIN_INT {
        return policy.overflowed(true, "from_int");
    }
    Ok(value << FRAC_BITS)
}

/// Addition with sign-based overflow detection.
pub fn add(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    let sum = a.wrapping_add(b);
    if a >= 0 && b >= 0 && sum < 0 {
        return policy.overflowed(false, "add");
    }
    if a < 0 && b < 0 && sum >= 0 {
        return policy.overflowed(true, "add");
    }
    Ok(sum)
}

/// Subtraction with sign-based overflow detection.
pub fn sub(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    let diff = a.wrapping_sub(b);
    if a >= 0 && b < 0 && diff < 0 {
        return policy.overflowed(false, "sub");
    }
    if a < 0 && b >= 0 && diff >= 0 {
        return policy.overflowed(true, "sub");
    }
    Ok(diff)
}

pub fn neg(a: i64, policy: OverflowPolicy) -> Result<i64> {
    if a == i64::MIN {
        return policy.overflowed(false, "neg");
    }
    Ok(-a)
}

/// Product of two raw values, computed at double scale in a wide register,
/// rounded back to single scale.
pub fn mul(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    let product = WideInt128::mul_i64(a, b);
    policy.narrow(round_to_scale(product), "mul")
}

/// Quotient of two raw values. The dividend is lifted by one scale factor
/// before dividing, and the quotient is rounded to nearest (ties away from
/// zero).
pub fn div(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    if b == 0 {
        tracing::debug!(dividend = a, "fixed-point division by zero");
        return Err(FxpError::DivideByZero);
    }

    let numerator = WideInt128::from_i64(a) << FRAC_BITS;
    let divisor = WideInt128::from_i64(b);
    let (mut quotient, remainder) = numerator.checked_div_rem(divisor)?;

    // |remainder| < |divisor| <= 2^63, so doubling it cannot wrap.
    if (remainder.wrapping_abs() << 1) >= divisor.wrapping_abs() {
        quotient = if numerator.is_negative() != divisor.is_negative() {
            quotient - WideInt128::ONE
        } else {
            quotient + WideInt128::ONE
        };
    }

    policy.narrow(quotient, "div")
}

/// Drops one scale factor from a double-scale value, rounding to nearest
/// (add half a unit, then arithmetic shift).
pub fn round_to_scale(wide: WideInt128) -> WideInt128 {
    (wide + WideInt128::from_i64(HALF_UNIT)) >> FRAC_BITS
}

/// Sum of exact raw products, still at double scale. Dot and cross products
/// accumulate here and shift once at the end.
pub fn sum_of_products(pairs: &[(i64, i64)]) -> WideInt128 {
    pairs
        .iter()
        .fold(WideInt128::ZERO, |acc, &(a, b)| acc + WideInt128::mul_i64(a, b))
}
