// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Wrapper for a raw i64 representing a Q53.10 fixed-point scalar.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::config::{FRAC_BITS, HALF_UNIT, OVERFLOW_POLICY, SCALE};
use crate::error::{arithmetic_panic, Result};
use crate::fxp::convert;
use crate::fxp::ops;
use crate::fxp::policy::OverflowPolicy;
use crate::types::wide::WideInt128;

/// Signed fixed-point number. Real value = `raw / SCALE`.
///
/// Equality, ordering and hashing are those of the raw value, and the raw
/// value is also the serialized form, so two peers compare or fingerprint a
/// scalar by its `i64` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct FixedScalar(i64);

impl FixedScalar {
    pub const ZERO: FixedScalar = FixedScalar(0);
    pub const ONE: FixedScalar = FixedScalar(SCALE);
    pub const NEG_ONE: FixedScalar = FixedScalar(-SCALE);
    pub const HALF: FixedScalar = FixedScalar(HALF_UNIT);
    pub const TWO: FixedScalar = FixedScalar(2 * SCALE);
    /// Saturation sentinel for positive overflow.
    pub const MAX: FixedScalar = FixedScalar(i64::MAX);
    /// Saturation sentinel for negative overflow.
    pub const MIN: FixedScalar = FixedScalar(i64::MIN);
    /// One unit of least precision.
    pub const EPSILON: FixedScalar = FixedScalar(1);

    /// Wraps an already scaled value.
    pub const fn from_raw(raw: i64) -> Self {
        FixedScalar(raw)
    }

    /// The scaled integer; this is the persisted and transmitted form.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Saturates outside `[MIN_INT, MAX_INT]`.
    pub fn from_int(value: i64) -> Self {
        settle(ops::from_int(value, OverflowPolicy::Saturate))
    }

    pub fn try_from_int(value: i64) -> Result<Self> {
        ops::from_int(value, OverflowPolicy::Fail).map(FixedScalar)
    }

    /// Rounds half to even, saturates out of range, NaN becomes zero.
    pub fn from_f32(value: f32) -> Self {
        FixedScalar(convert::raw_from_f32(value))
    }

    /// Rounds half to even, saturates out of range, NaN becomes zero.
    pub fn from_f64(value: f64) -> Self {
        FixedScalar(convert::raw_from_f64(value))
    }

    /// Truncates toward zero.
    pub const fn to_int(self) -> i64 {
        self.0 / SCALE
    }

    pub fn to_f32(self) -> f32 {
        convert::raw_to_f32(self.0)
    }

    pub fn to_f64(self) -> f64 {
        convert::raw_to_f64(self.0)
    }

    pub fn add_with(self, rhs: Self, policy: OverflowPolicy) -> Result<Self> {
        ops::add(self.0, rhs.0, policy).map(FixedScalar)
    }

    pub fn sub_with(self, rhs: Self, policy: OverflowPolicy) -> Result<Self> {
        ops::sub(self.0, rhs.0, policy).map(FixedScalar)
    }

    pub fn mul_with(self, rhs: Self, policy: OverflowPolicy) -> Result<Self> {
        ops::mul(self.0, rhs.0, policy).map(FixedScalar)
    }

    /// Fails with `DivideByZero` whatever the policy.
    pub fn div_with(self, rhs: Self, policy: OverflowPolicy) -> Result<Self> {
        ops::div(self.0, rhs.0, policy).map(FixedScalar)
    }

    pub fn try_add(self, rhs: Self) -> Result<Self> {
        self.add_with(rhs, OverflowPolicy::Fail)
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.sub_with(rhs, OverflowPolicy::Fail)
    }

    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        self.mul_with(rhs, OverflowPolicy::Fail)
    }

    pub fn try_div(self, rhs: Self) -> Result<Self> {
        self.div_with(rhs, OverflowPolicy::Fail)
    }

    /// Division under the configured overflow policy; only a zero divisor
    /// (or an overflow under `Fail`) is an error.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.div_with(rhs, OVERFLOW_POLICY)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        settle(ops::add(self.0, rhs.0, OverflowPolicy::Saturate))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        settle(ops::sub(self.0, rhs.0, OverflowPolicy::Saturate))
    }

    pub fn saturating_mul(self, rhs: Self) -> Self {
        settle(ops::mul(self.0, rhs.0, OverflowPolicy::Saturate))
    }

    pub fn saturating_div(self, rhs: Self) -> Result<Self> {
        self.div_with(rhs, OverflowPolicy::Saturate)
    }

    /// Branchless absolute value; `MIN` saturates to `MAX`.
    pub const fn abs(self) -> Self {
        if self.0 == i64::MIN {
            return Self::MAX;
        }
        let mask = self.0 >> 63;
        FixedScalar((self.0 + mask) ^ mask)
    }

    /// Unlike `Ord::clamp` this never panics; crossed bounds yield one of the
    /// bounds.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    pub const fn signum(self) -> Self {
        if self.0 > 0 {
            Self::ONE
        } else if self.0 < 0 {
            Self::NEG_ONE
        } else {
            Self::ZERO
        }
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Fails with `InvalidArgument` for negative input.
    pub fn sqrt(self) -> Result<Self> {
        crate::math::sqrt(self)
    }

    /// Narrows a single-scale wide value under the configured policy.
    #[track_caller]
    pub(crate) fn from_wide(value: WideInt128, op: &'static str) -> Self {
        settle(OVERFLOW_POLICY.narrow(value, op))
    }

    /// Narrows a double-scale sum of products with one final shift.
    #[track_caller]
    pub(crate) fn from_wide_product(value: WideInt128, op: &'static str) -> Self {
        Self::from_wide(value >> FRAC_BITS, op)
    }
}

/// Infix results: saturate or abort, never a silent wrap.
#[track_caller]
fn settle(result: Result<i64>) -> FixedScalar {
    match result {
        Ok(raw) => FixedScalar(raw),
        Err(err) => arithmetic_panic(err),
    }
}

impl From<i32> for FixedScalar {
    fn from(value: i32) -> Self {
        FixedScalar((value as i64) << FRAC_BITS)
    }
}

impl Add for FixedScalar {
    type Output = FixedScalar;

    #[track_caller]
    fn add(self, rhs: Self) -> Self {
        settle(ops::add(self.0, rhs.0, OVERFLOW_POLICY))
    }
}

impl Sub for FixedScalar {
    type Output = FixedScalar;

    #[track_caller]
    fn sub(self, rhs: Self) -> Self {
        settle(ops::sub(self.0, rhs.0, OVERFLOW_POLICY))
    }
}

impl Mul for FixedScalar {
    type Output = FixedScalar;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self {
        settle(ops::mul(self.0, rhs.0, OVERFLOW_POLICY))
    }
}

impl Div for FixedScalar {
    type Output = FixedScalar;

    /// Panics on a zero divisor, like integer division.
    #[track_caller]
    fn div(self, rhs: Self) -> Self {
        settle(ops::div(self.0, rhs.0, OVERFLOW_POLICY))
    }
}

impl Neg for FixedScalar {
    type Output = FixedScalar;

    #[track_caller]
    fn neg(self) -> Self {
        settle(ops::neg(self.0, OVERFLOW_POLICY))
    }
}

impl fmt::Display for FixedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}
