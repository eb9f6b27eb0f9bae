// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Signed 128-bit two's-complement integer built from two 64-bit halves.
//!
//! Only used as an intermediate: products of two raw fixed-point values and
//! the sums of such products are carried here before being narrowed back to
//! 64 bits. `+`, `-`, `*`, negation and shifts wrap silently, exactly like a
//! hardware register. Division and remainder fail on a zero divisor;
//! `MIN / -1` wraps to `MIN` and `MIN % -1` is `0`.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use core::str::FromStr;

use crate::error::{arithmetic_panic, FxpError, Result};

const MASK_32: u64 = 0xFFFF_FFFF;

/// Value = `high * 2^64 + low`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideInt128 {
    high: i64,
    low: u64,
}

impl WideInt128 {
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const NEG_ONE: Self = Self::from_parts(-1, u64::MAX);
    pub const MIN: Self = Self::from_parts(i64::MIN, 0);
    pub const MAX: Self = Self::from_parts(i64::MAX, u64::MAX);

    pub const fn from_parts(high: i64, low: u64) -> Self {
        Self { high, low }
    }

    /// Sign-extends a 64-bit value.
    pub const fn from_i64(value: i64) -> Self {
        Self::from_parts(value >> 63, value as u64)
    }

    pub const fn from_u64(value: u64) -> Self {
        Self::from_parts(0, value)
    }

    /// Signed high half, carries the sign bit.
    pub const fn high(self) -> i64 {
        self.high
    }

    pub const fn low(self) -> u64 {
        self.low
    }

    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// -1, 0 or 1.
    pub const fn signum(self) -> i32 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let high = self.high.wrapping_add(rhs.high).wrapping_add(carry as i64);
        Self::from_parts(high, low)
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let high = self.high.wrapping_sub(rhs.high).wrapping_sub(borrow as i64);
        Self::from_parts(high, low)
    }

    /// Two's complement negation; `MIN` maps to itself.
    pub const fn wrapping_neg(self) -> Self {
        Self::from_parts(!self.high, !self.low).wrapping_add(Self::ONE)
    }

    /// `MIN` maps to itself.
    pub const fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Schoolbook product modulo 2^128.
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let (carry_high, low) = mul_u64_full(self.low, rhs.low);
        // Cross terms only land in the high half; anything above bit 127 is discarded.
        let cross = (self.high as u64)
            .wrapping_mul(rhs.low)
            .wrapping_add(self.low.wrapping_mul(rhs.high as u64));
        Self::from_parts(carry_high.wrapping_add(cross) as i64, low)
    }

    /// Exact product of two 64-bit values. Never overflows.
    pub const fn mul_i64(a: i64, b: i64) -> Self {
        Self::from_i64(a).wrapping_mul(Self::from_i64(b))
    }

    /// Quotient truncated toward zero and remainder carrying the dividend's sign.
    pub fn checked_div_rem(self, rhs: Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "wide division by zero");
            return Err(FxpError::DivideByZero);
        }

        let (quotient, remainder) =
            div_rem_magnitude(Magnitude::of(self), Magnitude::of(rhs));
        let mut quotient = quotient.into_wide();
        let mut remainder = remainder.into_wide();
        if self.is_negative() != rhs.is_negative() {
            quotient = quotient.wrapping_neg();
        }
        if self.is_negative() {
            remainder = remainder.wrapping_neg();
        }
        Ok((quotient, remainder))
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.checked_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    pub fn checked_rem(self, rhs: Self) -> Result<Self> {
        self.checked_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Logical left shift. Shifts of 128 or more clear every bit.
    pub const fn shift_left(self, shift: u32) -> Self {
        let high = self.high as u64;
        match shift {
            0 => self,
            1..=63 => Self::from_parts(
                ((high << shift) | (self.low >> (64 - shift))) as i64,
                self.low << shift,
            ),
            64 => Self::from_parts(self.low as i64, 0),
            65..=127 => Self::from_parts((self.low << (shift - 64)) as i64, 0),
            _ => Self::ZERO,
        }
    }

    /// Arithmetic right shift, sign-extending from the high half. Shifts of
    /// 128 or more leave only the sign fill.
    pub const fn shift_right(self, shift: u32) -> Self {
        let fill = self.high >> 63;
        match shift {
            0 => self,
            1..=63 => Self::from_parts(
                self.high >> shift,
                (self.low >> shift) | ((self.high as u64) << (64 - shift)),
            ),
            64 => Self::from_parts(fill, self.high as u64),
            65..=127 => Self::from_parts(fill, (self.high >> (shift - 64)) as u64),
            _ => Self::from_parts(fill, fill as u64),
        }
    }

    /// Number of bits needed to write the value in binary; 0 for zero and
    /// 128 for any negative value (the sign bit is set).
    pub const fn bit_length(self) -> u32 {
        if self.is_negative() {
            128
        } else if self.high != 0 {
            64 + bit_length_u64(self.high as u64)
        } else {
            bit_length_u64(self.low)
        }
    }

    pub const fn fits_i64(self) -> bool {
        self.high == (self.low as i64) >> 63
    }

    /// Clamps to the i64 range.
    pub const fn to_i64_saturating(self) -> i64 {
        if self.fits_i64() {
            self.low as i64
        } else if self.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    }
}

/// 64x64 -> 128 unsigned product from four 32-bit partial products.
/// Returns `(high, low)`.
const fn mul_u64_full(a: u64, b: u64) -> (u64, u64) {
    let (a_lo, a_hi) = (a & MASK_32, a >> 32);
    let (b_lo, b_hi) = (b & MASK_32, b >> 32);

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // Middle column: three 32-bit terms, the sum fits in 34 bits.
    let middle = (lo_lo >> 32) + (lo_hi & MASK_32) + (hi_lo & MASK_32);
    let low = (middle << 32) | (lo_lo & MASK_32);
    let high = hi_hi + (lo_hi >> 32) + (hi_lo >> 32) + (middle >> 32);
    (high, low)
}

/// Binary search over power-of-two bit ranges.
const fn bit_length_u64(mut value: u64) -> u32 {
    if value == 0 {
        return 0;
    }
    let mut position = 0;
    let mut step = 32;
    while step > 0 {
        if value >> step != 0 {
            position += step;
            value >>= step;
        }
        step >>= 1;
    }
    position + 1
}

/// Unsigned view used by long division. The magnitude of `MIN` is 2^127,
/// which still fits.
#[derive(Clone, Copy)]
struct Magnitude {
    high: u64,
    low: u64,
}

impl Magnitude {
    const ZERO: Self = Self { high: 0, low: 0 };

    fn of(value: WideInt128) -> Self {
        let abs = value.wrapping_abs();
        Self { high: abs.high as u64, low: abs.low }
    }

    fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    fn shl1(self, bit_in: u64) -> Self {
        Self {
            high: (self.high << 1) | (self.low >> 63),
            low: (self.low << 1) | bit_in,
        }
    }

    fn top_bit(self) -> u64 {
        self.high >> 63
    }

    fn cmp_unsigned(self, other: Self) -> Ordering {
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }

    fn sub(self, other: Self) -> Self {
        let (low, borrow) = self.low.overflowing_sub(other.low);
        Self {
            high: self.high.wrapping_sub(other.high).wrapping_sub(borrow as u64),
            low,
        }
    }

    fn into_wide(self) -> WideInt128 {
        WideInt128::from_parts(self.high as i64, self.low)
    }
}

/// Restoring shift-and-subtract division, one quotient bit per iteration.
/// `divisor` is non-zero and at most 2^127, so the running remainder never
/// needs more than 128 bits.
fn div_rem_magnitude(dividend: Magnitude, divisor: Magnitude) -> (Magnitude, Magnitude) {
    let mut quotient = Magnitude::ZERO;
    let mut remainder = Magnitude::ZERO;
    let mut rest = dividend;

    for _ in 0..128 {
        remainder = remainder.shl1(rest.top_bit());
        rest = rest.shl1(0);
        quotient = quotient.shl1(0);
        if remainder.cmp_unsigned(divisor) != Ordering::Less {
            remainder = remainder.sub(divisor);
            quotient.low |= 1;
        }
    }

    (quotient, remainder)
}

impl Ord for WideInt128 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Signed on the high half, unsigned on the low half.
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }
}

impl PartialOrd for WideInt128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for WideInt128 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for WideInt128 {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u64> for WideInt128 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl TryFrom<WideInt128> for i64 {
    type Error = FxpError;

    fn try_from(value: WideInt128) -> Result<i64> {
        if value.fits_i64() {
            Ok(value.low as i64)
        } else {
            Err(FxpError::Overflow { op: "narrow" })
        }
    }
}

impl Add for WideInt128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for WideInt128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Neg for WideInt128 {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl Mul for WideInt128 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for WideInt128 {
    type Output = Self;

    #[track_caller]
    fn div(self, rhs: Self) -> Self {
        self.checked_div(rhs).unwrap_or_else(|err| arithmetic_panic(err))
    }
}

impl Rem for WideInt128 {
    type Output = Self;

    #[track_caller]
    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(rhs).unwrap_or_else(|err| arithmetic_panic(err))
    }
}

impl Shl<u32> for WideInt128 {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        self.shift_left(shift)
    }
}

impl Shr<u32> for WideInt128 {
    type Output = Self;

    fn shr(self, shift: u32) -> Self {
        self.shift_right(shift)
    }
}

impl BitAnd for WideInt128 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_parts(self.high & rhs.high, self.low & rhs.low)
    }
}

impl BitOr for WideInt128 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_parts(self.high | rhs.high, self.low | rhs.low)
    }
}

impl BitXor for WideInt128 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_parts(self.high ^ rhs.high, self.low ^ rhs.low)
    }
}

impl Not for WideInt128 {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_parts(!self.high, !self.low)
    }
}

impl fmt::Display for WideInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 2^127 has 39 decimal digits.
        let mut digits = [0u8; 39];
        let mut start = digits.len();
        let ten = Magnitude { high: 0, low: 10 };
        let mut rest = Magnitude::of(*self);

        loop {
            let (quotient, remainder) = div_rem_magnitude(rest, ten);
            start -= 1;
            digits[start] = b'0' + remainder.low as u8;
            rest = quotient;
            if rest.is_zero() {
                break;
            }
        }

        let text = core::str::from_utf8(&digits[start..]).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", text)
    }
}

impl fmt::Debug for WideInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideInt128({})", self)
    }
}

impl FromStr for WideInt128 {
    type Err = FxpError;

    /// Optional sign followed by ASCII digits. Values past the 128-bit range
    /// wrap, like every other operation on this type.
    fn from_str(text: &str) -> Result<Self> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() {
            return Err(FxpError::Parse);
        }

        let ten = Self::from_i64(10);
        let mut value = Self::ZERO;
        for byte in digits.bytes() {
            if !byte.is_ascii_digit() {
                return Err(FxpError::Parse);
            }
            value = value
                .wrapping_mul(ten)
                .wrapping_add(Self::from_i64((byte - b'0') as i64));
        }

        Ok(if negative { value.wrapping_neg() } else { value })
    }
}
