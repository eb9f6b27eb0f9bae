// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point 2D vector.

use core::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::fxp::ops::sum_of_products;
use crate::math;
use crate::types::scalar::FixedScalar;
use crate::types::wide::WideInt128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVector2 {
    pub x: FixedScalar,
    pub y: FixedScalar,
}

impl FixedVector2 {
    pub const ZERO: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO);
    pub const ONE: Self = Self::new(FixedScalar::ONE, FixedScalar::ONE);
    pub const UP: Self = Self::new(FixedScalar::ZERO, FixedScalar::ONE);
    pub const DOWN: Self = Self::new(FixedScalar::ZERO, FixedScalar::NEG_ONE);
    pub const LEFT: Self = Self::new(FixedScalar::NEG_ONE, FixedScalar::ZERO);
    pub const RIGHT: Self = Self::new(FixedScalar::ONE, FixedScalar::ZERO);

    pub const fn new(x: FixedScalar, y: FixedScalar) -> Self {
        Self { x, y }
    }

    pub fn from_int(x: i64, y: i64) -> Self {
        Self::new(FixedScalar::from_int(x), FixedScalar::from_int(y))
    }

    /// Authoring helper; see `FixedScalar::from_f32`.
    pub fn from_f32(x: f32, y: f32) -> Self {
        Self::new(FixedScalar::from_f32(x), FixedScalar::from_f32(y))
    }

    /// Both products are kept exact and summed before the single shift back
    /// to scale, so rounding is paid once instead of per term.
    pub fn dot(self, other: Self) -> FixedScalar {
        let sum = sum_of_products(&[
            (self.x.raw(), other.x.raw()),
            (self.y.raw(), other.y.raw()),
        ]);
        FixedScalar::from_wide_product(sum, "dot")
    }

    /// Z component of the 3D cross product: `x1*y2 - y1*x2`.
    pub fn cross(self, other: Self) -> FixedScalar {
        let wide = WideInt128::mul_i64(self.x.raw(), other.y.raw())
            - WideInt128::mul_i64(self.y.raw(), other.x.raw());
        FixedScalar::from_wide_product(wide, "cross")
    }

    /// Cheap length comparison, no root taken.
    pub fn sqr_magnitude(self) -> FixedScalar {
        self.dot(self)
    }

    pub fn magnitude(self) -> FixedScalar {
        // A sum of squares is never negative.
        math::sqrt(self.sqr_magnitude()).unwrap_or(FixedScalar::ZERO)
    }

    pub fn distance_sqr(self, other: Self) -> FixedScalar {
        (other - self).sqr_magnitude()
    }

    /// Unit vector in the same direction, or `ZERO` for a vector too short
    /// to have a representable squared length. One division, two multiplies;
    /// the inverse is held at fixed precision, so accuracy falls off as the
    /// magnitude grows.
    pub fn normalized(self) -> Self {
        let sqr_magnitude = self.sqr_magnitude();
        if sqr_magnitude.raw() <= 0 {
            return Self::ZERO;
        }

        let magnitude = math::sqrt(sqr_magnitude).unwrap_or(FixedScalar::ZERO);
        match FixedScalar::ONE.checked_div(magnitude) {
            Ok(inverse) => Self::new(self.x * inverse, self.y * inverse),
            Err(_) => Self::ZERO,
        }
    }

    /// Advances by `speed` toward `target`, snapping onto it once the
    /// remaining distance is within one step so it never overshoots and
    /// oscillates.
    pub fn move_towards(self, target: Self, speed: FixedScalar) -> Self {
        let delta = target - self;
        let distance_sqr = delta.sqr_magnitude();
        let speed_sqr = FixedScalar::from_wide_product(
            WideInt128::mul_i64(speed.raw(), speed.raw()),
            "move_towards",
        );

        if distance_sqr.is_zero() || (speed.is_positive() && distance_sqr <= speed_sqr) {
            return target;
        }

        // distance_sqr >= 1 raw, so the root is at least 2^(FRAC_BITS/2) raw.
        let distance = math::sqrt(distance_sqr).unwrap_or(FixedScalar::ONE);
        self + delta * speed / distance
    }

    /// `t` is clamped to `[0, 1]`; the endpoints are returned exactly.
    pub fn lerp(self, other: Self, t: FixedScalar) -> Self {
        if t <= FixedScalar::ZERO {
            return self;
        }
        if t >= FixedScalar::ONE {
            return other;
        }
        self + (other - self) * t
    }

    /// Counter-clockwise rotation by `angle` tenths of a degree.
    pub fn rotate(self, angle: i32) -> Self {
        let sin = math::sin(angle).raw();
        let cos = math::cos(angle).raw();
        let (x, y) = (self.x.raw(), self.y.raw());

        let rotated_x = WideInt128::mul_i64(x, cos) - WideInt128::mul_i64(y, sin);
        let rotated_y = WideInt128::mul_i64(x, sin) + WideInt128::mul_i64(y, cos);
        Self::new(
            FixedScalar::from_wide_product(rotated_x, "rotate"),
            FixedScalar::from_wide_product(rotated_y, "rotate"),
        )
    }

    /// Component-wise clamp; the closest point of a box to a point.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl Add for FixedVector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FixedVector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for FixedVector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<FixedScalar> for FixedVector2 {
    type Output = Self;

    fn mul(self, rhs: FixedScalar) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<FixedScalar> for FixedVector2 {
    type Output = Self;

    /// Panics on a zero divisor.
    fn div(self, rhs: FixedScalar) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}
