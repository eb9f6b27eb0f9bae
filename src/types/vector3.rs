// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point 3D vector.

use core::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::fxp::ops::sum_of_products;
use crate::math;
use crate::types::scalar::FixedScalar;
use crate::types::vector2::FixedVector2;
use crate::types::wide::WideInt128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVector3 {
    pub x: FixedScalar,
    pub y: FixedScalar,
    pub z: FixedScalar,
}

impl FixedVector3 {
    pub const ZERO: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO, FixedScalar::ZERO);
    pub const ONE: Self = Self::new(FixedScalar::ONE, FixedScalar::ONE, FixedScalar::ONE);
    pub const UP: Self = Self::new(FixedScalar::ZERO, FixedScalar::ONE, FixedScalar::ZERO);
    pub const DOWN: Self = Self::new(FixedScalar::ZERO, FixedScalar::NEG_ONE, FixedScalar::ZERO);
    pub const LEFT: Self = Self::new(FixedScalar::NEG_ONE, FixedScalar::ZERO, FixedScalar::ZERO);
    pub const RIGHT: Self = Self::new(FixedScalar::ONE, FixedScalar::ZERO, FixedScalar::ZERO);
    pub const FORWARD: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO, FixedScalar::ONE);
    pub const BACK: Self = Self::new(FixedScalar::ZERO, FixedScalar::ZERO, FixedScalar::NEG_ONE);

    pub const fn new(x: FixedScalar, y: FixedScalar, z: FixedScalar) -> Self {
        Self { x, y, z }
    }

    pub fn from_int(x: i64, y: i64, z: i64) -> Self {
        Self::new(
            FixedScalar::from_int(x),
            FixedScalar::from_int(y),
            FixedScalar::from_int(z),
        )
    }

    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::new(
            FixedScalar::from_f32(x),
            FixedScalar::from_f32(y),
            FixedScalar::from_f32(z),
        )
    }

    pub fn dot(self, other: Self) -> FixedScalar {
        let sum = sum_of_products(&[
            (self.x.raw(), other.x.raw()),
            (self.y.raw(), other.y.raw()),
            (self.z.raw(), other.z.raw()),
        ]);
        FixedScalar::from_wide_product(sum, "dot")
    }

    /// Each component is the difference of two exact products, shifted once.
    pub fn cross(self, other: Self) -> Self {
        let (ax, ay, az) = (self.x.raw(), self.y.raw(), self.z.raw());
        let (bx, by, bz) = (other.x.raw(), other.y.raw(), other.z.raw());

        let x = WideInt128::mul_i64(ay, bz) - WideInt128::mul_i64(az, by);
        let y = WideInt128::mul_i64(az, bx) - WideInt128::mul_i64(ax, bz);
        let z = WideInt128::mul_i64(ax, by) - WideInt128::mul_i64(ay, bx);
        Self::new(
            FixedScalar::from_wide_product(x, "cross"),
            FixedScalar::from_wide_product(y, "cross"),
            FixedScalar::from_wide_product(z, "cross"),
        )
    }

    pub fn sqr_magnitude(self) -> FixedScalar {
        self.dot(self)
    }

    pub fn magnitude(self) -> FixedScalar {
        math::sqrt(self.sqr_magnitude()).unwrap_or(FixedScalar::ZERO)
    }

    pub fn distance_sqr(self, other: Self) -> FixedScalar {
        (other - self).sqr_magnitude()
    }

    pub fn normalized(self) -> Self {
        let sqr_magnitude = self.sqr_magnitude();
        if sqr_magnitude.raw() <= 0 {
            return Self::ZERO;
        }

        let magnitude = math::sqrt(sqr_magnitude).unwrap_or(FixedScalar::ZERO);
        match FixedScalar::ONE.checked_div(magnitude) {
            Ok(inverse) => Self::new(self.x * inverse, self.y * inverse, self.z * inverse),
            Err(_) => Self::ZERO,
        }
    }

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

        let distance = math::sqrt(distance_sqr).unwrap_or(FixedScalar::ONE);
        self + delta * speed / distance
    }

    pub fn lerp(self, other: Self, t: FixedScalar) -> Self {
        if t <= FixedScalar::ZERO {
            return self;
        }
        if t >= FixedScalar::ONE {
            return other;
        }
        self + (other - self) * t
    }

    /// Projection onto the ground plane; Y is dropped.
    pub fn to_vector2_xz(self) -> FixedVector2 {
        FixedVector2::new(self.x, self.z)
    }
}

impl Add for FixedVector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for FixedVector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for FixedVector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<FixedScalar> for FixedVector3 {
    type Output = Self;

    fn mul(self, rhs: FixedScalar) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<FixedScalar> for FixedVector3 {
    type Output = Self;

    fn div(self, rhs: FixedScalar) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
