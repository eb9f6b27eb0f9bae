// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point rotation quaternion.
//!
//! A quaternion is a rotation only while its magnitude is one. Nothing here
//! enforces that on construction; call `normalized` after composing many
//! rotations or after building one by hand.

use core::ops::{Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::config::{FRAC_BITS, HALF_UNIT, SLERP_LERP_THRESHOLD};
use crate::fxp::ops::{round_to_scale, sum_of_products};
use crate::math;
use crate::math::sqrt::isqrt_wide;
use crate::types::scalar::FixedScalar;
use crate::types::vector3::FixedVector3;
use crate::types::wide::WideInt128;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedQuaternion {
    pub x: FixedScalar,
    pub y: FixedScalar,
    pub z: FixedScalar,
    pub w: FixedScalar,
}

impl Default for FixedQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl FixedQuaternion {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(
        FixedScalar::ZERO,
        FixedScalar::ZERO,
        FixedScalar::ZERO,
        FixedScalar::ONE,
    );

    pub const fn new(x: FixedScalar, y: FixedScalar, z: FixedScalar, w: FixedScalar) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` tenths of a degree about `axis` (normalized here).
    ///
    /// The sandwich product applies the quaternion twice, so it is built from
    /// the half angle.
    pub fn angle_axis(angle: i32, axis: FixedVector3) -> Self {
        let axis = axis.normalized();
        let half = angle / 2;
        let sin = math::sin(half);
        let cos = math::cos(half);
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Euler angles in tenths of a degree. Composition order is Z, then X,
    /// then Y: `rot_y * rot_x * rot_z`.
    pub fn euler(x: i32, y: i32, z: i32) -> Self {
        let roll = Self::angle_axis(z, FixedVector3::FORWARD);
        let pitch = Self::angle_axis(x, FixedVector3::RIGHT);
        let yaw = Self::angle_axis(y, FixedVector3::UP);
        yaw * pitch * roll
    }

    /// The (x, y, z) part.
    pub fn vector(self) -> FixedVector3 {
        FixedVector3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Self) -> FixedScalar {
        let sum = sum_of_products(&[
            (self.x.raw(), other.x.raw()),
            (self.y.raw(), other.y.raw()),
            (self.z.raw(), other.z.raw()),
            (self.w.raw(), other.w.raw()),
        ]);
        FixedScalar::from_wide_product(sum, "quat_dot")
    }

    pub fn sqr_magnitude(self) -> FixedScalar {
        self.dot(self)
    }

    /// Inverse rotation for a unit quaternion.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Unit-length copy; `IDENTITY` for the zero quaternion.
    ///
    /// The unshifted sum of squared raw components is the squared magnitude
    /// at double scale, so its integer root is the magnitude's raw value with
    /// no precision dropped. Components wider than 61 bits are shifted down
    /// first so that sum stays within 124 bits; the direction is unchanged.
    pub fn normalized(self) -> Self {
        let raws = [self.x.raw(), self.y.raw(), self.z.raw(), self.w.raw()];
        let widest = raws.iter().map(|raw| raw.unsigned_abs()).max().unwrap_or(0);
        let shift = (u64::BITS - widest.leading_zeros()).saturating_sub(61);
        let [x, y, z, w] = raws.map(|raw| raw >> shift);

        let sum = sum_of_products(&[(x, x), (y, y), (z, z), (w, w)]);
        let magnitude = FixedScalar::from_raw(isqrt_wide(sum));
        if magnitude.is_zero() {
            return Self::IDENTITY;
        }
        Self::new(
            FixedScalar::from_raw(x) / magnitude,
            FixedScalar::from_raw(y) / magnitude,
            FixedScalar::from_raw(z) / magnitude,
            FixedScalar::from_raw(w) / magnitude,
        )
    }

    /// Component-wise blend with `t` clamped to `[0, 1]`. Not normalized.
    pub fn lerp(self, other: Self, t: FixedScalar) -> Self {
        if t <= FixedScalar::ZERO {
            return self;
        }
        if t >= FixedScalar::ONE {
            return other;
        }
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
            self.w + (other.w - self.w) * t,
        )
    }

    /// Spherical interpolation along the shorter arc. `t` is clamped to
    /// `[0, 1]` and the endpoints are returned unchanged.
    pub fn slerp(self, other: Self, t: FixedScalar) -> Self {
        if t <= FixedScalar::ZERO {
            return self;
        }
        if t >= FixedScalar::ONE {
            return other;
        }

        let mut end = other;
        let mut dot = self.dot(other);
        if dot.is_negative() {
            end = -other;
            dot = -dot;
        }

        // Nearly parallel: sin(theta) is too small to divide by.
        if dot.raw() >= SLERP_LERP_THRESHOLD {
            return self.lerp(end, t).normalized();
        }

        let theta = math::acos01(dot);
        let sin_theta = math::sin(theta);
        if sin_theta.is_zero() {
            return self.lerp(end, t).normalized();
        }

        let t_theta = ((t.raw() * theta as i64 + HALF_UNIT) >> FRAC_BITS) as i32;
        let weight_start = math::sin(theta - t_theta) / sin_theta;
        let weight_end = math::sin(t_theta) / sin_theta;

        let blend = |a: FixedScalar, b: FixedScalar| {
            let wide = sum_of_products(&[
                (a.raw(), weight_start.raw()),
                (b.raw(), weight_end.raw()),
            ]);
            FixedScalar::from_wide(round_to_scale(wide), "slerp")
        };

        Self::new(
            blend(self.x, end.x),
            blend(self.y, end.y),
            blend(self.z, end.z),
            blend(self.w, end.w),
        )
        .normalized()
    }

    /// `v' = v + 2w(u x v) + 2(u x (u x v))` with `u` the vector part; two
    /// cross products instead of a full sandwich product.
    pub fn rotate_vector(self, v: FixedVector3) -> FixedVector3 {
        let u = self.vector();
        let t = u.cross(v) * FixedScalar::TWO;
        v + t * self.w + u.cross(t)
    }
}

/// Each component is rounded once after its four exact partial products are
/// combined.
fn hamilton_component(terms: [WideInt128; 4]) -> FixedScalar {
    let [a, b, c, d] = terms;
    FixedScalar::from_wide(round_to_scale(a + b + c + d), "quat_mul")
}

impl Mul for FixedQuaternion {
    type Output = Self;

    /// Hamilton product: `self` applied after `rhs`.
    fn mul(self, rhs: Self) -> Self {
        let (x1, y1, z1, w1) = (self.x.raw(), self.y.raw(), self.z.raw(), self.w.raw());
        let (x2, y2, z2, w2) = (rhs.x.raw(), rhs.y.raw(), rhs.z.raw(), rhs.w.raw());
        let m = WideInt128::mul_i64;

        Self::new(
            hamilton_component([m(w1, x2), m(x1, w2), m(y1, z2), -m(z1, y2)]),
            hamilton_component([m(w1, y2), -m(x1, z2), m(y1, w2), m(z1, x2)]),
            hamilton_component([m(w1, z2), m(x1, y2), -m(y1, x2), m(z1, w2)]),
            hamilton_component([m(w1, w2), -m(x1, x2), -m(y1, y2), -m(z1, z2)]),
        )
    }
}

impl Mul<FixedVector3> for FixedQuaternion {
    type Output = FixedVector3;

    fn mul(self, rhs: FixedVector3) -> FixedVector3 {
        self.rotate_vector(rhs)
    }
}

impl Neg for FixedQuaternion {
    type Output = Self;

    /// Same rotation, opposite hemisphere.
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
