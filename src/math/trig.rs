// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Table-driven trigonometry. Angles are integers in tenths of a degree.

use crate::config::{FRAC_BITS, TABLE_FRAC_BITS};
use crate::math::table::SIN_TABLE_90;
use crate::types::scalar::FixedScalar;

/// +X
pub const DEG_0: i32 = 0;
/// +Y
pub const DEG_90: i32 = 900;
/// -X
pub const DEG_180: i32 = 1800;
/// -Y
pub const DEG_270: i32 = 2700;
pub const DEG_360: i32 = 3600;

/// Table entry at the configured scale.
fn table_raw(index: usize) -> i64 {
    (SIN_TABLE_90[index] as i64) << (FRAC_BITS - TABLE_FRAC_BITS)
}

/// Maps any angle into `[0, 3600)`; -1 becomes 3599.
pub fn normalize_angle(angle: i32) -> i32 {
    angle.rem_euclid(DEG_360)
}

/// Quadrant folding onto the 0..=90 degree table: mirror across 180 for the
/// sign, across 90 for the magnitude.
pub fn sin(angle: i32) -> FixedScalar {
    let mut angle = normalize_angle(angle);
    let negative = angle > DEG_180;
    if negative {
        angle = DEG_360 - angle;
    }
    if angle > DEG_90 {
        angle = DEG_180 - angle;
    }

    let value = table_raw(angle as usize);
    FixedScalar::from_raw(if negative { -value } else { value })
}

/// `cos(a) = sin(a + 90)`.
pub fn cos(angle: i32) -> FixedScalar {
    sin(normalize_angle(angle) + DEG_90)
}

/// `sin / cos`. Where |cos| is below one raw unit the result is the
/// `MAX`/`MIN` sentinel carrying the sign of sin; that is an asymptote, not
/// an error.
pub fn tan(angle: i32) -> FixedScalar {
    let sin = sin(angle);
    let cos = cos(angle);
    let asymptote = if sin.is_positive() {
        FixedScalar::MAX
    } else {
        FixedScalar::MIN
    };

    if cos.abs() < FixedScalar::EPSILON {
        return asymptote;
    }
    sin.saturating_div(cos).unwrap_or(asymptote)
}

/// Inverse cosine for inputs in `[-1, 1]` (clamped), returning tenths of a
/// degree in `[0, 1800]`.
///
/// Binary-searches the sine table for the largest angle whose sine does not
/// exceed `|cos|`, then reflects it: `90 - a` for a non-negative input,
/// `90 + a` otherwise.
pub fn acos01(cos: FixedScalar) -> i32 {
    let clamped = cos.clamp(FixedScalar::NEG_ONE, FixedScalar::ONE);
    let target = clamped.abs().raw();

    let mut low: i32 = 0;
    let mut high: i32 = DEG_90;
    let mut index: i32 = 0;
    while low <= high {
        let mid = (low + high) >> 1;
        if table_raw(mid as usize) <= target {
            index = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    if clamped.is_negative() {
        DEG_90 + index
    } else {
        DEG_90 - index
    }
}
