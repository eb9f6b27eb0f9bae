// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Float <-> raw conversions.
//!
//! These are one-way conveniences for authoring constants and for display.
//! Simulation state must never be derived from a float computed at runtime.

use crate::config::SCALE;

/// 2^63 as f64; every finite double strictly inside (-2^63, 2^63) converts
/// to i64 without overflow.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// `round(value * SCALE)` with ties to even, saturating at the i64 range.
/// NaN maps to zero.
pub fn raw_from_f64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let scaled = value * SCALE as f64;
    if scaled >= I64_LIMIT {
        return i64::MAX;
    }
    if scaled <= -I64_LIMIT {
        return i64::MIN;
    }
    round_half_even(scaled)
}

pub fn raw_from_f32(value: f32) -> i64 {
    raw_from_f64(value as f64)
}

pub fn raw_to_f64(raw: i64) -> f64 {
    raw as f64 / SCALE as f64
}

pub fn raw_to_f32(raw: i64) -> f32 {
    raw_to_f64(raw) as f32
}

/// `value` must lie strictly inside the i64 range.
fn round_half_even(value: f64) -> i64 {
    let truncated = value as i64;
    // Exact: both operands share the same binade and the integer part cancels.
    let fraction = value - truncated as f64;
    let magnitude = if fraction < 0.0 { -fraction } else { fraction };
    let away = if value < 0.0 { -1 } else { 1 };

    if magnitude > 0.5 || (magnitude == 0.5 && truncated % 2 != 0) {
        truncated + away
    } else {
        truncated
    }
}
