// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Scalar math: square root and lookup-table trigonometry.
//!
//! `abs`, `clamp`, `min` and `max` are methods on `FixedScalar`.

pub mod sqrt;
pub mod table;
pub mod trig;

pub use sqrt::sqrt;
pub use trig::{acos01, cos, normalize_angle, sin, tan, DEG_0, DEG_180, DEG_270, DEG_360, DEG_90};
