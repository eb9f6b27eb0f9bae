// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! fxp-kernel: deterministic, no_std fixed-point math for lockstep simulation.
//!
//! Every operation is integer-only, so identical inputs produce bit-identical
//! outputs on every platform. Floats appear only at the authoring boundary
//! (`from_f32`, `to_f64`, ...).

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod error;
pub mod fxp;
pub mod math;
pub mod types;
pub mod wire;

pub use error::{FxpError, Result};
pub use fxp::OverflowPolicy;
pub use types::{FixedQuaternion, FixedScalar, FixedVector2, FixedVector3, WideInt128};
pub use wire::WireFormat;

#[cfg(test)]
pub mod tests;
