// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Raw fixed-point arithmetic and the overflow boundary.

pub mod convert;
pub mod ops;
pub mod policy;

pub use policy::OverflowPolicy;
