// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Value types. Every type is `Copy` and compares by its raw scaled values.

pub mod quat;
pub mod scalar;
pub mod vector2;
pub mod vector3;
pub mod wide;

pub use quat::FixedQuaternion;
pub use scalar::FixedScalar;
pub use vector2::FixedVector2;
pub use vector3::FixedVector3;
pub use wide::WideInt128;
