// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxpError {
    /// Denominator's raw value is exactly zero.
    #[error("division by zero")]
    DivideByZero,

    /// Result does not fit the target width.
    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("buffer too short: expected {expected} bytes, found {found}")]
    BufferTooShort { expected: usize, found: usize },

    #[error("malformed decimal integer")]
    Parse,
}

pub type Result<T> = core::result::Result<T, FxpError>;

/// Infix operators have no error channel; they abort the computation with the
/// same error text a checked call would have returned.
#[cold]
#[track_caller]
pub(crate) fn arithmetic_panic(err: FxpError) -> ! {
    panic!("fixed-point arithmetic failed: {}", err)
}
