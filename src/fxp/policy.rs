// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Overflow policy: the single place an out-of-range result is resolved.

use crate::error::{FxpError, Result};
use crate::types::wide::WideInt128;

/// What happens when a result does not fit the 64-bit raw range.
///
/// The policy is applied identically on every platform, so two peers that
/// agree on it also agree on every out-of-range result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Clamp to `FixedScalar::MAX` / `FixedScalar::MIN`.
    Saturate,
    /// Report `FxpError::Overflow`.
    Fail,
}

impl OverflowPolicy {
    /// Outcome of an out-of-range result whose true sign is `negative`.
    pub fn overflowed(self, negative: bool, op: &'static str) -> Result<i64> {
        match self {
            OverflowPolicy::Saturate => {
                tracing::trace!(op, negative, "fixed-point result saturated");
                Ok(if negative { i64::MIN } else { i64::MAX })
            }
            OverflowPolicy::Fail => {
                tracing::debug!(op, negative, "fixed-point result overflowed");
                Err(FxpError::Overflow { op })
            }
        }
    }

    /// Narrows a wide intermediate back to a raw value.
    pub fn narrow(self, value: WideInt128, op: &'static str) -> Result<i64> {
        match i64::try_from(value) {
            Ok(raw) => Ok(raw),
            Err(_) => self.overflowed(value.is_negative(), op),
        }
    }
}
