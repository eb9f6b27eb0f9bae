// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical raw byte form.
//!
//! A scalar travels as its scaled value, signed 64-bit little-endian; compound
//! values are their components in declaration order (x, y, z, w). Anything
//! that persists, transmits or fingerprints simulation state reads exactly
//! these bytes.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{FxpError, Result};
use crate::types::quat::FixedQuaternion;
use crate::types::scalar::FixedScalar;
use crate::types::vector2::FixedVector2;
use crate::types::vector3::FixedVector3;

/// Bytes per scalar.
pub const RAW_LEN: usize = 8;

pub trait WireFormat: Sized {
    const WIRE_LEN: usize;

    /// Writes into the front of `buf`, returning the bytes written.
    fn write_wire(&self, buf: &mut [u8]) -> Result<usize>;

    /// Reads from the front of `buf`; trailing bytes are ignored.
    fn read_wire(buf: &[u8]) -> Result<Self>;
}

fn ensure_len(found: usize, expected: usize) -> Result<()> {
    if found < expected {
        return Err(FxpError::BufferTooShort { expected, found });
    }
    Ok(())
}

/// Concatenated raw form of `values`.
pub fn write_scalars(buf: &mut [u8], values: &[FixedScalar]) -> Result<usize> {
    let len = values.len() * RAW_LEN;
    ensure_len(buf.len(), len)?;

    for (chunk, value) in buf[..len].chunks_exact_mut(RAW_LEN).zip(values) {
        LittleEndian::write_i64(chunk, value.raw());
    }
    Ok(len)
}

pub fn read_scalars<const N: usize>(buf: &[u8]) -> Result<[FixedScalar; N]> {
    ensure_len(buf.len(), N * RAW_LEN)?;

    let mut values = [FixedScalar::ZERO; N];
    for (value, chunk) in values.iter_mut().zip(buf.chunks_exact(RAW_LEN)) {
        *value = FixedScalar::from_raw(LittleEndian::read_i64(chunk));
    }
    Ok(values)
}

impl WireFormat for FixedScalar {
    const WIRE_LEN: usize = RAW_LEN;

    fn write_wire(&self, buf: &mut [u8]) -> Result<usize> {
        write_scalars(buf, &[*self])
    }

    fn read_wire(buf: &[u8]) -> Result<Self> {
        let [value] = read_scalars::<1>(buf)?;
        Ok(value)
    }
}

impl WireFormat for FixedVector2 {
    const WIRE_LEN: usize = 2 * RAW_LEN;

    fn write_wire(&self, buf: &mut [u8]) -> Result<usize> {
        write_scalars(buf, &[self.x, self.y])
    }

    fn read_wire(buf: &[u8]) -> Result<Self> {
        let [x, y] = read_scalars::<2>(buf)?;
        Ok(Self::new(x, y))
    }
}

impl WireFormat for FixedVector3 {
    const WIRE_LEN: usize = 3 * RAW_LEN;

    fn write_wire(&self, buf: &mut [u8]) -> Result<usize> {
        write_scalars(buf, &[self.x, self.y, self.z])
    }

    fn read_wire(buf: &[u8]) -> Result<Self> {
        let [x, y, z] = read_scalars::<3>(buf)?;
        Ok(Self::new(x, y, z))
    }
}

impl WireFormat for FixedQuaternion {
    const WIRE_LEN: usize = 4 * RAW_LEN;

    fn write_wire(&self, buf: &mut [u8]) -> Result<usize> {
        write_scalars(buf, &[self.x, self.y, self.z, self.w])
    }

    fn read_wire(buf: &[u8]) -> Result<Self> {
        let [x, y, z, w] = read_scalars::<4>(buf)?;
        Ok(Self::new(x, y, z, w))
    }
}
