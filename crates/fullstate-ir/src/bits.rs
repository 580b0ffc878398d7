//! Conversions between integers and bit tuples.
//!
//! Big-endian tuples put the most significant bit first, so for a state
//! vector over `n` qubits amplitude index `k` belongs to the basis state
//! `to_tuple_be(k, n)`, qubit 0 leading.

use serde::{Deserialize, Serialize};

/// Bit order of a tuple or mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endian {
    /// Most significant bit first.
    Big,
    /// Least significant bit first.
    Little,
}

/// Selects a subset of qubits for a broadcast single-qubit gate.
///
/// The endianness is part of the mask so that a mask can never be
/// interpreted in an order the caller did not intend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitMask {
    /// Mask value; bit positions are read with `endian` over the qubit list.
    pub value: u64,
    /// How `value` lines up with the qubit list.
    pub endian: Endian,
}

impl BitMask {
    /// A big-endian mask: the highest of `len` bits selects the first qubit.
    pub fn big_endian(value: u64) -> Self {
        Self {
            value,
            endian: Endian::Big,
        }
    }

    /// A little-endian mask: bit 0 selects the first qubit.
    pub fn little_endian(value: u64) -> Self {
        Self {
            value,
            endian: Endian::Little,
        }
    }

    /// Expand the mask to one flag per qubit.
    pub fn to_flags(self, len: usize) -> Vec<u8> {
        to_tuple(self.value, len, self.endian)
    }
}

/// Split `value` into `len` bits, most significant first.
pub fn to_tuple_be(value: u64, len: usize) -> Vec<u8> {
    (0..len).rev().map(|i| bit_at(value, i)).collect()
}

/// Split `value` into `len` bits, least significant first.
pub fn to_tuple_le(value: u64, len: usize) -> Vec<u8> {
    (0..len).map(|i| bit_at(value, i)).collect()
}

/// Split `value` into `len` bits in the given order.
pub fn to_tuple(value: u64, len: usize, endian: Endian) -> Vec<u8> {
    match endian {
        Endian::Big => to_tuple_be(value, len),
        Endian::Little => to_tuple_le(value, len),
    }
}

/// Compose bits, most significant first, into an integer.
pub fn to_int_be(bits: &[u8]) -> u64 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u64::from(b & 1))
}

/// Compose bits, least significant first, into an integer.
pub fn to_int_le(bits: &[u8]) -> u64 {
    bits.iter().rev().fold(0, |acc, &b| (acc << 1) | u64::from(b & 1))
}

/// Render a bit tuple as `(1, 0, 1)`; one-element tuples keep a trailing comma.
pub fn format_tuple(bits: &[u8]) -> String {
    match bits {
        [b] => format!("({b},)"),
        _ => {
            let inner: Vec<String> = bits.iter().map(u8::to_string).collect();
            format!("({})", inner.join(", "))
        }
    }
}

#[inline]
fn bit_at(value: u64, i: usize) -> u8 {
    if i >= 64 { 0 } else { ((value >> i) & 1) as u8 }
}
