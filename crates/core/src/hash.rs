//! Stable hashing for value objects.
//!
//! `std::hash::Hash` is derived on every model type and is what maps and sets
//! use. `hash_code` is a second, fully specified hash: a 31-multiplier
//! accumulator over fields in declaration order, with fixed per-kind rules, so
//! the same value hashes identically in every process and on every platform.

use crate::value_object::ModelValue;

/// Multiplier of the field accumulator.
pub const HASH_PRIME: i32 = 31;

/// Hash of a string: `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]` over
/// UTF-16 code units, with wrapping 32-bit arithmetic. The empty string is 0.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
}

/// Accumulates `hash = hash * 31 + element_hash`, starting at 1.
///
/// Absent fields contribute 0, so a value with every field absent hashes to
/// `31^n` (wrapping) for `n` declared fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashAccumulator(i32);

impl HashAccumulator {
    pub fn new() -> Self {
        Self(1)
    }

    /// Mix in an optional field.
    pub fn field<T: ModelValue + ?Sized>(self, value: Option<&T>) -> Self {
        self.mix(value.map_or(0, ModelValue::hash_code))
    }

    /// Mix in a present element.
    pub fn value<T: ModelValue + ?Sized>(self, value: &T) -> Self {
        self.mix(value.hash_code())
    }

    pub fn finish(self) -> i32 {
        self.0
    }

    fn mix(self, element: i32) -> Self {
        Self(self.0.wrapping_mul(HASH_PRIME).wrapping_add(element))
    }
}

impl Default for HashAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
