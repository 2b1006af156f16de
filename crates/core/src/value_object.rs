//! Value object contract: equality by value, not identity.
//!
//! Every request, result and nested detail type of the model layer is a value
//! object. It holds a fixed set of named optional fields and is defined
//! entirely by their values: two instances with the same field values are
//! equal, hash equal and render identically.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ModelError, ModelResult};
use crate::hash::{HashAccumulator, string_hash};

/// A field value that can be hashed stably and rendered for diagnostics.
///
/// Implemented for the primitive field kinds (strings, integers, booleans),
/// for lists and string-keyed maps of them, and by every value object.
pub trait ModelValue {
    /// Stable hash, see [`crate::hash`].
    fn hash_code(&self) -> i32;

    /// Diagnostic rendering used by `Display`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Marker + serialization boundary for value objects.
///
/// ## Field semantics
///
/// - every field is optional; absent is distinct from present-but-empty
/// - equality is structural over all fields (derived `PartialEq`)
/// - `hash_code` and `Hash` agree with equality
/// - `Display` lists present fields only, in declaration order
///
/// ## Wire format
///
/// JSON object with PascalCase keys. Absent fields are omitted, missing or
/// `null` keys decode to absent and unknown keys are ignored.
///
/// Types normally implement this through [`crate::value_object!`].
pub trait ValueObject:
    Clone
    + Default
    + PartialEq
    + Eq
    + core::hash::Hash
    + fmt::Debug
    + fmt::Display
    + ModelValue
    + Serialize
    + DeserializeOwned
{
    /// Type name used in errors and logs.
    const TYPE_NAME: &'static str;

    /// `true` when every field is absent.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn to_json(&self) -> ModelResult<String> {
        serde_json::to_string(self).map_err(|source| {
            tracing::debug!(type_name = Self::TYPE_NAME, error = %source, "value object serialization failed");
            ModelError::serialize(Self::TYPE_NAME, source)
        })
    }

    fn to_json_value(&self) -> ModelResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|source| {
            tracing::debug!(type_name = Self::TYPE_NAME, error = %source, "value object serialization failed");
            ModelError::serialize(Self::TYPE_NAME, source)
        })
    }

    fn from_json(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json).map_err(|source| {
            tracing::debug!(type_name = Self::TYPE_NAME, error = %source, "value object deserialization failed");
            ModelError::deserialize(Self::TYPE_NAME, source)
        })
    }

    fn from_json_value(value: serde_json::Value) -> ModelResult<Self> {
        serde_json::from_value(value).map_err(|source| {
            tracing::debug!(type_name = Self::TYPE_NAME, error = %source, "value object deserialization failed");
            ModelError::deserialize(Self::TYPE_NAME, source)
        })
    }
}

impl ModelValue for String {
    fn hash_code(&self) -> i32 {
        string_hash(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl ModelValue for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl ModelValue for bool {
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<T: ModelValue + ?Sized> ModelValue for Box<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

/// Lists hash element-wise with the field accumulator and render as `[a, b]`.
impl<T: ModelValue> ModelValue for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(HashAccumulator::new(), HashAccumulator::value)
            .finish()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Maps hash to the sum of `key_hash ^ value_hash` (order independent) and
/// render as `{k=v, k2=v2}` in key order.
impl<T: ModelValue> ModelValue for BTreeMap<String, T> {
    fn hash_code(&self) -> i32 {
        self.iter().fold(0i32, |sum, (key, value)| {
            sum.wrapping_add(string_hash(key) ^ value.hash_code())
        })
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(key)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rendered;

    #[test]
    fn list_renders_like_a_sequence() {
        let metrics = vec!["BlendedCost".to_string(), "UsageQuantity".to_string()];
        assert_eq!(Rendered(&metrics).to_string(), "[BlendedCost, UsageQuantity]");
        assert_eq!(Rendered(&Vec::<String>::new()).to_string(), "[]");
    }

    #[test]
    fn list_hash_accumulates_from_one() {
        assert_eq!(vec!["a".to_string()].hash_code(), 31 + 97);
        assert_eq!(Vec::<String>::new().hash_code(), 1);
    }

    #[test]
    fn map_renders_in_key_order() {
        let mut attributes = BTreeMap::new();
        attributes.insert("description".to_string(), "prod".to_string());
        attributes.insert("account".to_string(), "123".to_string());
        assert_eq!(Rendered(&attributes).to_string(), "{account=123, description=prod}");
    }

    #[test]
    fn map_hash_is_sum_of_entry_hashes() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), "b".to_string());
        map.insert("c".to_string(), "d".to_string());
        assert_eq!(map.hash_code(), (97 ^ 98) + (99 ^ 100));
    }

    #[test]
    fn booleans_and_integers_hash_to_fixed_values() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!(42i32.hash_code(), 42);
    }
}
