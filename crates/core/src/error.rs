//! Model error model.

use thiserror::Error;

/// Result type used at the serialization boundary of the model layer.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Accessors, builders, equality, hashing and rendering never fail. Only the
/// JSON boundary and typed-enum parsing can produce one of these; service-side
/// failures (invalid values, throttling, auth) belong to the transport.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A value object could not be encoded as JSON.
    #[error("failed to serialize {type_name}: {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON payload could not be decoded into a value object.
    #[error("failed to deserialize {type_name}: {source}")]
    Deserialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A string is not one of the documented values of a typed enum.
    #[error("unknown {enum_name} value: {value:?}")]
    UnknownVariant {
        enum_name: &'static str,
        value: String,
    },
}

impl ModelError {
    pub fn serialize(type_name: &'static str, source: serde_json::Error) -> Self {
        Self::Serialize { type_name, source }
    }

    pub fn deserialize(type_name: &'static str, source: serde_json::Error) -> Self {
        Self::Deserialize { type_name, source }
    }

    pub fn unknown_variant(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            enum_name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_message_names_enum_and_value() {
        let err = ModelError::unknown_variant("Granularity", "WEEKLY");
        assert_eq!(err.to_string(), "unknown Granularity value: \"WEEKLY\"");
    }

    #[test]
    fn deserialize_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ModelError::deserialize("DateInterval", source);
        assert!(err.to_string().starts_with("failed to deserialize DateInterval: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
