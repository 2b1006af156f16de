//! Operation descriptors and page-token pass-through.
//!
//! The model layer does not talk to the network. These traits describe what a
//! transport needs to know about each operation (target name, payload types,
//! JSON encoding) and how a page token moves from a result to the next request.

use crate::error::ModelResult;
use crate::value_object::ValueObject;

/// Prefix of the JSON target header for every Cost Explorer operation.
pub const SERVICE_TARGET_PREFIX: &str = "AWSInsightsIndexService";

/// Content type of request and response bodies.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// A remote operation: one request shape, one result shape.
pub trait Operation {
    /// Operation name as used on the wire, e.g. `GetCostAndUsage`.
    const NAME: &'static str;

    type Input: ValueObject;
    type Output: ValueObject;

    /// Value of the target header, `AWSInsightsIndexService.<NAME>`.
    fn target() -> String {
        format!("{SERVICE_TARGET_PREFIX}.{}", Self::NAME)
    }

    fn encode_input(input: &Self::Input) -> ModelResult<String> {
        input.to_json()
    }

    fn decode_output(body: &str) -> ModelResult<Self::Output> {
        Self::Output::from_json(body)
    }
}

/// A value object carrying an opaque page token.
pub trait Paginated: ValueObject {
    fn page_token(&self) -> Option<&str>;
}

/// A request that can be continued from a previous page.
pub trait PageRequest: Paginated {
    fn with_page_token(self, token: Option<String>) -> Self;

    /// Copy of `self` carrying `previous`'s token unchanged, or `None` when
    /// `previous` was the last page.
    fn next_page<R: Paginated>(&self, previous: &R) -> Option<Self> {
        let token = previous.page_token()?;
        tracing::trace!(
            request = Self::TYPE_NAME,
            result = R::TYPE_NAME,
            "continuing from page token"
        );
        Some(self.clone().with_page_token(Some(token.to_owned())))
    }
}
