//! `costexplorer-core`: value object foundation for the Cost Explorer model layer.
//!
//! This crate contains the shared contract every model type follows (no
//! transport, no credentials, no retries).

#[macro_use]
mod macros;

pub mod error;
pub mod hash;
pub mod operation;
pub mod render;
pub mod value_object;

pub use error::{ModelError, ModelResult};
pub use hash::{HASH_PRIME, HashAccumulator, string_hash};
pub use operation::{CONTENT_TYPE, Operation, PageRequest, Paginated, SERVICE_TARGET_PREFIX};
pub use render::{FieldRenderer, Rendered};
pub use value_object::{ModelValue, ValueObject};
