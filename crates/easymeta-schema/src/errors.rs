//! Error handling for easymeta-schema
//!
//! Wraps easymeta-core ExError with loader-specific helpers

use easymeta_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a schema validation error
pub fn schema_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("schema_parse")
        .with_message(reason.to_string())
}

/// Create a schema validation error scoped to one entity
pub fn entity_validation(entity: &str, reason: &str) -> ExError {
    schema_validation(reason).with_entity(entity)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
