use thiserror::Error;

/// Result type alias using EasyMetaError
pub type Result<T> = std::result::Result<T, EasyMetaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the resolution core can report.
/// Each kind maps to a stable error code for programmatic handling and for
/// the structured log field `err.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Resolution
    UnknownDisplayType,
    UnsupportedFieldType,

    // Construction
    ConstructionError,

    // Lookup
    PathResolution,
    NotFound,
    StateClassUnavailable,

    // Loading
    InvalidInput,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownDisplayType => "ERR_UNKNOWN_DISPLAY_TYPE",
            ExErrorKind::UnsupportedFieldType => "ERR_UNSUPPORTED_FIELD_TYPE",
            ExErrorKind::ConstructionError => "ERR_CONSTRUCTION",
            ExErrorKind::PathResolution => "ERR_PATH_RESOLUTION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::StateClassUnavailable => "ERR_STATE_CLASS_UNAVAILABLE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus the metadata context
/// (entity, field, path segment) the failure was raised for.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<String>,
    field: Option<String>,
    segment: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            field: None,
            segment: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add the offending path segment
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(segment) = &self.segment {
            write!(f, " (segment: {})", segment)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for display-type resolution and projection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EasyMetaError {
    // ===== Resolution Errors =====
    /// Explicit override names a tag outside the closed set
    #[error("Unknown display type '{value}' configured on field {field}")]
    UnknownDisplayType { field: String, value: String },

    /// Storage type has no mapping and no override was given
    #[error("Unsupported field type {storage_type} on field {field}")]
    UnsupportedFieldType { field: String, storage_type: String },

    /// Reference-typed field has no target entity
    #[error("Reference field {field} has no target entity")]
    MissingReferenceTarget { field: String },

    // ===== Construction Errors =====
    /// The wrapper variant bound to a tag could not be built
    #[error("Cannot construct {display_type} wrapper for field {field}: {reason}")]
    ConstructionError {
        field: String,
        display_type: String,
        reason: String,
    },

    // ===== Lookup Errors =====
    /// Two-hop label path could not be resolved
    #[error("Cannot resolve path '{path}' on entity {entity} at segment '{segment}': {reason}")]
    PathResolution {
        entity: String,
        path: String,
        segment: String,
        reason: String,
    },

    /// Entity not present in the catalog
    #[error("Entity not found: {entity}")]
    EntityNotFound { entity: String },

    /// Field not present on its entity
    #[error("Field not found: {entity}.{field}")]
    FieldNotFound { entity: String, field: String },

    /// No state-machine definition bound to a STATE field
    #[error("No state class bound to field {field}")]
    StateClassUnavailable { field: String },

    // ===== Internal Errors =====
    /// Projection could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<EasyMetaError> for ExError {
    fn from(err: EasyMetaError) -> Self {
        match err {
            EasyMetaError::UnknownDisplayType { field, value } => {
                ExError::new(ExErrorKind::UnknownDisplayType)
                    .with_field(field)
                    .with_message(format!("Unknown display type '{}'", value))
            }

            EasyMetaError::UnsupportedFieldType {
                field,
                storage_type,
            } => ExError::new(ExErrorKind::UnsupportedFieldType)
                .with_field(field)
                .with_message(format!("Unsupported field type {}", storage_type)),

            EasyMetaError::MissingReferenceTarget { field } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_field(field)
                    .with_message("Reference field has no target entity")
            }

            EasyMetaError::ConstructionError {
                field,
                display_type,
                reason,
            } => ExError::new(ExErrorKind::ConstructionError)
                .with_field(field)
                .with_message(format!("{} wrapper: {}", display_type, reason)),

            EasyMetaError::PathResolution {
                entity,
                path,
                segment,
                reason,
            } => ExError::new(ExErrorKind::PathResolution)
                .with_entity(entity)
                .with_segment(segment)
                .with_message(format!("Cannot resolve '{}': {}", path, reason)),

            EasyMetaError::EntityNotFound { entity } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_message("Entity not found"),

            EasyMetaError::FieldNotFound { entity, field } => ExError::new(ExErrorKind::NotFound)
                .with_entity(entity)
                .with_field(field)
                .with_message("Field not found"),

            EasyMetaError::StateClassUnavailable { field } => {
                ExError::new(ExErrorKind::StateClassUnavailable)
                    .with_field(field)
                    .with_message("No state class bound")
            }

            EasyMetaError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for EasyMetaError {
    fn from(err: serde_json::Error) -> Self {
        EasyMetaError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::UnknownDisplayType,
            ExErrorKind::UnsupportedFieldType,
            ExErrorKind::ConstructionError,
            ExErrorKind::PathResolution,
            ExErrorKind::NotFound,
            ExErrorKind::StateClassUnavailable,
            ExErrorKind::InvalidInput,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::PathResolution)
            .with_op("label_path")
            .with_entity("Account")
            .with_segment("nope")
            .with_message("no such field");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PATH_RESOLUTION]"));
        assert!(rendered.contains("label_path"));
        assert!(rendered.contains("(entity: Account)"));
        assert!(rendered.contains("(segment: nope)"));
    }

    #[test]
    fn test_serde_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EasyMetaError = json_err.into();
        assert!(matches!(err, EasyMetaError::Serialization { .. }));
    }
}
