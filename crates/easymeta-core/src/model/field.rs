use super::extra_attrs::ExtraAttrs;
use super::storage_type::StorageType;

/// Common system fields every business entity may carry
const BUILTIN_FIELDS: [&str; 9] = [
    "createdOn",
    "createdBy",
    "modifiedOn",
    "modifiedBy",
    "owningUser",
    "owningDept",
    "approvalId",
    "approvalState",
    "approvalStepNode",
];

/// Field descriptor as supplied by the metadata layer
///
/// Read-only to the resolution core. `owner` and `reference` name entities
/// in the same catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    /// Field name, unique within its entity
    pub name: String,

    /// Name of the owning entity (set when the field is added to an entity)
    pub owner: String,

    /// Persistence-layer type code
    pub storage_type: StorageType,

    /// Target entity name for reference-typed fields
    pub reference: Option<String>,

    pub nullable: bool,
    pub creatable: bool,
    pub updatable: bool,

    /// Human-readable display name
    pub description: Option<String>,

    /// Schema-level free-form attributes
    pub extra_attrs: ExtraAttrs,
}

impl FieldMeta {
    /// Create a nullable, creatable, updatable field with no owner yet
    pub fn new(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self {
            name: name.into(),
            owner: String::new(),
            storage_type,
            reference: None,
            nullable: true,
            creatable: true,
            updatable: true,
            description: None,
            extra_attrs: ExtraAttrs::new(),
        }
    }

    pub fn referencing(mut self, entity: impl Into<String>) -> Self {
        self.reference = Some(entity.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra_attrs.set(key, value);
        self
    }

    pub fn with_flags(mut self, nullable: bool, creatable: bool, updatable: bool) -> Self {
        self.nullable = nullable;
        self.creatable = creatable;
        self.updatable = updatable;
        self
    }

    /// `Owner.field`, used in diagnostics
    pub fn qualified_name(&self) -> String {
        if self.owner.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.owner, self.name)
        }
    }

    /// Primary key or one of the common system fields
    pub fn is_builtin(&self) -> bool {
        self.storage_type == StorageType::Primary || BUILTIN_FIELDS.contains(&self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let field = FieldMeta::new("title", StorageType::String);
        assert!(field.nullable && field.creatable && field.updatable);
        assert!(field.reference.is_none());
        assert_eq!(field.qualified_name(), "title");
    }

    #[test]
    fn test_builtin_detection() {
        assert!(FieldMeta::new("accountId", StorageType::Primary).is_builtin());
        assert!(FieldMeta::new("owningUser", StorageType::Reference).is_builtin());
        assert!(!FieldMeta::new("industry", StorageType::Reference).is_builtin());
    }
}
