use std::collections::BTreeMap;

use easymeta_core_types::EntityCode;

use super::extra_attrs::ExtraAttrs;
use super::field::FieldMeta;
use super::storage_type::StorageType;

/// Entity descriptor as supplied by the metadata layer
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMeta {
    /// Stable numeric identity
    pub code: EntityCode,

    /// Entity name, unique within a catalog
    pub name: String,

    /// Human-readable display name
    pub description: Option<String>,

    /// Designated title field; falls back to the primary key when absent
    pub name_field: Option<String>,

    /// Schema-level free-form attributes
    pub extra_attrs: ExtraAttrs,

    fields: BTreeMap<String, FieldMeta>,
}

impl EntityMeta {
    pub fn new(code: impl Into<EntityCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: None,
            name_field: None,
            extra_attrs: ExtraAttrs::new(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = Some(field.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra_attrs.set(key, value);
        self
    }

    pub fn with_field(mut self, field: FieldMeta) -> Self {
        self.add_field(field);
        self
    }

    /// Add a field, claiming ownership of it
    ///
    /// Replaces any existing field of the same name.
    pub fn add_field(&mut self, mut field: FieldMeta) {
        field.owner = self.name.clone();
        self.fields.insert(field.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.get(name)
    }

    /// Fields in name order
    pub fn fields(&self) -> impl Iterator<Item = &FieldMeta> {
        self.fields.values()
    }

    pub fn primary_field(&self) -> Option<&FieldMeta> {
        self.fields
            .values()
            .find(|f| f.storage_type == StorageType::Primary)
    }

    /// The entity's title field
    ///
    /// A designated name field that does not exist is treated as absent.
    pub fn name_field(&self) -> Option<&FieldMeta> {
        self.name_field
            .as_deref()
            .and_then(|name| self.fields.get(name))
            .or_else(|| self.primary_field())
    }
}
