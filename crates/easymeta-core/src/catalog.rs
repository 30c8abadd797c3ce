//! Read-only access to the metadata layer
//!
//! The resolution core never owns schema metadata. It reads entity and field
//! descriptors through [`MetadataCatalog`]; [`Catalog`] is the in-memory
//! implementation used by the schema loader and in tests.

use std::collections::HashMap;

use easymeta_core_types::EntityCode;

use crate::errors::{EasyMetaError, Result};
use crate::model::{EntityMeta, FieldMeta};

/// Entity lookups consumed by resolution, construction and projection
///
/// Implementations must be safe for concurrent reads.
pub trait MetadataCatalog: Send + Sync {
    fn entity(&self, name: &str) -> Option<&EntityMeta>;

    fn entity_by_code(&self, code: EntityCode) -> Option<&EntityMeta>;

    /// # Errors
    ///
    /// Returns `EntityNotFound` if no entity has this name.
    fn require_entity(&self, name: &str) -> Result<&EntityMeta> {
        self.entity(name).ok_or_else(|| EasyMetaError::EntityNotFound {
            entity: name.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns `EntityNotFound` if no entity has this code.
    fn require_entity_by_code(&self, code: EntityCode) -> Result<&EntityMeta> {
        self.entity_by_code(code)
            .ok_or_else(|| EasyMetaError::EntityNotFound {
                entity: format!("#{}", code),
            })
    }

    /// # Errors
    ///
    /// Returns `EntityNotFound` or `FieldNotFound`.
    fn require_field(&self, entity: &str, field: &str) -> Result<&FieldMeta> {
        self.require_entity(entity)?
            .field(field)
            .ok_or_else(|| EasyMetaError::FieldNotFound {
                entity: entity.to_string(),
                field: field.to_string(),
            })
    }

    /// Entity a reference-typed field points at
    ///
    /// # Errors
    ///
    /// Returns `MissingReferenceTarget` if the field has no target, or
    /// `EntityNotFound` if the target is not in the catalog.
    fn reference_entity(&self, field: &FieldMeta) -> Result<&EntityMeta> {
        let target = field
            .reference
            .as_deref()
            .ok_or_else(|| EasyMetaError::MissingReferenceTarget {
                field: field.qualified_name(),
            })?;
        self.require_entity(target)
    }

    /// # Errors
    ///
    /// Returns `EntityNotFound` if the owning entity is not in the catalog.
    fn owning_entity(&self, field: &FieldMeta) -> Result<&EntityMeta> {
        self.require_entity(&field.owner)
    }

    /// Title field of an entity (designated, else primary key)
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the entity has neither.
    fn name_field<'a>(&self, entity: &'a EntityMeta) -> Result<&'a FieldMeta> {
        entity
            .name_field()
            .ok_or_else(|| EasyMetaError::FieldNotFound {
                entity: entity.name.clone(),
                field: entity
                    .name_field
                    .clone()
                    .unwrap_or_else(|| "<primary>".to_string()),
            })
    }
}

/// In-memory catalog keyed by entity name, with a code index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: HashMap<String, EntityMeta>,
    codes: HashMap<EntityCode, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, replacing any entity with the same name
    pub fn insert_entity(&mut self, entity: EntityMeta) {
        if let Some(previous) = self.entities.get(&entity.name) {
            self.codes.remove(&previous.code);
        }
        self.codes.insert(entity.code, entity.name.clone());
        self.entities.insert(entity.name.clone(), entity);
    }

    pub fn with_entity(mut self, entity: EntityMeta) -> Self {
        self.insert_entity(entity);
        self
    }

    /// Entities in name order
    pub fn entities(&self) -> Vec<&EntityMeta> {
        let mut entities: Vec<_> = self.entities.values().collect();
        entities.sort_by(|a, b| a.name.cmp(&b.name));
        entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl MetadataCatalog for Catalog {
    fn entity(&self, name: &str) -> Option<&EntityMeta> {
        self.entities.get(name)
    }

    fn entity_by_code(&self, code: EntityCode) -> Option<&EntityMeta> {
        self.codes
            .get(&code)
            .and_then(|name| self.entities.get(name))
    }
}
