//! Entry point tying resolution, construction, labels and projection together
//!
//! Every operation is a pure function of the catalog and the collaborators
//! the factory was built with; nothing is cached between calls.

use std::time::Instant;

use easymeta_core_types::EntityCode;

use crate::catalog::MetadataCatalog;
use crate::display_type::DisplayType;
use crate::easy::{EasyEntity, EasyField, EasyMeta, Meta};
use crate::errors::{EasyMetaError, Result};
use crate::label::{DescriptorLabels, LabelProvider};
use crate::model::{EntityMeta, FieldMeta};
use crate::projection::{self, EntityProjection, FieldProjection};
use crate::resolve;
use crate::state::{ExtraAttrStateResolver, StateResolver};
use crate::{log_op_end, log_op_error, log_op_start};

/// Most segments a label path may have
const MAX_PATH_SEGMENTS: usize = 2;

#[derive(Clone, Copy)]
pub struct EasyMetaFactory<'a> {
    catalog: &'a dyn MetadataCatalog,
    labels: &'a dyn LabelProvider,
    states: &'a dyn StateResolver,
}

impl<'a> EasyMetaFactory<'a> {
    /// Factory with descriptor labels and `stateClass` state lookup
    pub fn new(catalog: &'a dyn MetadataCatalog) -> Self {
        Self {
            catalog,
            labels: &DescriptorLabels,
            states: &ExtraAttrStateResolver,
        }
    }

    pub fn with_labels(mut self, labels: &'a dyn LabelProvider) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_state_resolver(mut self, states: &'a dyn StateResolver) -> Self {
        self.states = states;
        self
    }

    pub fn catalog(&self) -> &'a dyn MetadataCatalog {
        self.catalog
    }

    pub fn labels(&self) -> &'a dyn LabelProvider {
        self.labels
    }

    pub fn states(&self) -> &'a dyn StateResolver {
        self.states
    }

    // ===== Wrapping =====

    /// # Errors
    ///
    /// Returns `EntityNotFound` if the catalog has no such entity.
    pub fn entity(&self, name: &str) -> Result<EasyEntity<'a>> {
        self.catalog.require_entity(name).map(EasyEntity::new)
    }

    /// # Errors
    ///
    /// Returns `EntityNotFound` if the catalog has no entity with this code.
    pub fn entity_by_code(&self, code: EntityCode) -> Result<EasyEntity<'a>> {
        self.catalog
            .require_entity_by_code(code)
            .map(EasyEntity::new)
    }

    pub fn wrap_entity<'f>(&self, entity: &'f EntityMeta) -> EasyEntity<'f> {
        EasyEntity::new(entity)
    }

    /// Build the wrapper bound to an already-resolved display type
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError` if the bound variant cannot be built.
    pub fn construct<'f>(&self, field: &'f FieldMeta, display_type: DisplayType) -> Result<EasyField<'f>> {
        EasyField::new(field, display_type)
    }

    /// Resolve a field's display type and wrap it
    ///
    /// # Errors
    ///
    /// Any resolution error, or `ConstructionError`.
    pub fn wrap_field<'f>(&self, field: &'f FieldMeta) -> Result<EasyField<'f>> {
        let display_type = resolve::resolve_display_type(self.catalog, field)?;
        self.construct(field, display_type)
    }

    /// # Errors
    ///
    /// Entities always wrap; fields fail as [`Self::wrap_field`] does.
    pub fn resolve_and_wrap<'f>(&self, meta: Meta<'f>) -> Result<EasyMeta<'f>> {
        match meta {
            Meta::Entity(entity) => Ok(EasyMeta::Entity(self.wrap_entity(entity))),
            Meta::Field(field) => self.wrap_field(field).map(EasyMeta::Field),
        }
    }

    /// # Errors
    ///
    /// Any resolution error, or `ConstructionError`.
    pub fn display_type(&self, field: &FieldMeta) -> Result<DisplayType> {
        Ok(self.wrap_field(field)?.display_type())
    }

    // ===== Labels =====

    /// # Errors
    ///
    /// Fails only for fields, as [`Self::wrap_field`] does.
    pub fn label(&self, meta: Meta<'_>) -> Result<String> {
        Ok(match self.resolve_and_wrap(meta)? {
            EasyMeta::Entity(entity) => self.labels.entity_label(&entity),
            EasyMeta::Field(field) => self.labels.field_label(&field),
        })
    }

    /// # Errors
    ///
    /// Returns `EntityNotFound` if the catalog has no such entity.
    pub fn entity_label(&self, name: &str) -> Result<String> {
        let entity = self.entity(name)?;
        Ok(self.labels.entity_label(&entity))
    }

    /// Label of a field path of at most two segments, e.g. `owningUser.fullName`
    ///
    /// Two segments produce `"<first label>.<second label>"`.
    ///
    /// # Errors
    ///
    /// Returns `PathResolution` if a segment names no field on its entity, if
    /// the path has more than two segments, or if the first field of a
    /// two-segment path is not a reference.
    pub fn label_path(&self, entity: &EntityMeta, path: &str) -> Result<String> {
        log_op_start!("label_path", entity = %entity.name, path = path);
        let start = Instant::now();

        let label = self.label_path_impl(entity, path).map_err(|e| {
            log_op_error!(
                "label_path",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "label_path",
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(label)
    }

    fn label_path_impl(&self, entity: &EntityMeta, path: &str) -> Result<String> {
        let segments: Vec<&str> = path.split('.').collect();
        let path_error = |on: &EntityMeta, segment: &str, reason: &str| EasyMetaError::PathResolution {
            entity: on.name.clone(),
            path: path.to_string(),
            segment: segment.to_string(),
            reason: reason.to_string(),
        };

        if let Some(extra) = segments.get(MAX_PATH_SEGMENTS) {
            return Err(path_error(entity, extra, "path has more than two segments"));
        }

        let first = entity
            .field(segments[0])
            .ok_or_else(|| path_error(entity, segments[0], "no such field"))?;
        let first_label = self.labels.field_label(&self.wrap_field(first)?);

        let Some(second_name) = segments.get(1) else {
            return Ok(first_label);
        };

        if !first.storage_type.requires_reference_target() {
            return Err(path_error(entity, segments[0], "not a reference field"));
        }
        let ref_entity = self.catalog.reference_entity(first)?;
        let second = ref_entity
            .field(second_name)
            .ok_or_else(|| path_error(ref_entity, second_name, "no such field"))?;
        let second_label = self.labels.field_label(&self.wrap_field(second)?);

        Ok(format!("{}.{}", first_label, second_label))
    }

    // ===== Projections =====

    pub fn entity_projection(&self, entity: &EntityMeta) -> EntityProjection {
        log_op_start!("entity_projection", entity = %entity.name);
        let start = Instant::now();

        let projection = projection::build_entity_projection(self, entity);

        log_op_end!(
            "entity_projection",
            duration_ms = start.elapsed().as_millis() as u64
        );
        projection
    }

    /// # Errors
    ///
    /// Any failure of a sub-resolution fails the whole projection.
    pub fn field_projection(&self, field: &FieldMeta) -> Result<FieldProjection> {
        log_op_start!(
            "field_projection",
            entity = %field.owner,
            field = %field.name
        );
        let start = Instant::now();

        let projection = projection::build_field_projection(self, field).map_err(|e| {
            log_op_error!(
                "field_projection",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "field_projection",
            duration_ms = start.elapsed().as_millis() as u64,
            display_type = projection.display_type.name()
        );
        Ok(projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::StorageType;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_entity(
                EntityMeta::new(1001, "Account")
                    .with_field(FieldMeta::new("accountId", StorageType::Primary))
                    .with_field(FieldMeta::new("title", StorageType::String).with_description("Title"))
                    .with_field(FieldMeta::new("anything", StorageType::AnyReference)),
            )
    }

    #[test]
    fn test_entity_lookup() {
        let catalog = catalog();
        let factory = EasyMetaFactory::new(&catalog);
        assert_eq!(factory.entity_by_code(EntityCode::new(1001)).unwrap().code(), EntityCode::new(1001));
        assert!(matches!(
            factory.entity("Nope"),
            Err(EasyMetaError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn test_label_of_meta() {
        let catalog = catalog();
        let factory = EasyMetaFactory::new(&catalog);
        let account = catalog.entity("Account").unwrap();
        assert_eq!(factory.label(Meta::Entity(account)).unwrap(), "Account");
        assert_eq!(
            factory.label(Meta::Field(account.field("title").unwrap())).unwrap(),
            "Title"
        );
        assert_eq!(factory.entity_label("Account").unwrap(), "Account");
    }

    #[test]
    fn test_label_path_rejects_three_segments() {
        let catalog = catalog();
        let factory = EasyMetaFactory::new(&catalog);
        let account = catalog.entity("Account").unwrap();
        let err = factory.label_path(account, "title.a.b").unwrap_err();
        assert!(matches!(
            err,
            EasyMetaError::PathResolution { ref segment, .. } if segment == "b"
        ));
    }

    #[test]
    fn test_label_path_any_reference_cannot_descend() {
        let catalog = catalog();
        let factory = EasyMetaFactory::new(&catalog);
        let account = catalog.entity("Account").unwrap();
        let err = factory.label_path(account, "anything.name").unwrap_err();
        assert!(matches!(
            err,
            EasyMetaError::PathResolution { ref segment, ref reason, .. }
                if segment == "anything" && reason == "not a reference field"
        ));
    }
}
