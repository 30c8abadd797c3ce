//! Display-type resolution
//!
//! A field resolves to exactly one [`DisplayType`]: an explicit `displayType`
//! override wins, otherwise the storage type decides. There is no fallback
//! tag; an unmapped storage type is an error.

use easymeta_core_types::EntityCode;

use crate::catalog::MetadataCatalog;
use crate::display_type::DisplayType;
use crate::errors::{EasyMetaError, Result};
use crate::model::{extra_attrs, EntityMeta, FieldMeta, StorageType};

/// Tag of an entity wrapper
///
/// Entities have a single wrapper kind; this exists so entity and field
/// wrapping share one construction contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    Entity,
}

pub fn resolve_entity_tag(_entity: &EntityMeta) -> EntityTag {
    EntityTag::Entity
}

/// Resolve the display type of a field
///
/// # Errors
///
/// - `UnknownDisplayType` if the override names a tag outside the closed set
/// - `UnsupportedFieldType` if there is no override and the storage type is unmapped
/// - `MissingReferenceTarget` / `EntityNotFound` if a reference target cannot be read
pub fn resolve_display_type(catalog: &dyn MetadataCatalog, field: &FieldMeta) -> Result<DisplayType> {
    if let Some(dt) = display_type_override(field)? {
        tracing::debug!(
            field = %field.qualified_name(),
            display_type = dt.name(),
            "display type override applied"
        );
        return Ok(dt);
    }

    builtin_display_type(catalog, field)?.ok_or_else(|| EasyMetaError::UnsupportedFieldType {
        field: field.qualified_name(),
        storage_type: field.storage_type.to_string(),
    })
}

/// Parse the explicit override, if the field carries one
///
/// A null value carries no override. Any other non-string value is treated
/// as an unknown name.
///
/// # Errors
///
/// Returns `UnknownDisplayType` if the value is not a member of the closed set.
pub fn display_type_override(field: &FieldMeta) -> Result<Option<DisplayType>> {
    let Some(raw) = field
        .extra_attrs
        .get(extra_attrs::DISPLAY_TYPE)
        .filter(|raw| !raw.is_null())
    else {
        return Ok(None);
    };

    let unknown = || EasyMetaError::UnknownDisplayType {
        field: field.qualified_name(),
        value: match raw.as_str() {
            Some(s) => s.to_string(),
            None => raw.to_string(),
        },
    };

    raw.as_str()
        .ok_or_else(unknown)?
        .parse::<DisplayType>()
        .map(Some)
        .map_err(|_| unknown())
}

/// Map a storage type onto its display type, ignoring overrides
///
/// Returns `Ok(None)` for storage types with no presentation mapping.
///
/// # Errors
///
/// For `reference` fields the target entity is consulted to special-case the
/// pick-list and classification system entities; a missing target is an error.
pub fn builtin_display_type(
    catalog: &dyn MetadataCatalog,
    field: &FieldMeta,
) -> Result<Option<DisplayType>> {
    let dt = match field.storage_type {
        StorageType::Primary => DisplayType::Id,
        StorageType::Reference => {
            let target = catalog.reference_entity(field)?;
            match target.code {
                EntityCode::PICK_LIST => DisplayType::PickList,
                EntityCode::CLASSIFICATION => DisplayType::Classification,
                _ => DisplayType::Reference,
            }
        }
        StorageType::AnyReference => DisplayType::AnyReference,
        StorageType::ReferenceList => DisplayType::N2NReference,
        StorageType::Timestamp => DisplayType::DateTime,
        StorageType::Date => DisplayType::Date,
        StorageType::String => DisplayType::Text,
        StorageType::Text | StorageType::Ntext => DisplayType::NText,
        StorageType::Bool => DisplayType::Bool,
        StorageType::SmallInt | StorageType::Int | StorageType::Long => DisplayType::Number,
        StorageType::Double | StorageType::Decimal => DisplayType::Decimal,
        StorageType::Time | StorageType::Char | StorageType::Binary => return Ok(None),
    };
    Ok(Some(dt))
}
