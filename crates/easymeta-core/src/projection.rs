//! Flat, serializable views of entities and fields for presentation layers
//!
//! Field projections are additive: tag-dependent keys are simply absent when
//! they do not apply.

use serde::Serialize;

use crate::display_type::DisplayType;
use crate::easy::{BaseEasyMeta, EasyEntity};
use crate::errors::Result;
use crate::factory::EasyMetaFactory;
use crate::model::{EntityMeta, FieldMeta};

/// `{ name, label, icon }` of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityProjection {
    pub name: String,
    pub label: String,
    pub icon: String,
}

/// Referenced entity and the display type of its name field
///
/// Serializes as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefTarget(pub String, pub DisplayType);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldProjection {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub display_type: DisplayType,
    pub nullable: bool,
    pub creatable: bool,
    pub updatable: bool,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<RefTarget>,
    #[serde(rename = "stateClass", skip_serializing_if = "Option::is_none")]
    pub state_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<serde_json::Value>,
}

impl EntityProjection {
    /// # Errors
    ///
    /// Returns `Serialization` if the projection cannot be rendered.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FieldProjection {
    /// # Errors
    ///
    /// Returns `Serialization` if the projection cannot be rendered.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub(crate) fn build_entity_projection(
    factory: &EasyMetaFactory<'_>,
    entity: &EntityMeta,
) -> EntityProjection {
    let easy = EasyEntity::new(entity);
    EntityProjection {
        name: easy.name().to_string(),
        label: factory.labels().entity_label(&easy),
        icon: factory.labels().icon(&easy),
    }
}

pub(crate) fn build_field_projection(
    factory: &EasyMetaFactory<'_>,
    field: &FieldMeta,
) -> Result<FieldProjection> {
    let easy = factory.wrap_field(field)?;
    let dt = easy.display_type();

    let mut projection = FieldProjection {
        name: field.name.clone(),
        label: factory.labels().field_label(&easy),
        display_type: dt,
        nullable: easy.nullable(),
        creatable: easy.creatable(),
        updatable: easy.updatable(),
        reference: None,
        state_class: None,
        classification: None,
    };

    if matches!(dt, DisplayType::Reference | DisplayType::N2NReference) {
        let target = factory.catalog().reference_entity(field)?;
        projection.reference = Some(ref_target(factory, target)?);
    }

    // ID, STATE and CLASSIFICATION are checked as one chain; ID wins
    if dt == DisplayType::Id {
        let owner = factory.catalog().owning_entity(field)?;
        projection.reference = Some(ref_target(factory, owner)?);
    } else if dt == DisplayType::State {
        projection.state_class = Some(factory.states().state_class(&easy)?);
    } else if dt == DisplayType::Classification {
        projection.classification = easy.classification_use().cloned();
    }

    Ok(projection)
}

fn ref_target(factory: &EasyMetaFactory<'_>, entity: &EntityMeta) -> Result<RefTarget> {
    let name_field = factory.catalog().name_field(entity)?;
    let name_type = factory.display_type(name_field)?;
    Ok(RefTarget(entity.name.clone(), name_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_projection_omits_inapplicable_keys() {
        let projection = FieldProjection {
            name: "title".to_string(),
            label: "Title".to_string(),
            display_type: DisplayType::Text,
            nullable: true,
            creatable: true,
            updatable: false,
            reference: None,
            state_class: None,
            classification: None,
        };
        assert_eq!(
            projection.to_json().unwrap(),
            json!({
                "name": "title",
                "label": "Title",
                "type": "TEXT",
                "nullable": true,
                "creatable": true,
                "updatable": false,
            })
        );
    }

    #[test]
    fn test_ref_serializes_as_pair() {
        let value = serde_json::to_value(RefTarget("Department".to_string(), DisplayType::Text)).unwrap();
        assert_eq!(value, json!(["Department", "TEXT"]));
    }
}
