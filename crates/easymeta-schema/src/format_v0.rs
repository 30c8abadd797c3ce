//! Schema Format v0
//!
//! Defines the YAML structure for entity and field metadata

use std::collections::BTreeMap;

use easymeta_core::{ExtraAttrs, StorageType};
use serde::{Deserialize, Serialize};

/// Top-level schema document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Entities in the catalog
    pub entities: Vec<SchemaEntity>,

    /// Localized labels keyed `Entity` or `Entity.field`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// Entity definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaEntity {
    /// Numeric entity code, unique across the document
    pub code: u32,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Designated title field
    #[serde(default)]
    pub name_field: Option<String>,

    #[serde(default)]
    pub extra_attrs: ExtraAttrs,

    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

/// Field definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,

    /// Storage type code, e.g. `reference` or `small_int`
    #[serde(rename = "type")]
    pub storage_type: StorageType,

    /// Target entity for reference-typed fields
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default = "default_true")]
    pub nullable: bool,

    #[serde(default = "default_true")]
    pub creatable: bool,

    #[serde(default = "default_true")]
    pub updatable: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub extra_attrs: ExtraAttrs,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_schema() {
        let yaml = r#"
schema_version: 0
entities:
  - code: 1001
    name: Account
    fields:
      - name: accountId
        type: primary
"#;

        let schema: SchemaV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.schema_version, 0);
        assert_eq!(schema.entities.len(), 1);
        assert_eq!(schema.entities[0].code, 1001);
        assert_eq!(schema.entities[0].fields[0].storage_type, StorageType::Primary);
        assert!(schema.labels.is_empty());
    }

    #[test]
    fn test_field_flags_default_to_true() {
        let yaml = r#"
name: title
type: string
updatable: false
"#;

        let field: SchemaField = serde_yaml::from_str(yaml).unwrap();
        assert!(field.nullable);
        assert!(field.creatable);
        assert!(!field.updatable);
        assert!(field.extra_attrs.is_empty());
    }

    #[test]
    fn test_extra_attrs_keep_structured_values() {
        let yaml = r#"
name: industry
type: reference
reference: Classification
extra_attrs:
  classificationUse:
    level: 2
    open: true
"#;

        let field: SchemaField = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            field.extra_attrs.get("classificationUse"),
            Some(&serde_json::json!({ "level": 2, "open": true }))
        );
    }

    #[test]
    fn test_unknown_storage_type_rejected() {
        let yaml = r#"
name: blob
type: blobby
"#;

        assert!(serde_yaml::from_str::<SchemaField>(yaml).is_err());
    }
}
