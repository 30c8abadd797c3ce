//! Schema parser with validation
//!
//! Parses YAML and validates schema version, name and code uniqueness, and
//! referential integrity between fields and entities

use crate::errors::{entity_validation, io_error, schema_validation, Result};
use crate::format_v0::SchemaV0;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Parse a schema file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `InvalidInput` if it fails to
/// parse or validate.
pub fn parse_schema_file(path: &Path) -> Result<SchemaV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("schema_read", e))?;

    parse_schema_str(&content)
}

/// Parse a schema from a string
///
/// # Errors
///
/// Returns `InvalidInput` if the YAML fails to parse or validate.
pub fn parse_schema_str(content: &str) -> Result<SchemaV0> {
    let schema: SchemaV0 = serde_yaml::from_str(content)
        .map_err(|e| schema_validation(&format!("YAML parse error: {}", e)))?;

    validate_schema(&schema)?;

    Ok(schema)
}

/// Validate a parsed schema
fn validate_schema(schema: &SchemaV0) -> Result<()> {
    if schema.schema_version != 0 {
        return Err(schema_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            schema.schema_version
        )));
    }

    // Entity names and codes are both lookup keys
    let mut codes: HashMap<u32, &str> = HashMap::new();
    let mut names = HashSet::new();
    for entity in &schema.entities {
        if !names.insert(entity.name.as_str()) {
            return Err(entity_validation(
                &entity.name,
                &format!("Duplicate entity name {}", entity.name),
            ));
        }
        if let Some(previous) = codes.insert(entity.code, &entity.name) {
            return Err(entity_validation(
                &entity.name,
                &format!(
                    "Duplicate entity code {} (also used by {})",
                    entity.code, previous
                ),
            ));
        }
    }

    for entity in &schema.entities {
        let mut field_names = HashSet::new();
        for field in &entity.fields {
            if !field_names.insert(field.name.as_str()) {
                return Err(entity_validation(
                    &entity.name,
                    &format!("Duplicate field name {} in entity {}", field.name, entity.name),
                ));
            }

            match &field.reference {
                Some(target) if !names.contains(target.as_str()) => {
                    return Err(entity_validation(
                        &entity.name,
                        &format!(
                            "Field {}.{} references non-existent entity {}",
                            entity.name, field.name, target
                        ),
                    ));
                }
                None if field.storage_type.requires_reference_target() => {
                    return Err(entity_validation(
                        &entity.name,
                        &format!(
                            "Field {}.{} of type {} has no reference target",
                            entity.name, field.name, field.storage_type
                        ),
                    ));
                }
                _ => {}
            }
        }

        if let Some(name_field) = &entity.name_field {
            if !field_names.contains(name_field.as_str()) {
                return Err(entity_validation(
                    &entity.name,
                    &format!(
                        "Name field {} does not exist in entity {}",
                        name_field, entity.name
                    ),
                ));
            }
        }
    }

    Ok(())
}
