//! Schema loader
//!
//! Turns a validated schema document into the in-memory catalog and label
//! bundle consumed by `EasyMetaFactory`.

use std::path::Path;
use std::time::Instant;

use easymeta_core::{log_op_end, log_op_error, log_op_start};
use easymeta_core::{BundleLabels, Catalog, EntityMeta, FieldMeta};

use crate::errors::Result;
use crate::format_v0::{SchemaEntity, SchemaField, SchemaV0};
use crate::parser::{parse_schema_file, parse_schema_str};

/// Catalog plus localized labels from one schema document
#[derive(Debug, Clone, Default)]
pub struct LoadedSchema {
    pub catalog: Catalog,
    pub labels: BundleLabels,
}

/// Parse, validate and load a schema file
///
/// # Errors
///
/// See [`parse_schema_file`].
pub fn load_schema_file(path: &Path) -> Result<LoadedSchema> {
    log_op_start!("load_schema", path = %path.display());
    let start = Instant::now();

    let schema = parse_schema_file(path).map_err(|e| {
        log_op_error!(
            "load_schema",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;
    let loaded = load(&schema);

    log_op_end!(
        "load_schema",
        duration_ms = start.elapsed().as_millis() as u64,
        entities = loaded.catalog.len()
    );
    Ok(loaded)
}

/// Parse, validate and load a schema document held in memory
///
/// # Errors
///
/// See [`parse_schema_str`].
pub fn load_schema_str(content: &str) -> Result<LoadedSchema> {
    let schema = parse_schema_str(content)?;
    Ok(load(&schema))
}

fn load(schema: &SchemaV0) -> LoadedSchema {
    LoadedSchema {
        catalog: load_catalog(schema),
        labels: load_labels(schema),
    }
}

/// Build the catalog from a validated schema
pub fn load_catalog(schema: &SchemaV0) -> Catalog {
    let mut catalog = Catalog::new();
    for entity in &schema.entities {
        tracing::debug!(
            entity = %entity.name,
            code = entity.code,
            fields = entity.fields.len(),
            "loading entity"
        );
        catalog.insert_entity(to_entity(entity));
    }
    catalog
}

/// Build the label bundle from the schema's `labels` section
pub fn load_labels(schema: &SchemaV0) -> BundleLabels {
    let mut labels = BundleLabels::default();
    for (key, label) in &schema.labels {
        labels.insert(key.clone(), label.clone());
    }
    labels
}

fn to_entity(entity: &SchemaEntity) -> EntityMeta {
    let mut meta = EntityMeta::new(entity.code, entity.name.clone());
    meta.description = entity.description.clone();
    meta.name_field = entity.name_field.clone();
    meta.extra_attrs = entity.extra_attrs.clone();
    for field in &entity.fields {
        meta.add_field(to_field(field));
    }
    meta
}

fn to_field(field: &SchemaField) -> FieldMeta {
    let mut meta = FieldMeta::new(field.name.clone(), field.storage_type)
        .with_flags(field.nullable, field.creatable, field.updatable);
    meta.reference = field.reference.clone();
    meta.description = field.description.clone();
    meta.extra_attrs = field.extra_attrs.clone();
    meta
}
