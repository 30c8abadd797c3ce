//! Display type listing
//!
//! Usage: easymeta types <SCHEMA> <ENTITY>
//!
//! Fields that fail to resolve are listed with their error code instead of
//! aborting the listing.

use clap::Args;
use easymeta_core::{EasyMetaFactory, ExError, MetadataCatalog};
use serde::Serialize;

use super::{load, print_json, CommandResult, SchemaArgs};

#[derive(Debug, Args)]
pub struct TypesArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Entity name
    pub entity: String,
}

#[derive(Debug, Serialize)]
struct FieldType {
    field: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

pub fn execute(args: TypesArgs) -> CommandResult {
    let loaded = load(&args.schema.schema)?;
    let factory = EasyMetaFactory::new(&loaded.catalog);
    let entity = loaded.catalog.require_entity(&args.entity)?;

    let rows: Vec<FieldType> = entity
        .fields()
        .map(|field| match factory.display_type(field) {
            Ok(dt) => FieldType {
                field: field.name.clone(),
                display_type: Some(dt.name().to_string()),
                error: None,
            },
            Err(e) => FieldType {
                field: field.name.clone(),
                display_type: None,
                error: Some(ExError::from(e).code()),
            },
        })
        .collect();

    print_json(&rows)
}
