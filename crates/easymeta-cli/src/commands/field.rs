//! Field projection command
//!
//! Usage: easymeta field <SCHEMA> <ENTITY> <FIELD> [--localized]

use clap::Args;
use easymeta_core::{EasyMetaFactory, MetadataCatalog};

use super::{load, print_json, CommandResult, SchemaArgs};

#[derive(Debug, Args)]
pub struct FieldArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Entity name
    pub entity: String,

    /// Field name
    pub field: String,
}

pub fn execute(args: FieldArgs) -> CommandResult {
    let loaded = load(&args.schema.schema)?;
    let mut factory = EasyMetaFactory::new(&loaded.catalog);
    if args.schema.localized {
        factory = factory.with_labels(&loaded.labels);
    }

    let field = loaded.catalog.require_field(&args.entity, &args.field)?;
    print_json(&factory.field_projection(field)?)
}
