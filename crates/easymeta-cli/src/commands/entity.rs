//! Entity projection command
//!
//! Usage: easymeta entity <SCHEMA> <ENTITY> [--localized]

use clap::Args;
use easymeta_core::{EasyMetaFactory, MetadataCatalog};

use super::{load, print_json, CommandResult, SchemaArgs};

#[derive(Debug, Args)]
pub struct EntityArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Entity name
    pub entity: String,
}

pub fn execute(args: EntityArgs) -> CommandResult {
    let loaded = load(&args.schema.schema)?;
    let mut factory = EasyMetaFactory::new(&loaded.catalog);
    if args.schema.localized {
        factory = factory.with_labels(&loaded.labels);
    }

    let entity = loaded.catalog.require_entity(&args.entity)?;
    print_json(&factory.entity_projection(entity))
}
