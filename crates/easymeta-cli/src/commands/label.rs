//! Label path command
//!
//! Usage: easymeta label <SCHEMA> <ENTITY> <PATH> [--localized]

use clap::Args;
use easymeta_core::{EasyMetaFactory, MetadataCatalog};

use super::{load, CommandResult, SchemaArgs};

#[derive(Debug, Args)]
pub struct LabelArgs {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Entity name
    pub entity: String,

    /// Field path of one or two segments, e.g. `owningUser.fullName`
    pub path: String,
}

pub fn execute(args: LabelArgs) -> CommandResult {
    let loaded = load(&args.schema.schema)?;
    let mut factory = EasyMetaFactory::new(&loaded.catalog);
    if args.schema.localized {
        factory = factory.with_labels(&loaded.labels);
    }

    let entity = loaded.catalog.require_entity(&args.entity)?;
    println!("{}", factory.label_path(entity, &args.path)?);
    Ok(())
}
