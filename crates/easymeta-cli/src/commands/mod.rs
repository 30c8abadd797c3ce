pub mod entity;
pub mod field;
pub mod label;
pub mod types;

use std::path::{Path, PathBuf};

use clap::Args;
use easymeta_schema::LoadedSchema;
use serde::Serialize;

/// Schema file argument shared by every command
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Path to the schema YAML file
    pub schema: PathBuf,

    /// Use the schema's `labels` section instead of field descriptions
    #[arg(long)]
    pub localized: bool,
}

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn load(path: &Path) -> Result<LoadedSchema, Box<dyn std::error::Error>> {
    Ok(easymeta_schema::load_schema_file(path)?)
}

pub fn print_json<T: Serialize>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
