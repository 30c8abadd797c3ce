//! EasyMeta CLI
//!
//! Command-line interface for inspecting display metadata of a schema file

use clap::{Parser, Subcommand};
use easymeta_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "easymeta")]
#[command(about = "EasyMeta - Display metadata for entity schemas", long_about = None)]
struct Cli {
    /// Logging profile (dev, prod, test); logging is off when omitted
    #[arg(long, global = true)]
    log: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print an entity projection as JSON
    Entity(commands::entity::EntityArgs),
    /// Print a field projection as JSON
    Field(commands::field::FieldArgs),
    /// Print the label of a field path
    Label(commands::label::LabelArgs),
    /// Print the resolved display type of every field of an entity
    Types(commands::types::TypesArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Entity(args) => commands::entity::execute(args),
        Commands::Field(args) => commands::field::execute(args),
        Commands::Label(args) => commands::label::execute(args),
        Commands::Types(args) => commands::types::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
