//! EasyMeta Schema - YAML schema documents for the metadata catalog
//!
//! Provides:
//! - Schema Format v0 document structure
//! - YAML parser with validation
//! - Loader building an in-memory catalog and label bundle

pub mod errors;
pub mod format_v0;
pub mod loader;
pub mod parser;

// Re-export key types
pub use errors::Result;
pub use format_v0::SchemaV0;
pub use loader::{load_catalog, load_labels, load_schema_file, load_schema_str, LoadedSchema};
pub use parser::{parse_schema_file, parse_schema_str};
