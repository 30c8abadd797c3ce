//! Core types shared across EasyMeta crates
//!
//! This crate provides foundational types used by the resolution core,
//! the schema loader and the logging facility:
//!
//! - **Entity codes**: `EntityCode` and the well-known system entity codes
//! - **Schema constants**: Canonical field keys and event names

pub mod entity_code;
pub mod schema;

pub use entity_code::EntityCode;
