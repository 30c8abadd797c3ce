//! Presentation-facing wrappers over entity and field descriptors
//!
//! Wrappers borrow the descriptor they were built from and never outlive a
//! single call chain. Label and display type are fixed at construction.

pub mod entity;
pub mod field;

pub use entity::EasyEntity;
pub use field::{EasyField, FieldVariant};

use crate::model::{extra_attrs, EntityMeta, ExtraAttrs, FieldMeta};

/// Capabilities shared by every wrapper
pub trait BaseEasyMeta {
    fn name(&self) -> &str;

    /// Display name recorded on the descriptor, or the raw name
    fn label(&self) -> &str;

    fn extra_attrs(&self) -> &ExtraAttrs;

    fn is_builtin(&self) -> bool;

    fn extra_attr(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra_attrs().get(key)
    }

    fn comments(&self) -> Option<&str> {
        self.extra_attrs().get_str(extra_attrs::COMMENTS)
    }
}

/// An entity or field descriptor
#[derive(Debug, Clone, Copy)]
pub enum Meta<'a> {
    Entity(&'a EntityMeta),
    Field(&'a FieldMeta),
}

impl<'a> From<&'a EntityMeta> for Meta<'a> {
    fn from(entity: &'a EntityMeta) -> Self {
        Meta::Entity(entity)
    }
}

impl<'a> From<&'a FieldMeta> for Meta<'a> {
    fn from(field: &'a FieldMeta) -> Self {
        Meta::Field(field)
    }
}

/// Wrapper over either kind of descriptor
#[derive(Debug, Clone)]
pub enum EasyMeta<'a> {
    Entity(EasyEntity<'a>),
    Field(EasyField<'a>),
}

impl EasyMeta<'_> {
    pub fn as_base(&self) -> &dyn BaseEasyMeta {
        match self {
            EasyMeta::Entity(e) => e as &dyn BaseEasyMeta,
            EasyMeta::Field(f) => f,
        }
    }

    pub fn label(&self) -> &str {
        self.as_base().label()
    }
}
