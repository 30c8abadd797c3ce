use easymeta_core_types::EntityCode;

use super::BaseEasyMeta;
use crate::model::{extra_attrs, EntityMeta, ExtraAttrs};
use crate::resolve::EntityTag;

/// Icon shown for entities that do not configure one
pub const DEFAULT_ICON: &str = "texture";

/// Entity codes below this are reserved for system entities
const SYSTEM_CODE_CEILING: u32 = 100;

/// Wrapper over an entity descriptor
#[derive(Debug, Clone, Copy)]
pub struct EasyEntity<'a> {
    entity: &'a EntityMeta,
}

impl<'a> EasyEntity<'a> {
    pub fn new(entity: &'a EntityMeta) -> Self {
        Self { entity }
    }

    pub fn entity(&self) -> &'a EntityMeta {
        self.entity
    }

    pub fn tag(&self) -> EntityTag {
        EntityTag::Entity
    }

    pub fn code(&self) -> EntityCode {
        self.entity.code
    }

    pub fn icon(&self) -> &'a str {
        self.entity
            .extra_attrs
            .get_str(extra_attrs::ICON)
            .unwrap_or(DEFAULT_ICON)
    }
}

impl BaseEasyMeta for EasyEntity<'_> {
    fn name(&self) -> &str {
        &self.entity.name
    }

    fn label(&self) -> &str {
        self.entity
            .description
            .as_deref()
            .unwrap_or(&self.entity.name)
    }

    fn extra_attrs(&self) -> &ExtraAttrs {
        &self.entity.extra_attrs
    }

    fn is_builtin(&self) -> bool {
        self.entity.code.value() < SYSTEM_CODE_CEILING
    }
}
