//! Numeric entity identities
//!
//! Every entity in the metadata layer carries a stable numeric code. A few
//! codes are reserved for system entities that the resolution core treats
//! specially when they appear as reference targets.

use serde::{Deserialize, Serialize};

/// Stable numeric identity of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCode(u32);

impl EntityCode {
    /// System pick-list entity (option values of PICKLIST fields)
    pub const PICK_LIST: EntityCode = EntityCode(10);

    /// System classification entity (tree-structured option data)
    pub const CLASSIFICATION: EntityCode = EntityCode(34);

    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for EntityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
