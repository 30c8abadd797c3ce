//! State-machine lookup interface for STATE fields

use crate::easy::EasyField;
use crate::errors::{EasyMetaError, Result};

/// Resolve the fully-qualified state-machine definition bound to a field
pub trait StateResolver: Send + Sync {
    /// # Errors
    ///
    /// Returns `StateClassUnavailable` if no definition is bound.
    fn state_class(&self, field: &EasyField<'_>) -> Result<String>;
}

/// Reads the definition from the field's `stateClass` extra attribute
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraAttrStateResolver;

impl StateResolver for ExtraAttrStateResolver {
    fn state_class(&self, field: &EasyField<'_>) -> Result<String> {
        field
            .state_class()
            .map(str::to_string)
            .ok_or_else(|| EasyMetaError::StateClassUnavailable {
                field: field.field().qualified_name(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_type::DisplayType;
    use crate::model::{extra_attrs, FieldMeta, StorageType};

    #[test]
    fn test_reads_state_class_attr() {
        let field = FieldMeta::new("stage", StorageType::SmallInt)
            .with_extra(extra_attrs::STATE_CLASS, "com.example.state.DealStage");
        let easy = EasyField::new(&field, DisplayType::State).unwrap();
        assert_eq!(
            ExtraAttrStateResolver.state_class(&easy),
            Ok("com.example.state.DealStage".to_string())
        );
    }

    #[test]
    fn test_missing_state_class() {
        let field = FieldMeta::new("stage", StorageType::SmallInt);
        let easy = EasyField::new(&field, DisplayType::State).unwrap();
        assert_eq!(
            ExtraAttrStateResolver.state_class(&easy),
            Err(EasyMetaError::StateClassUnavailable {
                field: "stage".to_string()
            })
        );
    }
}
