use serde::{Deserialize, Serialize};

/// Persistence-layer type code of a field
///
/// Not every storage type has a presentation mapping; see
/// [`crate::resolve::builtin_display_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Primary,
    Reference,
    AnyReference,
    ReferenceList,
    Timestamp,
    Date,
    Time,
    String,
    Text,
    Ntext,
    Bool,
    SmallInt,
    Int,
    Long,
    Double,
    Decimal,
    Char,
    Binary,
}

impl StorageType {
    pub const ALL: [StorageType; 18] = [
        StorageType::Primary,
        StorageType::Reference,
        StorageType::AnyReference,
        StorageType::ReferenceList,
        StorageType::Timestamp,
        StorageType::Date,
        StorageType::Time,
        StorageType::String,
        StorageType::Text,
        StorageType::Ntext,
        StorageType::Bool,
        StorageType::SmallInt,
        StorageType::Int,
        StorageType::Long,
        StorageType::Double,
        StorageType::Decimal,
        StorageType::Char,
        StorageType::Binary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StorageType::Primary => "primary",
            StorageType::Reference => "reference",
            StorageType::AnyReference => "any_reference",
            StorageType::ReferenceList => "reference_list",
            StorageType::Timestamp => "timestamp",
            StorageType::Date => "date",
            StorageType::Time => "time",
            StorageType::String => "string",
            StorageType::Text => "text",
            StorageType::Ntext => "ntext",
            StorageType::Bool => "bool",
            StorageType::SmallInt => "small_int",
            StorageType::Int => "int",
            StorageType::Long => "long",
            StorageType::Double => "double",
            StorageType::Decimal => "decimal",
            StorageType::Char => "char",
            StorageType::Binary => "binary",
        }
    }

    /// Storage types whose values point at rows of a single target entity
    pub fn requires_reference_target(self) -> bool {
        matches!(self, StorageType::Reference | StorageType::ReferenceList)
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_serde() {
        for ty in StorageType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.name()));
        }
    }
}
