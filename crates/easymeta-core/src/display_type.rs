//! The closed set of presentation type tags
//!
//! Adding a tag is a compile-time change: every `match` over [`DisplayType`]
//! and [`WrapperKind`] must be revisited, which is what keeps resolution and
//! construction exhaustive.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Presentation type of a field, decoupled from its storage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayType {
    Number,
    Decimal,
    Date,
    DateTime,
    Time,
    Text,
    NText,
    Email,
    Url,
    Phone,
    Series,
    Image,
    File,
    PickList,
    Classification,
    Reference,
    N2NReference,
    AnyReference,
    Avatar,
    MultiSelect,
    Bool,
    State,
    BarCode,
    Location,
    Sign,
    Tag,
    Id,
}

/// Wrapper shape a display type is realized by
///
/// Tags that add no capability beyond the base surface share `Scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    Scalar,
    Numeric,
    Temporal,
    Reference,
    AnyReference,
    Id,
    Classification,
    State,
}

impl DisplayType {
    pub const ALL: [DisplayType; 27] = [
        DisplayType::Number,
        DisplayType::Decimal,
        DisplayType::Date,
        DisplayType::DateTime,
        DisplayType::Time,
        DisplayType::Text,
        DisplayType::NText,
        DisplayType::Email,
        DisplayType::Url,
        DisplayType::Phone,
        DisplayType::Series,
        DisplayType::Image,
        DisplayType::File,
        DisplayType::PickList,
        DisplayType::Classification,
        DisplayType::Reference,
        DisplayType::N2NReference,
        DisplayType::AnyReference,
        DisplayType::Avatar,
        DisplayType::MultiSelect,
        DisplayType::Bool,
        DisplayType::State,
        DisplayType::BarCode,
        DisplayType::Location,
        DisplayType::Sign,
        DisplayType::Tag,
        DisplayType::Id,
    ];

    /// Stable wire name, as written in `displayType` overrides
    pub fn name(self) -> &'static str {
        match self {
            DisplayType::Number => "NUMBER",
            DisplayType::Decimal => "DECIMAL",
            DisplayType::Date => "DATE",
            DisplayType::DateTime => "DATETIME",
            DisplayType::Time => "TIME",
            DisplayType::Text => "TEXT",
            DisplayType::NText => "NTEXT",
            DisplayType::Email => "EMAIL",
            DisplayType::Url => "URL",
            DisplayType::Phone => "PHONE",
            DisplayType::Series => "SERIES",
            DisplayType::Image => "IMAGE",
            DisplayType::File => "FILE",
            DisplayType::PickList => "PICKLIST",
            DisplayType::Classification => "CLASSIFICATION",
            DisplayType::Reference => "REFERENCE",
            DisplayType::N2NReference => "N2NREFERENCE",
            DisplayType::AnyReference => "ANYREFERENCE",
            DisplayType::Avatar => "AVATAR",
            DisplayType::MultiSelect => "MULTISELECT",
            DisplayType::Bool => "BOOL",
            DisplayType::State => "STATE",
            DisplayType::BarCode => "BARCODE",
            DisplayType::Location => "LOCATION",
            DisplayType::Sign => "SIGN",
            DisplayType::Tag => "TAG",
            DisplayType::Id => "ID",
        }
    }

    /// Human-readable name of the tag
    pub fn description(self) -> &'static str {
        match self {
            DisplayType::Number => "Number",
            DisplayType::Decimal => "Decimal",
            DisplayType::Date => "Date",
            DisplayType::DateTime => "Date time",
            DisplayType::Time => "Time",
            DisplayType::Text => "Text",
            DisplayType::NText => "Long text",
            DisplayType::Email => "Email",
            DisplayType::Url => "URL",
            DisplayType::Phone => "Phone",
            DisplayType::Series => "Auto number",
            DisplayType::Image => "Image",
            DisplayType::File => "File",
            DisplayType::PickList => "Pick list",
            DisplayType::Classification => "Classification",
            DisplayType::Reference => "Reference",
            DisplayType::N2NReference => "Multi reference",
            DisplayType::AnyReference => "Any reference",
            DisplayType::Avatar => "Avatar",
            DisplayType::MultiSelect => "Multi select",
            DisplayType::Bool => "Boolean",
            DisplayType::State => "State",
            DisplayType::BarCode => "Barcode",
            DisplayType::Location => "Location",
            DisplayType::Sign => "Signature",
            DisplayType::Tag => "Tag",
            DisplayType::Id => "Primary ID",
        }
    }

    /// The wrapper variant this tag is bound to
    pub fn wrapper_kind(self) -> WrapperKind {
        match self {
            DisplayType::Number | DisplayType::Decimal => WrapperKind::Numeric,
            DisplayType::Date | DisplayType::DateTime | DisplayType::Time => WrapperKind::Temporal,
            DisplayType::PickList | DisplayType::Reference | DisplayType::N2NReference => {
                WrapperKind::Reference
            }
            DisplayType::AnyReference => WrapperKind::AnyReference,
            DisplayType::Id => WrapperKind::Id,
            DisplayType::Classification => WrapperKind::Classification,
            DisplayType::State => WrapperKind::State,
            DisplayType::Text
            | DisplayType::NText
            | DisplayType::Email
            | DisplayType::Url
            | DisplayType::Phone
            | DisplayType::Series
            | DisplayType::Image
            | DisplayType::File
            | DisplayType::Avatar
            | DisplayType::MultiSelect
            | DisplayType::Bool
            | DisplayType::BarCode
            | DisplayType::Location
            | DisplayType::Sign
            | DisplayType::Tag => WrapperKind::Scalar,
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a name outside the closed tag set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisplayTypeName(pub String);

impl std::fmt::Display for UnknownDisplayTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown display type '{}'", self.0)
    }
}

impl std::error::Error for UnknownDisplayTypeName {}

impl FromStr for DisplayType {
    type Err = UnknownDisplayTypeName;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayType::ALL
            .into_iter()
            .find(|dt| dt.name() == s)
            .ok_or_else(|| UnknownDisplayTypeName(s.to_string()))
    }
}
