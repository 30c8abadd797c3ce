use super::BaseEasyMeta;
use crate::display_type::{DisplayType, WrapperKind};
use crate::errors::{EasyMetaError, Result};
use crate::model::{extra_attrs, ExtraAttrs, FieldMeta};

/// Tag-specific payload of a field wrapper
///
/// One variant per [`WrapperKind`]; tags without extra capability share
/// `Scalar`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldVariant<'a> {
    Scalar,
    Numeric { format: &'a str },
    Temporal { format: &'a str },
    Reference { target: &'a str },
    AnyReference,
    Id { owner: &'a str },
    Classification { usage: Option<&'a serde_json::Value> },
    State { state_class: Option<&'a str> },
}

impl FieldVariant<'_> {
    pub fn kind(&self) -> WrapperKind {
        match self {
            FieldVariant::Scalar => WrapperKind::Scalar,
            FieldVariant::Numeric { .. } => WrapperKind::Numeric,
            FieldVariant::Temporal { .. } => WrapperKind::Temporal,
            FieldVariant::Reference { .. } => WrapperKind::Reference,
            FieldVariant::AnyReference => WrapperKind::AnyReference,
            FieldVariant::Id { .. } => WrapperKind::Id,
            FieldVariant::Classification { .. } => WrapperKind::Classification,
            FieldVariant::State { .. } => WrapperKind::State,
        }
    }
}

/// Extra-attribute key and default of a formatted display type
fn format_setting(display_type: DisplayType) -> Option<(&'static str, &'static str)> {
    match display_type {
        DisplayType::Number => Some((extra_attrs::NUMBER_FORMAT, "##,##0")),
        DisplayType::Decimal => Some((extra_attrs::DECIMAL_FORMAT, "##,##0.00")),
        DisplayType::Date => Some((extra_attrs::DATE_FORMAT, "yyyy-MM-dd")),
        DisplayType::DateTime => Some((extra_attrs::DATETIME_FORMAT, "yyyy-MM-dd HH:mm:ss")),
        DisplayType::Time => Some((extra_attrs::TIME_FORMAT, "HH:mm:ss")),
        _ => None,
    }
}

/// Wrapper over a field descriptor and its resolved display type
#[derive(Debug, Clone)]
pub struct EasyField<'a> {
    field: &'a FieldMeta,
    display_type: DisplayType,
    variant: FieldVariant<'a>,
}

impl<'a> EasyField<'a> {
    /// Build the wrapper variant bound to `display_type`
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError` if the descriptor lacks data the bound
    /// variant needs (a reference variant without a target, an ID variant
    /// without an owning entity).
    pub fn new(field: &'a FieldMeta, display_type: DisplayType) -> Result<Self> {
        let construction_error = |reason: &str| EasyMetaError::ConstructionError {
            field: field.qualified_name(),
            display_type: display_type.name().to_string(),
            reason: reason.to_string(),
        };

        let variant = match display_type.wrapper_kind() {
            WrapperKind::Scalar => FieldVariant::Scalar,
            WrapperKind::Numeric | WrapperKind::Temporal => {
                let (key, default) = format_setting(display_type)
                    .ok_or_else(|| construction_error("no format binding"))?;
                let format = field.extra_attrs.get_str(key).unwrap_or(default);
                if display_type.wrapper_kind() == WrapperKind::Numeric {
                    FieldVariant::Numeric { format }
                } else {
                    FieldVariant::Temporal { format }
                }
            }
            WrapperKind::Reference => FieldVariant::Reference {
                target: field
                    .reference
                    .as_deref()
                    .ok_or_else(|| construction_error("field has no reference target"))?,
            },
            WrapperKind::AnyReference => FieldVariant::AnyReference,
            WrapperKind::Id => {
                if field.owner.is_empty() {
                    return Err(construction_error("field has no owning entity"));
                }
                FieldVariant::Id {
                    owner: &field.owner,
                }
            }
            WrapperKind::Classification => FieldVariant::Classification {
                usage: field.extra_attrs.get(extra_attrs::CLASSIFICATION_USE),
            },
            WrapperKind::State => FieldVariant::State {
                state_class: field.extra_attrs.get_str(extra_attrs::STATE_CLASS),
            },
        };

        Ok(Self {
            field,
            display_type,
            variant,
        })
    }

    pub fn field(&self) -> &'a FieldMeta {
        self.field
    }

    pub fn display_type(&self) -> DisplayType {
        self.display_type
    }

    pub fn variant(&self) -> &FieldVariant<'a> {
        &self.variant
    }

    pub fn nullable(&self) -> bool {
        self.field.nullable
    }

    pub fn creatable(&self) -> bool {
        self.field.creatable
    }

    pub fn updatable(&self) -> bool {
        self.field.updatable
    }

    /// Target entity name of REFERENCE, N2NREFERENCE and PICKLIST fields
    pub fn reference_entity(&self) -> Option<&'a str> {
        match self.variant {
            FieldVariant::Reference { target } => Some(target),
            _ => None,
        }
    }

    /// Filter applied when picking reference targets
    pub fn data_filter(&self) -> Option<&'a serde_json::Value> {
        match self.variant {
            FieldVariant::Reference { .. } => self
                .field
                .extra_attrs
                .get(extra_attrs::REFERENCE_DATA_FILTER),
            _ => None,
        }
    }

    /// Entity an ID field identifies
    pub fn owner_entity(&self) -> Option<&'a str> {
        match self.variant {
            FieldVariant::Id { owner } => Some(owner),
            _ => None,
        }
    }

    pub fn classification_use(&self) -> Option<&'a serde_json::Value> {
        match self.variant {
            FieldVariant::Classification { usage } => usage,
            _ => None,
        }
    }

    pub fn state_class(&self) -> Option<&'a str> {
        match self.variant {
            FieldVariant::State { state_class } => state_class,
            _ => None,
        }
    }

    /// Display format of numeric and temporal fields
    pub fn format(&self) -> Option<&'a str> {
        match self.variant {
            FieldVariant::Numeric { format } | FieldVariant::Temporal { format } => Some(format),
            _ => None,
        }
    }
}

impl BaseEasyMeta for EasyField<'_> {
    fn name(&self) -> &str {
        &self.field.name
    }

    fn label(&self) -> &str {
        self.field
            .description
            .as_deref()
            .unwrap_or(&self.field.name)
    }

    fn extra_attrs(&self) -> &ExtraAttrs {
        &self.field.extra_attrs
    }

    fn is_builtin(&self) -> bool {
        self.field.is_builtin()
    }
}
