//! Label and icon resolution interface
//!
//! How labels are localized is outside the resolution core; it only asks a
//! [`LabelProvider`] for the text to show.

use std::collections::HashMap;

use crate::easy::{BaseEasyMeta, EasyEntity, EasyField};

/// Resolve human-readable labels and icons for wrapped descriptors
pub trait LabelProvider: Send + Sync {
    fn entity_label(&self, entity: &EasyEntity<'_>) -> String;

    fn field_label(&self, field: &EasyField<'_>) -> String;

    fn icon(&self, entity: &EasyEntity<'_>) -> String;
}

/// Labels straight from the descriptors: description, else name
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorLabels;

impl LabelProvider for DescriptorLabels {
    fn entity_label(&self, entity: &EasyEntity<'_>) -> String {
        entity.label().to_string()
    }

    fn field_label(&self, field: &EasyField<'_>) -> String {
        field.label().to_string()
    }

    fn icon(&self, entity: &EasyEntity<'_>) -> String {
        entity.icon().to_string()
    }
}

/// A label bundle keyed by `Entity` and `Entity.field`
///
/// Keys missing from the bundle fall back to [`DescriptorLabels`].
#[derive(Debug, Clone, Default)]
pub struct BundleLabels {
    labels: HashMap<String, String>,
}

impl BundleLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(key.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelProvider for BundleLabels {
    fn entity_label(&self, entity: &EasyEntity<'_>) -> String {
        self.labels
            .get(entity.name())
            .cloned()
            .unwrap_or_else(|| DescriptorLabels.entity_label(entity))
    }

    fn field_label(&self, field: &EasyField<'_>) -> String {
        self.labels
            .get(&field.field().qualified_name())
            .cloned()
            .unwrap_or_else(|| DescriptorLabels.field_label(field))
    }

    fn icon(&self, entity: &EasyEntity<'_>) -> String {
        DescriptorLabels.icon(entity)
    }
}
