use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit display-type override, parsed into the closed tag set at resolution
pub const DISPLAY_TYPE: &str = "displayType";
/// Classification usage of a CLASSIFICATION field
pub const CLASSIFICATION_USE: &str = "classificationUse";
/// State-machine definition bound to a STATE field
pub const STATE_CLASS: &str = "stateClass";
/// Icon identifier of an entity
pub const ICON: &str = "icon";
/// Filter applied when picking reference targets
pub const REFERENCE_DATA_FILTER: &str = "referenceDataFilter";
pub const NUMBER_FORMAT: &str = "numberFormat";
pub const DECIMAL_FORMAT: &str = "decimalFormat";
pub const DATE_FORMAT: &str = "dateFormat";
pub const DATETIME_FORMAT: &str = "datetimeFormat";
pub const TIME_FORMAT: &str = "timeFormat";
/// Free-form authoring notes
pub const COMMENTS: &str = "comments";

/// Free-form schema-level attributes attached to an entity or field
///
/// Only `displayType` is interpreted by resolution; every other key is passed
/// through untouched to the wrapper variants that understand it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ExtraAttrs {
    data: BTreeMap<String, serde_json::Value>,
}

impl ExtraAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Get a value only if it is a JSON string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(serde_json::Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for ExtraAttrs {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

impl FromIterator<(String, serde_json::Value)> for ExtraAttrs {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_str_ignores_non_strings() {
        let attrs = ExtraAttrs::new()
            .with(DISPLAY_TYPE, "EMAIL")
            .with("uploadNumber", json!(5));

        assert_eq!(attrs.get_str(DISPLAY_TYPE), Some("EMAIL"));
        assert_eq!(attrs.get_str("uploadNumber"), None);
        assert_eq!(attrs.get("uploadNumber"), Some(&json!(5)));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let attrs = ExtraAttrs::new().with(CLASSIFICATION_USE, "industry");
        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value, json!({ "classificationUse": "industry" }));
    }
}
