//! Field value types.
//!
//! A [`FieldValues`] set is never edited in place by the controller; every
//! change produces a new set via [`on_field_change`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value held by a single form input.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Group(BTreeMap<String, bool>), // Option name -> checked
}

impl FieldValue {
    /// Build a text value.
    ///
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Build a checkbox group with every option unchecked.
    ///
    pub fn unchecked_group(options: &[&str]) -> Self {
        FieldValue::Group(options.iter().map(|o| (o.to_string(), false)).collect())
    }

    /// Return the text content, if this is a text value.
    ///
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Return true if the value carries nothing a user typed or picked.
    /// Whitespace counts as typed text.
    ///
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
            FieldValue::Group(g) => !g.values().any(|checked| *checked),
        }
    }
}

/// Current values of all inputs in a form, keyed by field name.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, FieldValue>);

impl FieldValues {
    /// Return a new empty set.
    ///
    pub fn new() -> Self {
        FieldValues(BTreeMap::new())
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Return the text of a field, or an empty string when it is missing or
    /// not a text value.
    ///
    pub fn text(&self, field: &str) -> &str {
        self.get(field).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Return a copy of this set with one field replaced.
    ///
    pub fn with(&self, field: &str, value: FieldValue) -> Self {
        let mut next = self.0.clone();
        next.insert(field.to_string(), value);
        FieldValues(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        FieldValues(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Apply a single edit, returning the updated set. The input set is left
/// untouched.
///
pub fn on_field_change(values: &FieldValues, field: &str, value: FieldValue) -> FieldValues {
    values.with(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_field_change_replaces_value() {
        let values: FieldValues = [("name", FieldValue::text("Ada"))].into_iter().collect();
        let updated = on_field_change(&values, "name", FieldValue::text("Grace"));
        assert_eq!(updated.text("name"), "Grace");
        assert_eq!(values.text("name"), "Ada");
    }

    #[test]
    fn test_on_field_change_adds_missing_field() {
        let values = FieldValues::new();
        let updated = on_field_change(&values, "email", FieldValue::text("a@b.co"));
        assert_eq!(updated.len(), 1);
        assert!(values.is_empty());
    }

    #[test]
    fn test_text_of_missing_or_non_text_field_is_empty() {
        let values: FieldValues = [("flag", FieldValue::Flag(true))].into_iter().collect();
        assert_eq!(values.text("flag"), "");
        assert_eq!(values.text("missing"), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::text("").is_blank());
        assert!(!FieldValue::text("   ").is_blank());
        assert!(!FieldValue::text(" x ").is_blank());
        assert!(FieldValue::unchecked_group(&["CSS", "Ruby"]).is_blank());
        assert!(FieldValue::Flag(false).is_blank());
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let json = r#"{"name":"Bo","subscribed":true,"skills":{"CSS":true,"Ruby":false}}"#;
        let values: FieldValues = serde_json::from_str(json).unwrap();
        assert_eq!(values.text("name"), "Bo");
        assert_eq!(values.get("subscribed"), Some(&FieldValue::Flag(true)));
        match values.get("skills") {
            Some(FieldValue::Group(g)) => assert_eq!(g.get("CSS"), Some(&true)),
            other => panic!("unexpected value {:?}", other),
        }
    }
}
