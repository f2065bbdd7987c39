//! Validation engine.

use super::schema::FormSchema;
use super::value::FieldValues;
use serde::Serialize;
use std::collections::BTreeMap;

/// Validation failure messages keyed by field name.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<String, String>);

impl ErrorSet {
    pub fn new() -> Self {
        ErrorSet(BTreeMap::new())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

/// Run every visible field's rules against the values. Each failing field gets
/// exactly one entry, the message of its first failing rule.
///
pub fn validate(schema: &FormSchema, values: &FieldValues) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in schema.visible_fields(values) {
        let value = values.get(field.name);
        if let Some(message) = field.rules.iter().find_map(|r| r.check(value).err()) {
            errors.insert(field.name, message);
        }
    }
    errors
}
