//! Form schemas and the shared visibility predicate table.
//!
//! Every conditional field carries a [`Condition`]. The same condition gates
//! both whether the field is rendered and whether its rules run, so the two
//! policies cannot drift apart.

use super::rules::Rule;
use super::value::{FieldValue, FieldValues};
use super::FormKind;

/// Input widget kind for a field.
///
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
    Checklist(&'static [&'static str]),
}

impl FieldKind {
    /// Return the options offered by a choice or checklist field.
    ///
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Text => &[],
            FieldKind::Choice(options) | FieldKind::Checklist(options) => *options,
        }
    }
}

/// Predicate over the current values deciding whether a field applies.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub field: &'static str,
    pub any_of: &'static [&'static str],
}

impl Condition {
    /// Holds when `field` currently equals one of `any_of`.
    ///
    pub const fn any_of(field: &'static str, any_of: &'static [&'static str]) -> Self {
        Condition { field, any_of }
    }

    pub fn holds(&self, values: &FieldValues) -> bool {
        let current = values.text(self.field);
        self.any_of.iter().any(|v| *v == current)
    }
}

/// Declaration of a single form field.
///
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: Vec<Rule>,
    pub shown_when: Option<Condition>,
    pub default: Option<&'static str>,
    pub unit: Option<&'static str>, // Appended to the value on display
}

impl FieldSpec {
    /// Declare an unconditional text field without rules.
    ///
    pub fn text(name: &'static str, label: &'static str) -> Self {
        FieldSpec {
            name,
            label,
            kind: FieldKind::Text,
            rules: vec![],
            shown_when: None,
            default: None,
            unit: None,
        }
    }

    pub fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        FieldSpec {
            kind: FieldKind::Choice(options),
            ..FieldSpec::text(name, label)
        }
    }

    pub fn checklist(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        FieldSpec {
            kind: FieldKind::Checklist(options),
            ..FieldSpec::text(name, label)
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn shown_when(mut self, condition: Condition) -> Self {
        self.shown_when = Some(condition);
        self
    }

    pub fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Return the label shown above the input, with the unit if any.
    ///
    pub fn input_label(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} ({})", self.label, unit),
            None => self.label.to_string(),
        }
    }

    /// Return true if the field applies to the given values.
    ///
    pub fn is_visible(&self, values: &FieldValues) -> bool {
        self.shown_when
            .as_ref()
            .map(|c| c.holds(values))
            .unwrap_or(true)
    }

    /// Return the value the field starts with.
    ///
    pub fn initial_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Checklist(options) => FieldValue::unchecked_group(options),
            _ => FieldValue::text(self.default.unwrap_or("")),
        }
    }
}

/// Ordered set of fields making up one form.
///
#[derive(Clone, Debug, PartialEq)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(kind: FormKind, title: &'static str, fields: Vec<FieldSpec>) -> Self {
        FormSchema {
            kind,
            title,
            fields,
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Build the value set a fresh form starts from.
    ///
    pub fn initial_values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name, f.initial_value()))
            .collect()
    }

    /// Return every field that should currently be rendered and validated,
    /// in declaration order.
    ///
    pub fn visible_fields<'a>(
        &'a self,
        values: &'a FieldValues,
    ) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields.iter().filter(move |f| f.is_visible(values))
    }

    /// Return the names of the conditional fields currently shown.
    ///
    pub fn shown_conditional_fields(&self, values: &FieldValues) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.shown_when.is_some() && f.is_visible(values))
            .map(|f| f.name)
            .collect()
    }
}
