//! Submission controller.
//!
//! A form is either being edited or has been submitted. The submitted record
//! lives inside [`ViewMode::Submitted`], so a record exists exactly when the
//! form is in that mode.

use super::engine::{validate, ErrorSet};
use super::error::FormError;
use super::schema::{FieldSpec, FormSchema};
use super::value::{on_field_change, FieldValue, FieldValues};
use super::FormKind;
use log::*;
use serde::Serialize;

/// Immutable snapshot of the values taken when a submission passes
/// validation.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmittedRecord {
    form: FormKind,
    values: FieldValues,
}

impl SubmittedRecord {
    pub fn form(&self) -> FormKind {
        self.form
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }
}

/// Validate the values and, if they pass, freeze them into a record.
///
pub fn submit(schema: &FormSchema, values: &FieldValues) -> Result<SubmittedRecord, ErrorSet> {
    let errors = validate(schema, values);
    if errors.is_empty() {
        Ok(SubmittedRecord {
            form: schema.kind,
            values: values.clone(),
        })
    } else {
        Err(errors)
    }
}

/// Display state of a form.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Editing,
    Submitted(SubmittedRecord),
}

/// Result of a submit attempt on a session.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { error_count: usize },
}

/// Holds the values, errors and mode of one form and drives its transitions.
///
#[derive(Clone, Debug)]
pub struct FormSession {
    schema: FormSchema,
    values: FieldValues,
    errors: ErrorSet,
    mode: ViewMode,
}

impl FormSession {
    /// Start a session in editing mode with the schema's initial values.
    ///
    pub fn new(schema: FormSchema) -> Self {
        let values = schema.initial_values();
        let mut session = FormSession {
            schema,
            values,
            errors: ErrorSet::new(),
            mode: ViewMode::Editing,
        };
        session.enter_editing();
        session
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.mode, ViewMode::Submitted(_))
    }

    /// Return the submitted record, if any.
    ///
    pub fn record(&self) -> Option<&SubmittedRecord> {
        match &self.mode {
            ViewMode::Submitted(record) => Some(record),
            ViewMode::Editing => None,
        }
    }

    /// Return the fields currently rendered and validated.
    ///
    pub fn visible_fields(&self) -> Vec<&FieldSpec> {
        self.schema.visible_fields(&self.values).collect()
    }

    /// Replace one field value. Clears any published errors.
    ///
    pub fn change_field(&mut self, field: &str, value: FieldValue) -> Result<(), FormError> {
        if self.is_submitted() {
            return Err(FormError::Locked);
        }
        if self.schema.field(field).is_none() {
            return Err(FormError::UnknownField(field.to_string()));
        }
        self.values = on_field_change(&self.values, field, value);
        self.errors = ErrorSet::new();
        Ok(())
    }

    /// Run validation. On success the session moves to the submitted mode;
    /// otherwise the errors are published and the values kept as they are.
    ///
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.is_submitted() {
            return Err(FormError::Locked);
        }
        match submit(&self.schema, &self.values) {
            Ok(record) => {
                info!("{} submitted", self.schema.title);
                self.errors = ErrorSet::new();
                self.mode = ViewMode::Submitted(record);
                Ok(SubmitOutcome::Accepted)
            }
            Err(errors) => {
                let error_count = errors.len();
                debug!("{} rejected with {} field error(s)", self.schema.title, error_count);
                self.errors = errors;
                Ok(SubmitOutcome::Rejected { error_count })
            }
        }
    }

    /// Every entry into editing starts with a clean error set.
    ///
    fn enter_editing(&mut self) {
        self.mode = ViewMode::Editing;
        self.errors = ErrorSet::new();
    }
}
