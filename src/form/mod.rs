//! Form engine.
//!
//! This module contains everything the view layer calls into:
//! - Field value sets and the immutable `on_field_change` update
//! - Validation rules and the `validate` engine
//! - Schemas with a shared visibility predicate table
//! - The submission controller (`FormSession`)
//! - The event registration and job application forms

mod controller;
mod engine;
mod error;
pub mod event;
pub mod job;
mod rules;
mod schema;
mod value;

pub use controller::{submit, FormSession, SubmitOutcome, SubmittedRecord, ViewMode};
pub use engine::{validate, ErrorSet};
pub use error::FormError;
pub use rules::Rule;
pub use schema::{Condition, FieldKind, FieldSpec, FormSchema};
pub use value::{on_field_change, FieldValue, FieldValues};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The forms this application knows about.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    #[default]
    #[serde(rename = "event")]
    EventRegistration,
    #[serde(rename = "job")]
    JobApplication,
}

impl FormKind {
    pub const NAMES: [&'static str; 2] = ["event", "job"];

    /// Build the schema for this form.
    ///
    pub fn schema(self) -> FormSchema {
        match self {
            FormKind::EventRegistration => event::schema(),
            FormKind::JobApplication => job::schema(),
        }
    }

    /// Return the heading shown above a submitted record.
    ///
    pub fn summary_title(self) -> &'static str {
        match self {
            FormKind::EventRegistration => "Registration Summary",
            FormKind::JobApplication => "Job Application Summary",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::EventRegistration => write!(f, "event"),
            FormKind::JobApplication => write!(f, "job"),
        }
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "event" | "event-registration" => Ok(FormKind::EventRegistration),
            "job" | "job-application" => Ok(FormKind::JobApplication),
            other => Err(FormError::UnknownForm(other.to_string())),
        }
    }
}
