//! Form controller error types.

/// Errors raised when the controller is asked to do something its current
/// state does not allow. Validation failures are not errors; they are
/// reported through an [`ErrorSet`](super::ErrorSet).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Field is not part of the form
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Form name not recognised
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Form was already submitted and is read-only
    #[error("Form is submitted and can no longer be edited")]
    Locked,
}
