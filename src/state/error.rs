//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Summary requested before the form was submitted
    #[error("Nothing to copy until the form is submitted")]
    NothingToCopy,

    /// System clipboard could not be reached
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}
