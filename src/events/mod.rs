//! Event handling module.
//!
//! This module contains the handler for terminal events: key presses routed
//! to the form, the success acknowledgment and the summary view.

pub mod terminal;
