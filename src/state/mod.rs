//! Application state management module.
//!
//! This module contains the state the terminal front end keeps around the
//! form controller, including:
//! - Main `State` struct (focus, acknowledgment, status line, theme)
//! - Navigation types (View)
//! - Field editing helpers
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use navigation::View;
pub use state_impl::State;
