//! Event registration and job application forms for the terminal.
//!
//! The [`form`] module holds the validation, visibility and submission logic;
//! everything else is the terminal front end built on top of it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod state;
pub mod ui;
