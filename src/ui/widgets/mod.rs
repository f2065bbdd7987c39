//! Reusable UI widget components.
//!
//! This module contains reusable styling utilities and layout helpers.

pub mod layout;
pub mod styling;
