//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
