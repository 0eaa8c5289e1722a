//! Error types for validation failures.
//!
//! Validators themselves never fail with an error: they return `false` and
//! record paths. The types here cover the typed entry point
//! [`crate::Validator::parse`] and construction-time mistakes.

mod validation_error;

pub use validation_error::{ForwardError, ValidationError};
