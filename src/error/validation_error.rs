//! Validation error types.
//!
//! This module provides [`ValidationError`], the failure side of
//! [`crate::ValidationResult`], and [`ForwardError`] for forward-reference
//! misuse.

use std::fmt;

use crate::path::AccessPath;

/// Why [`crate::Validator::parse`] did not produce a typed value.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Schema, ValidationError, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::object((field("age", Schema::number()),));
/// let error = schema
///     .parse(&Value::from(json!({"age": "old"})))
///     .into_result()
///     .unwrap_err();
///
/// match &error {
///     ValidationError::Rejected { paths } => assert_eq!(paths[0].to_string(), "age"),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(error.to_string(), "input rejected at 1 path(s): age");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The input does not conform. `paths` holds every recorded failure and
    /// may be empty (an exactness failure records nothing).
    #[error("input rejected at {} path(s): {}", .paths.len(), PathList(.paths))]
    Rejected { paths: Vec<AccessPath> },

    /// The validator accepted the input but could not produce its typed
    /// view of it.
    #[error("accepted input could not be projected into the validator's output type")]
    Unprojectable,
}

impl ValidationError {
    /// Returns the recorded failure paths, empty for `Unprojectable`.
    pub fn paths(&self) -> &[AccessPath] {
        match self {
            ValidationError::Rejected { paths } => paths,
            ValidationError::Unprojectable => &[],
        }
    }
}

/// Formats a list of paths as `a, b[0], (root)`.
struct PathList<'a>(&'a [AccessPath]);

impl fmt::Display for PathList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if path.is_root() {
                f.write_str("(root)")?;
            } else {
                write!(f, "{}", path)?;
            }
        }
        Ok(())
    }
}

/// Errors from defining a [`crate::Forward`] reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForwardError {
    /// The forward reference already points at a validator.
    #[error("forward reference is already defined")]
    AlreadyDefined,
}

// Errors cross thread boundaries alongside the validators that produce them.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_lists_paths() {
        let error = ValidationError::Rejected {
            paths: vec![
                AccessPath::root().push_key("a").push_index(0),
                AccessPath::root(),
            ],
        };
        assert_eq!(error.to_string(), "input rejected at 2 path(s): a[0], (root)");
    }

    #[test]
    fn test_rejected_without_paths() {
        let error = ValidationError::Rejected { paths: Vec::new() };
        assert_eq!(error.to_string(), "input rejected at 0 path(s): (none)");
        assert!(error.paths().is_empty());
    }

    #[test]
    fn test_unprojectable_has_no_paths() {
        assert!(ValidationError::Unprojectable.paths().is_empty());
    }

    #[test]
    fn test_forward_error_display() {
        assert_eq!(
            ForwardError::AlreadyDefined.to_string(),
            "forward reference is already defined"
        );
    }
}
