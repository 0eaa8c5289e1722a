//! Validation context for failure-path collection.
//!
//! This module provides the [`ValidationContext`] type that a caller hands to
//! a validation call to learn where the input diverged from the expected
//! shape. The context is optional everywhere: without one, validators still
//! decide pass/fail but record nothing.

use crate::path::AccessPath;

/// Accumulates the path of every failure recorded during validation.
///
/// Structural combinators (object, record, array, tuple) record the child
/// path of every child that fails; primitives and logical combinators never
/// record on their own. Entries appear in the order failures were found, so
/// a failing child is listed before its failing parent.
///
/// A context is meant for one top-level validation call. Reusing it keeps
/// the old entries; call [`ValidationContext::clear`] in between if that is
/// not wanted.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, AccessPath, Schema, ValidationContext, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::object((
///     field("a", Schema::number()),
///     field("b", Schema::number()),
/// ));
///
/// let mut ctx = ValidationContext::new();
/// let input = Value::from(json!({"a": "", "b": false}));
///
/// assert!(!schema.validate(&input, &mut ctx));
/// assert_eq!(
///     ctx.errors(),
///     &[AccessPath::root().push_key("a"), AccessPath::root().push_key("b")]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationContext {
    errors: Vec<AccessPath>,
}

impl ValidationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a failure path.
    pub fn record(&mut self, path: AccessPath) {
        self.errors.push(path);
    }

    /// Returns the recorded failure paths in recording order.
    pub fn errors(&self) -> &[AccessPath] {
        &self.errors
    }

    /// Returns the number of recorded failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if `path` was recorded at least once.
    pub fn contains(&self, path: &AccessPath) -> bool {
        self.errors.contains(path)
    }

    /// Drops every recorded failure.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Consumes the context, returning the recorded failure paths.
    pub fn into_errors(self) -> Vec<AccessPath> {
        self.errors
    }
}

/// Records `path` if a context is present.
pub(crate) fn record(ctx: Option<&mut ValidationContext>, path: AccessPath) {
    if let Some(ctx) = ctx {
        ctx.record(path);
    }
}
