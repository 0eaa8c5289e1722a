//! Forward references for recursive validators.
//!
//! A validator tree is built bottom-up, so a shape that contains itself
//! needs a placeholder that can be referenced before the validator it
//! stands for exists. [`Forward`] is that placeholder: clone it into the
//! tree, then [`define`](Forward::define) it once the tree is built.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ForwardError;
use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::Value;

use super::traits::Validator;

type Target<T> = Arc<RwLock<Option<Arc<dyn Validator<Output = T>>>>>;

/// A late-bound validator that delegates to the validator it is defined as.
///
/// Clones share one target. Until it is defined, a forward reference
/// rejects every input. Recursion must consume input on every cycle; a
/// forward defined directly in terms of itself never terminates.
///
/// The target holds a clone of the forward, so a recursive tree forms a
/// reference cycle and is never freed. Build recursive trees once and share
/// them.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Forward, Schema, Validator, Value};
/// use serde_json::json;
///
/// let tree = Forward::new();
/// tree.define(
///     Schema::object((
///         field("value", Schema::number()),
///         field("children", Schema::array(tree.clone())),
///     ))
///     .erased(),
/// )
/// .unwrap();
///
/// let input = json!({"value": 1, "children": [{"value": 2, "children": []}]});
/// assert!(tree.is_valid(&Value::from(input)));
///
/// let bad = json!({"value": 1, "children": [{"value": "2", "children": []}]});
/// assert!(!tree.is_valid(&Value::from(bad)));
/// ```
pub struct Forward<T = Value> {
    target: Target<T>,
}

impl<T: 'static> Forward<T> {
    /// Creates an undefined forward reference.
    pub fn new() -> Self {
        Self {
            target: Arc::new(RwLock::new(None)),
        }
    }

    /// Binds this reference, and every clone of it, to `validator`.
    ///
    /// Returns [`ForwardError::AlreadyDefined`] if it is already bound.
    pub fn define<V>(&self, validator: V) -> Result<(), ForwardError>
    where
        V: Validator<Output = T> + 'static,
    {
        let mut target = self.target.write();
        if target.is_some() {
            return Err(ForwardError::AlreadyDefined);
        }
        *target = Some(Arc::new(validator));
        tracing::trace!("forward reference defined");
        Ok(())
    }

    /// Returns true once [`define`](Forward::define) has succeeded.
    pub fn is_defined(&self) -> bool {
        self.target.read().is_some()
    }

    fn resolve(&self) -> Option<Arc<dyn Validator<Output = T>>> {
        self.target.read().clone()
    }
}

impl<T: 'static> Default for Forward<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Forward<T> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
        }
    }
}

impl<T> fmt::Debug for Forward<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward")
            .field("defined", &self.target.read().is_some())
            .finish()
    }
}

impl<T: 'static> Validator for Forward<T> {
    type Output = T;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        // The lock is released before delegating so nested uses of the same
        // forward can take it again.
        match self.resolve() {
            Some(target) => target.check(input, ctx, path),
            None => {
                tracing::warn!(%path, "forward reference used before it was defined");
                false
            }
        }
    }

    fn project(&self, input: &Value) -> Option<T> {
        self.resolve()?.project(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{field, Schema};
    use serde_json::json;

    #[test]
    fn test_undefined_forward_rejects() {
        let forward: Forward = Forward::new();
        assert!(!forward.is_defined());
        assert!(!forward.is_valid(&Value::Null));
        assert_eq!(forward.project(&Value::Null), None);
    }

    #[test]
    fn test_define_once() {
        let forward = Forward::new();
        assert!(forward.define(Schema::string().erased()).is_ok());
        assert!(forward.is_defined());
        assert_eq!(
            forward.define(Schema::number().erased()),
            Err(ForwardError::AlreadyDefined)
        );
        assert!(forward.is_valid(&Value::from("still a string")));
    }

    #[test]
    fn test_clones_share_target() {
        let forward = Forward::new();
        let clone = forward.clone();
        forward.define(Schema::number().erased()).unwrap();
        assert!(clone.is_defined());
        assert!(clone.is_valid(&Value::from(1)));
    }

    #[test]
    fn test_typed_forward() {
        let forward: Forward<f64> = Forward::new();
        forward.define(Schema::number()).unwrap();
        assert_eq!(forward.project(&Value::from(2.5)), Some(2.5));
    }

    #[test]
    fn test_recursive_paths() {
        let list = Forward::new();
        list.define(
            Schema::object((
                field("head", Schema::number()),
                field("tail", list.clone().nullable()),
            ))
            .erased(),
        )
        .unwrap();

        let input = Value::from(json!({"head": 1, "tail": {"head": 2, "tail": {"head": "3", "tail": null}}}));
        let mut ctx = ValidationContext::new();
        assert!(!list.validate(&input, &mut ctx));

        let paths: Vec<String> = ctx.errors().iter().map(ToString::to_string).collect();
        assert_eq!(paths, vec!["tail.tail.head", "tail.tail", "tail"]);
    }
}
