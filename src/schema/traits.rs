//! The validator trait and its type projection.
//!
//! This module provides the [`Validator`] trait every primitive and
//! combinator implements, the [`Infer`] alias that names the type a validator
//! accepts, and [`DynValidator`] for type-erased trees.

use std::sync::Arc;

use stillwater::Validation;

use crate::error::ValidationError;
use crate::path::AccessPath;
use crate::schema::modifiers::{NullableSchema, OptionalSchema};
use crate::validation::ValidationContext;
use crate::value::Value;
use crate::ValidationResult;

/// A runtime check that certifies an untyped [`Value`] has a given shape.
///
/// `check` is the full calling convention: it returns whether `input`
/// conforms and, when a context is supplied, structural combinators record
/// the path of each failing child relative to `path`. A `true` result
/// certifies that `project` returns `Some` for the same input, which is how
/// the associated `Output` type carries the accepted shape into static
/// types.
///
/// The `Send + Sync` bounds let a validator tree be built once and shared
/// across threads; each call brings its own context.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Infer, Schema, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::object((
///     field("name", Schema::string()),
///     field("tags", Schema::array(Schema::string())),
/// ));
///
/// let user = schema
///     .parse(&Value::from(json!({"name": "Alice", "tags": ["admin"]})))
///     .into_result()
///     .unwrap();
/// let (name, tags): (String, Vec<String>) = user;
/// assert_eq!(name, "Alice");
/// assert_eq!(tags, vec!["admin"]);
/// ```
pub trait Validator: Send + Sync {
    /// The type this validator accepts.
    type Output;

    /// Returns whether `input` conforms, recording failure paths into `ctx`.
    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool;

    /// Produces the typed view of an accepted input.
    ///
    /// Returns `None` if `input` does not have the accepted shape.
    fn project(&self, input: &Value) -> Option<Self::Output>;

    /// Returns whether `input` conforms, recording nothing.
    fn is_valid(&self, input: &Value) -> bool {
        self.check(input, None, &AccessPath::root())
    }

    /// Validates `input` from the root, recording failure paths into `ctx`.
    fn validate(&self, input: &Value, ctx: &mut ValidationContext) -> bool {
        self.check(input, Some(ctx), &AccessPath::root())
    }

    /// Validates `input` and returns its typed view, or every recorded
    /// failure path.
    fn parse(&self, input: &Value) -> ValidationResult<Self::Output> {
        let mut ctx = ValidationContext::new();
        if !self.check(input, Some(&mut ctx), &AccessPath::root()) {
            tracing::debug!(paths = ctx.len(), "input rejected");
            return Validation::Failure(ValidationError::Rejected {
                paths: ctx.into_errors(),
            });
        }
        match self.project(input) {
            Some(output) => Validation::Success(output),
            None => {
                tracing::warn!(kind = %input.kind(), "accepted input could not be projected");
                Validation::Failure(ValidationError::Unprojectable)
            }
        }
    }

    /// Also accepts `null` and `undefined`.
    fn optional(self) -> OptionalSchema<Self>
    where
        Self: Sized,
    {
        OptionalSchema::new(self)
    }

    /// Also accepts `null`.
    fn nullable(self) -> NullableSchema<Self>
    where
        Self: Sized,
    {
        NullableSchema::new(self)
    }

    /// Erases the output type so validators of different types can share a
    /// collection.
    fn erased(self) -> DynValidator
    where
        Self: Sized + 'static,
    {
        Arc::new(Erased(self))
    }
}

/// The type a validator accepts.
pub type Infer<V> = <V as Validator>::Output;

/// A shared, type-erased validator projecting to the accepted input itself.
pub type DynValidator = Arc<dyn Validator<Output = Value>>;

/// Adapter behind [`Validator::erased`].
struct Erased<V>(V);

impl<V: Validator> Validator for Erased<V> {
    type Output = Value;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        self.0.check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Value> {
        self.0.project(input).map(|_| input.clone())
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    type Output = V::Output;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        (**self).check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        (**self).project(input)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    type Output = V::Output;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        (**self).check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        (**self).project(input)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    type Output = V::Output;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        (**self).check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        (**self).project(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_shared_validator_through_arc() {
        let shared = Arc::new(Schema::string());
        let pair = Schema::tuple((Arc::clone(&shared), shared));
        assert!(pair.is_valid(&Value::from(json!(["a", "b"]))));
    }

    #[test]
    fn test_validator_by_reference() {
        let number = Schema::number();
        let list = Schema::array(&number);
        assert!(list.is_valid(&Value::from(json!([1, 2]))));
        assert!(number.is_valid(&Value::from(3)));
    }

    #[test]
    fn test_erased_projects_input() {
        let erased = Schema::number().erased();
        assert_eq!(erased.project(&Value::from(4)), Some(Value::from(4)));
        assert_eq!(erased.project(&Value::from("4")), None);
    }

    #[test]
    fn test_parse_success_and_failure() {
        let schema = Schema::array(Schema::number());

        let ok = schema.parse(&Value::from(json!([1, 2]))).into_result();
        assert_eq!(ok, Ok(vec![1.0, 2.0]));

        let err = schema.parse(&Value::from(json!([1, "x"]))).into_result();
        assert_eq!(
            err,
            Err(ValidationError::Rejected {
                paths: vec![AccessPath::root().push_index(1)]
            })
        );
    }

    #[test]
    fn test_parse_detects_inconsistent_projection() {
        struct AcceptsAll;

        impl Validator for AcceptsAll {
            type Output = String;

            fn check(
                &self,
                _input: &Value,
                _ctx: Option<&mut ValidationContext>,
                _path: &AccessPath,
            ) -> bool {
                true
            }

            fn project(&self, input: &Value) -> Option<String> {
                input.as_str().map(str::to_string)
            }
        }

        let result = AcceptsAll.parse(&Value::from(1)).into_result();
        assert_eq!(result, Err(ValidationError::Unprojectable));
    }
}
