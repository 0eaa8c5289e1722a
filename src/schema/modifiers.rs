//! Modifier combinators that widen a validator's accepted domain.
//!
//! Modifiers are transparent: they forward the context and path unchanged
//! and never record anything themselves.

use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::Value;

use super::traits::Validator;

/// Accepts `null` and `undefined` in addition to what the inner validator
/// accepts.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::optional(Schema::string());
///
/// assert!(schema.is_valid(&Value::Null));
/// assert!(schema.is_valid(&Value::Undefined));
/// assert!(schema.is_valid(&Value::from("x")));
/// assert!(!schema.is_valid(&Value::from(1)));
/// ```
#[derive(Debug, Clone)]
pub struct OptionalSchema<V> {
    inner: V,
}

impl<V> OptionalSchema<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Validator for OptionalSchema<V> {
    type Output = Option<V::Output>;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        input.is_nullish() || self.inner.check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        if input.is_nullish() {
            Some(None)
        } else {
            self.inner.project(input).map(Some)
        }
    }
}

/// Accepts `null` in addition to what the inner validator accepts.
///
/// `undefined` is still handed to the inner validator.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::nullable(Schema::number());
///
/// assert!(schema.is_valid(&Value::Null));
/// assert!(schema.is_valid(&Value::from(1)));
/// assert!(!schema.is_valid(&Value::Undefined));
/// ```
#[derive(Debug, Clone)]
pub struct NullableSchema<V> {
    inner: V,
}

impl<V> NullableSchema<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Validator> Validator for NullableSchema<V> {
    type Output = Option<V::Output>;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        input.is_null() || self.inner.check(input, ctx, path)
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        if input.is_null() {
            Some(None)
        } else {
            self.inner.project(input).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{field, Schema};
    use serde_json::json;

    #[test]
    fn test_optional_accepts_nullish() {
        let schema = Schema::number().optional();
        assert!(schema.is_valid(&Value::Null));
        assert!(schema.is_valid(&Value::Undefined));
        assert!(schema.is_valid(&Value::from(1)));
        assert!(!schema.is_valid(&Value::from("1")));
    }

    #[test]
    fn test_nullable_rejects_undefined() {
        let schema = Schema::string().nullable();
        assert!(schema.is_valid(&Value::Null));
        assert!(!schema.is_valid(&Value::Undefined));
    }

    #[test]
    fn test_nullable_defers_undefined_to_inner() {
        let schema = Schema::undefined().nullable();
        assert!(schema.is_valid(&Value::Undefined));
        assert_eq!(schema.project(&Value::Undefined), Some(Some(())));
    }

    #[test]
    fn test_optional_projection() {
        let schema = Schema::string().optional();
        assert_eq!(schema.project(&Value::Null), Some(None));
        assert_eq!(
            schema.project(&Value::from("x")),
            Some(Some("x".to_string()))
        );
        assert_eq!(schema.project(&Value::from(1)), None);
    }

    #[test]
    fn test_optional_forwards_path_unchanged() {
        let schema = Schema::object((field(
            "a",
            Schema::object((field("b", Schema::number()),)).optional(),
        ),));
        let input = Value::from(json!({"a": {"b": "x"}}));

        let mut ctx = ValidationContext::new();
        assert!(!schema.validate(&input, &mut ctx));
        assert_eq!(
            ctx.errors(),
            &[
                AccessPath::root().push_key("a").push_key("b"),
                AccessPath::root().push_key("a"),
            ]
        );
    }

    #[test]
    fn test_optional_missing_field() {
        let schema = Schema::object((field("nick", Schema::string().optional()),));
        let (nick,) = schema
            .parse(&Value::from(json!({})))
            .into_result()
            .unwrap();
        assert_eq!(nick, None);
    }
}
