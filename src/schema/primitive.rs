//! Leaf validators over scalar kinds.
//!
//! Primitives never recurse, so they ignore the context and path: a failing
//! primitive reports failure only through its return value and leaves the
//! recording to the enclosing combinator.

use std::fmt;

use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::{Kind, Literal, Symbol, Value};

use super::traits::Validator;

/// Defines a unit validator that accepts exactly one [`Kind`].
macro_rules! kind_schema {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $output:ty, |$input:ident| $project:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Validator for $name {
            type Output = $output;

            fn check(
                &self,
                input: &Value,
                _ctx: Option<&mut ValidationContext>,
                _path: &AccessPath,
            ) -> bool {
                input.kind() == Kind::$kind
            }

            fn project(&self, $input: &Value) -> Option<$output> {
                $project
            }
        }
    };
}

kind_schema!(
    /// Accepts strings.
    StringSchema, String, String, |input| input.as_str().map(str::to_string)
);
kind_schema!(
    /// Accepts numbers, including `NaN` and the infinities.
    NumberSchema, Number, f64, |input| input.as_f64()
);
kind_schema!(
    /// Accepts booleans.
    BooleanSchema, Boolean, bool, |input| input.as_bool()
);
kind_schema!(
    /// Accepts big integers.
    BigIntSchema, BigInt, i128, |input| input.as_bigint()
);
kind_schema!(
    /// Accepts symbols.
    SymbolSchema, Symbol, Symbol, |input| input.as_symbol().cloned()
);
kind_schema!(
    /// Accepts `null` only.
    NullSchema, Null, (), |input| input.is_null().then_some(())
);
kind_schema!(
    /// Accepts `undefined` only.
    UndefinedSchema, Undefined, (), |input| input.is_undefined().then_some(())
);

/// Accepts `null` or `undefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoidSchema;

impl Validator for VoidSchema {
    type Output = ();

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        input.is_nullish()
    }

    fn project(&self, input: &Value) -> Option<()> {
        input.is_nullish().then_some(())
    }
}

/// Accepts every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnySchema;

impl Validator for AnySchema {
    type Output = Value;

    fn check(
        &self,
        _input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        true
    }

    fn project(&self, input: &Value) -> Option<Value> {
        Some(input.clone())
    }
}

/// Accepts values strictly equal to a constant.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::const_("static");
///
/// assert!(schema.is_valid(&Value::from("static")));
/// assert!(!schema.is_valid(&Value::from("dynamic")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstSchema {
    literal: Literal,
}

impl ConstSchema {
    pub fn new(literal: impl Into<Literal>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Returns the constant this schema compares against.
    pub fn literal(&self) -> &Literal {
        &self.literal
    }
}

impl Validator for ConstSchema {
    type Output = Literal;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        self.literal.matches(input)
    }

    fn project(&self, input: &Value) -> Option<Literal> {
        self.literal.matches(input).then(|| self.literal.clone())
    }
}

/// Accepts strings that belong to a fixed set.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::enum_(["a", "b", "c"]);
///
/// assert!(schema.is_valid(&Value::from("b")));
/// assert!(!schema.is_valid(&Value::from("d")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    members: Vec<String>,
}

impl EnumSchema {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted members in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    fn member(&self, input: &Value) -> Option<&String> {
        let s = input.as_str()?;
        self.members.iter().find(|m| m.as_str() == s)
    }
}

impl Validator for EnumSchema {
    type Output = String;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        self.member(input).is_some()
    }

    fn project(&self, input: &Value) -> Option<String> {
        self.member(input).cloned()
    }
}

/// Accepts whatever a caller-supplied predicate accepts.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Schema, Validator, Value};
/// use serde_json::json;
///
/// let is_a = Schema::custom(|input: &Value| input.as_str() == Some("A"));
/// let schema = Schema::object((field("a", is_a),));
///
/// assert!(schema.is_valid(&Value::from(json!({"a": "A"}))));
/// assert!(!schema.is_valid(&Value::from(json!({"a": "B"}))));
/// ```
#[derive(Clone)]
pub struct CustomSchema<F> {
    predicate: F,
}

impl<F> CustomSchema<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> fmt::Debug for CustomSchema<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSchema").finish_non_exhaustive()
    }
}

impl<F> Validator for CustomSchema<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    type Output = Value;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        (self.predicate)(input)
    }

    fn project(&self, input: &Value) -> Option<Value> {
        (self.predicate)(input).then(|| input.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    fn every_kind() -> Vec<Value> {
        vec![
            Value::Undefined,
            Value::Null,
            Value::Bool(true),
            Value::Number(1.0),
            Value::Number(f64::NAN),
            Value::bigint(0),
            Value::from(""),
            Value::from(Symbol::anonymous()),
            Value::Array(vec![]),
            Value::from(Object::new()),
        ]
    }

    fn accepted<V: Validator>(validator: &V) -> Vec<Kind> {
        every_kind()
            .iter()
            .filter(|v| validator.is_valid(v))
            .map(Value::kind)
            .collect()
    }

    #[test]
    fn test_any_accepts_everything() {
        assert_eq!(accepted(&AnySchema).len(), every_kind().len());
    }

    #[test]
    fn test_kind_schemas_accept_exactly_their_kind() {
        assert_eq!(accepted(&StringSchema), vec![Kind::String]);
        assert_eq!(accepted(&NumberSchema), vec![Kind::Number, Kind::Number]);
        assert_eq!(accepted(&BooleanSchema), vec![Kind::Boolean]);
        assert_eq!(accepted(&BigIntSchema), vec![Kind::BigInt]);
        assert_eq!(accepted(&SymbolSchema), vec![Kind::Symbol]);
        assert_eq!(accepted(&NullSchema), vec![Kind::Null]);
        assert_eq!(accepted(&UndefinedSchema), vec![Kind::Undefined]);
        assert_eq!(accepted(&VoidSchema), vec![Kind::Undefined, Kind::Null]);
    }

    #[test]
    fn test_no_coercion() {
        assert!(!NumberSchema.is_valid(&Value::from("1")));
        assert!(!StringSchema.is_valid(&Value::from(1)));
        assert!(!BooleanSchema.is_valid(&Value::from(1)));
        assert!(!BigIntSchema.is_valid(&Value::from(1)));
    }

    #[test]
    fn test_const() {
        assert!(ConstSchema::new("a").is_valid(&Value::from("a")));
        assert!(!ConstSchema::new("a").is_valid(&Value::from("b")));
        assert!(ConstSchema::new(Literal::Undefined).is_valid(&Value::Undefined));
        assert!(!ConstSchema::new(Literal::Undefined).is_valid(&Value::Null));

        let tag = Symbol::new("tag");
        let schema = ConstSchema::new(tag.clone());
        assert!(schema.is_valid(&Value::from(tag)));
        assert!(!schema.is_valid(&Value::from(Symbol::new("tag"))));
    }

    #[test]
    fn test_enum() {
        let schema = EnumSchema::new(["a", "b", "c"]);
        assert!(schema.is_valid(&Value::from("a")));
        assert!(schema.is_valid(&Value::from("c")));
        assert!(!schema.is_valid(&Value::from("d")));
        assert!(!schema.is_valid(&Value::Null));
        assert_eq!(schema.project(&Value::from("b")), Some("b".to_string()));
    }

    #[test]
    fn test_custom() {
        let schema = CustomSchema::new(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0));
        assert!(schema.is_valid(&Value::from(1)));
        assert!(!schema.is_valid(&Value::from(-1)));
        assert_eq!(schema.project(&Value::from(2)), Some(Value::from(2)));
    }

    #[test]
    fn test_projections() {
        assert_eq!(StringSchema.project(&Value::from("s")), Some("s".to_string()));
        assert_eq!(NumberSchema.project(&Value::from(2.5)), Some(2.5));
        assert_eq!(BigIntSchema.project(&Value::bigint(9)), Some(9));
        assert_eq!(VoidSchema.project(&Value::Null), Some(()));
        assert_eq!(NullSchema.project(&Value::Undefined), None);
    }
}
