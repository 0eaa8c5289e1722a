//! Validator definitions.
//!
//! This module provides every validator type along with [`Schema`], the
//! entry point that builds them. Primitives accept a single kind of value;
//! combinators compose other validators and record the path of each failing
//! child into the caller's [`crate::ValidationContext`].
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{field, Schema, ValidationContext, Validator, Value};
//! use serde_json::json;
//!
//! let schema = Schema::object((
//!     field("id", Schema::u32()),
//!     field("tags", Schema::array(Schema::string())),
//! ));
//!
//! let mut ctx = ValidationContext::new();
//! assert!(!schema.validate(&Value::from(json!({"id": -1, "tags": ["a", 2]})), &mut ctx));
//!
//! let paths: Vec<String> = ctx.errors().iter().map(ToString::to_string).collect();
//! assert_eq!(paths, vec!["id", "tags[1]", "tags"]);
//! ```

mod array;
mod combinators;
mod forward;
mod modifiers;
mod numeric;
mod object;
mod primitive;
mod record;
mod string;
mod traits;

pub use array::{ArraySchema, TupleSchema};
pub use combinators::{
    IntersectionSchema, Union1, Union2, Union3, Union4, Union5, Union6, Union7, Union8,
    UnionSchema, ValidatorList,
};
pub use forward::Forward;
pub use modifiers::{NullableSchema, OptionalSchema};
pub use numeric::{IntegerSchema, IntegerWidth, NumberRangeSchema};
pub use object::{field, Field, FieldList, ObjectSchema};
pub use primitive::{
    AnySchema, BigIntSchema, BooleanSchema, ConstSchema, CustomSchema, EnumSchema, NullSchema,
    NumberSchema, StringSchema, SymbolSchema, UndefinedSchema, VoidSchema,
};
pub use record::RecordSchema;
pub use string::{NumberStringSchema, RegexpSchema};
pub use traits::{DynValidator, Infer, Validator};

use regex::Regex;

use crate::value::{Literal, Value};

/// Entry point for creating validators.
///
/// `Schema` provides one factory per validator. Validators are plain values
/// built bottom-up and composed by ownership; wrap a shared subtree in an
/// `Arc` or pass it by reference to use it more than once.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Schema, Validator, Value};
/// use serde_json::json;
///
/// let point = Schema::tuple((Schema::number(), Schema::number()));
/// let shape = Schema::object((
///     field("kind", Schema::enum_(["circle", "square"])),
///     field("center", point),
///     field("label", Schema::string().optional()),
/// ));
///
/// assert!(shape.is_valid(&Value::from(json!({"kind": "circle", "center": [0, 0]}))));
/// assert!(!shape.is_valid(&Value::from(json!({"kind": "oval", "center": [0, 0]}))));
/// ```
pub struct Schema;

impl Schema {
    /// Accepts every value.
    pub fn any() -> AnySchema {
        AnySchema
    }

    /// Accepts strings.
    pub fn string() -> StringSchema {
        StringSchema
    }

    /// Accepts numbers, including `NaN` and the infinities.
    pub fn number() -> NumberSchema {
        NumberSchema
    }

    /// Accepts booleans.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema
    }

    /// Accepts big integers.
    pub fn bigint() -> BigIntSchema {
        BigIntSchema
    }

    /// Accepts symbols.
    pub fn symbol() -> SymbolSchema {
        SymbolSchema
    }

    /// Accepts `null`.
    pub fn null() -> NullSchema {
        NullSchema
    }

    /// Accepts `undefined`.
    pub fn undefined() -> UndefinedSchema {
        UndefinedSchema
    }

    /// Accepts `null` or `undefined`.
    pub fn void() -> VoidSchema {
        VoidSchema
    }

    /// Accepts exactly one scalar value, compared strictly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator, Value};
    ///
    /// let schema = Schema::const_("ok");
    ///
    /// assert!(schema.is_valid(&Value::from("ok")));
    /// assert!(!schema.is_valid(&Value::from("OK")));
    /// ```
    pub fn const_(literal: impl Into<Literal>) -> ConstSchema {
        ConstSchema::new(literal)
    }

    /// Accepts strings that are members of `members`.
    pub fn enum_<I, S>(members: I) -> EnumSchema
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumSchema::new(members)
    }

    /// Accepts strings matched by `pattern`.
    ///
    /// Returns an error if the pattern does not compile.
    pub fn regexp(pattern: &str) -> Result<RegexpSchema, regex::Error> {
        RegexpSchema::new(pattern)
    }

    /// Accepts strings matched by an already compiled regular expression.
    pub fn regexp_from(regex: Regex) -> RegexpSchema {
        RegexpSchema::from(regex)
    }

    /// Accepts non-empty strings that parse to a number.
    pub fn number_string() -> NumberStringSchema {
        NumberStringSchema
    }

    /// Accepts whole numbers in `[-128, 128)`.
    pub fn i8() -> IntegerSchema<i8> {
        IntegerSchema::new()
    }

    /// Accepts whole numbers in `[0, 256)`.
    pub fn u8() -> IntegerSchema<u8> {
        IntegerSchema::new()
    }

    /// Accepts whole numbers in `[-32768, 32768)`.
    pub fn i16() -> IntegerSchema<i16> {
        IntegerSchema::new()
    }

    /// Accepts whole numbers in `[0, 65536)`.
    pub fn u16() -> IntegerSchema<u16> {
        IntegerSchema::new()
    }

    /// Accepts whole numbers in `[-2^31, 2^31)`.
    pub fn i32() -> IntegerSchema<i32> {
        IntegerSchema::new()
    }

    /// Accepts whole numbers in `[0, 2^32)`.
    pub fn u32() -> IntegerSchema<u32> {
        IntegerSchema::new()
    }

    /// Accepts numbers in `[min, max)`; `None` leaves that side open.
    pub fn number_range(min: Option<f64>, max: Option<f64>) -> NumberRangeSchema {
        NumberRangeSchema::new(min, max)
    }

    /// Accepts whatever `predicate` accepts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapecheck::{Schema, Validator, Value};
    ///
    /// let even = Schema::custom(|v: &Value| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
    ///
    /// assert!(even.is_valid(&Value::from(4)));
    /// assert!(!even.is_valid(&Value::from(3)));
    /// ```
    pub fn custom<F>(predicate: F) -> CustomSchema<F>
    where
        F: Fn(&Value) -> bool + Send + Sync,
    {
        CustomSchema::new(predicate)
    }

    /// Also accepts `null` and `undefined`.
    pub fn optional<V: Validator>(inner: V) -> OptionalSchema<V> {
        OptionalSchema::new(inner)
    }

    /// Also accepts `null`.
    pub fn nullable<V: Validator>(inner: V) -> NullableSchema<V> {
        NullableSchema::new(inner)
    }

    /// Accepts objects with the given fields and, by default, no others.
    ///
    /// See [`ObjectSchema`] for exactness and recording rules.
    pub fn object<F: FieldList>(fields: F) -> ObjectSchema<F> {
        ObjectSchema::new(fields)
    }

    /// Accepts objects whose every key and value conform.
    pub fn record<K: Validator, V: Validator>(key: K, value: V) -> RecordSchema<K, V> {
        RecordSchema::new(key, value)
    }

    /// Accepts arrays whose every element conforms.
    pub fn array<V: Validator>(item: V) -> ArraySchema<V> {
        ArraySchema::new(item)
    }

    /// Accepts arrays with one conforming element per validator.
    pub fn tuple<L: ValidatorList>(elements: L) -> TupleSchema<L> {
        TupleSchema::new(elements)
    }

    /// Accepts what at least one member accepts.
    pub fn union<L: ValidatorList>(members: L) -> UnionSchema<L> {
        UnionSchema::new(members)
    }

    /// Accepts what every member accepts.
    pub fn intersection<L: ValidatorList>(members: L) -> IntersectionSchema<L> {
        IntersectionSchema::new(members)
    }
}
