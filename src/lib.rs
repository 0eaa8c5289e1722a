//! # Shapecheck
//!
//! Composable runtime validators that certify an untyped value has a given
//! shape, carry that shape into static types, and report the access path of
//! every part of the input that failed.
//!
//! ## Overview
//!
//! Validators are built bottom-up from primitives (`string`, `number`,
//! `u8`, `const_`, ...) and combinators (`object`, `array`, `tuple`,
//! `record`, `union`, `intersection`, `optional`, ...). A validator tree is
//! immutable once built and can be shared freely across threads.
//!
//! Checking never stops at the first failure inside a structure: every
//! failing field, element and entry is visited, and with a
//! [`ValidationContext`] each failure's path is recorded, child paths
//! before their parents. A recorded path re-navigates the input through
//! [`access`]; a path that names a missing field or element resolves to
//! `None`, the same as `undefined`.
//!
//! ## Core Types
//!
//! - [`Value`]: the untyped input, convertible from `serde_json::Value`
//! - [`Validator`]: the trait every validator implements; its `Output` is
//!   the statically typed view of an accepted input
//! - [`Schema`]: entry point for creating validators
//! - [`AccessPath`]: a sequence of keys and indices locating a sub-value
//! - [`ValidationContext`]: collects the paths of failing sub-values
//! - [`ValidationResult`]: the result of [`Validator::parse`]
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{access, field, Schema, ValidationContext, Validator, Value};
//! use serde_json::json;
//!
//! let user = Schema::object((
//!     field("name", Schema::string()),
//!     field("age", Schema::u8()),
//!     field("email", Schema::regexp("@").unwrap().optional()),
//! ));
//!
//! // Typed view of an accepted input
//! let (name, age, email) = user
//!     .parse(&Value::from(json!({"name": "Alice", "age": 30})))
//!     .into_result()
//!     .unwrap();
//! assert_eq!((name.as_str(), age, email), ("Alice", 30, None));
//!
//! // Every failing path of a rejected input
//! let input = Value::from(json!({"name": 7, "age": 300}));
//! let mut ctx = ValidationContext::new();
//! assert!(!user.validate(&input, &mut ctx));
//!
//! assert_eq!(ctx.len(), 2);
//! assert_eq!(access(&input, &ctx.errors()[1]), Some(&Value::from(300)));
//! ```

pub mod error;
pub mod path;
pub mod schema;
pub mod validation;
pub mod value;

pub use error::{ForwardError, ValidationError};
pub use path::{access, AccessPath, PathSegment};
pub use schema::{
    field, AnySchema, ArraySchema, BigIntSchema, BooleanSchema, ConstSchema, CustomSchema,
    DynValidator, EnumSchema, Field, FieldList, Forward, Infer, IntegerSchema, IntegerWidth,
    IntersectionSchema, NullSchema, NullableSchema, NumberRangeSchema, NumberSchema,
    NumberStringSchema, ObjectSchema, OptionalSchema, RecordSchema, RegexpSchema, Schema,
    StringSchema, SymbolSchema, TupleSchema, UndefinedSchema, Union1, Union2, Union3, Union4,
    Union5, Union6, Union7, Union8, UnionSchema, Validator, ValidatorList, VoidSchema,
};
pub use validation::ValidationContext;
pub use value::{Kind, Literal, Object, Symbol, Value};

/// Type alias for the result of [`Validator::parse`].
pub type ValidationResult<T> = stillwater::Validation<T, ValidationError>;
