//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating objects with named
//! fields, the [`Field`] type that names one of them, and the
//! [`FieldList`] trait implemented by tuples and vectors of fields.

use indexmap::IndexMap;

use crate::path::AccessPath;
use crate::validation::{record, ValidationContext};
use crate::value::{Object, Value, UNDEFINED};

use super::traits::Validator;

/// The one key an object field is never read under.
const PROTO_KEY: &str = "__proto__";

/// A named field of an object schema.
#[derive(Debug, Clone)]
pub struct Field<V> {
    name: String,
    validator: V,
}

impl<V: Validator> Field<V> {
    pub fn new(name: impl Into<String>, validator: V) -> Self {
        Self {
            name: name.into(),
            validator,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    fn is_skipped(&self) -> bool {
        self.name == PROTO_KEY
    }

    /// Checks this field of `object`, recording the field path on failure.
    fn check_in(
        &self,
        object: &Object,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        if self.is_skipped() {
            return true;
        }
        let value = object.get(&self.name).unwrap_or(&UNDEFINED);
        let field_path = path.push_key(self.name.as_str());
        if self.validator.check(value, ctx.as_deref_mut(), &field_path) {
            true
        } else {
            record(ctx, field_path);
            false
        }
    }

    fn project_in(&self, object: &Object) -> Option<V::Output> {
        let value = if self.is_skipped() {
            &UNDEFINED
        } else {
            object.get(&self.name).unwrap_or(&UNDEFINED)
        };
        self.validator.project(value)
    }
}

/// Creates a named field for [`crate::Schema::object`].
pub fn field<V: Validator>(name: impl Into<String>, validator: V) -> Field<V> {
    Field::new(name, validator)
}

/// An ordered list of object fields.
///
/// Implemented for tuples of up to eight [`Field`]s (projecting to a tuple
/// of the field outputs), for the empty tuple, and for `Vec<Field<V>>`
/// (projecting to a map from field name to output).
pub trait FieldList: Send + Sync {
    /// The projected object.
    type Output;

    /// Checks every field in declaration order without stopping at the first
    /// failure.
    fn check_fields(
        &self,
        object: &Object,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool;

    /// Returns true if `key` is a declared, non-skipped field name.
    fn declares(&self, key: &str) -> bool;

    fn project_fields(&self, object: &Object) -> Option<Self::Output>;
}

impl FieldList for () {
    type Output = ();

    fn check_fields(
        &self,
        _object: &Object,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        true
    }

    fn declares(&self, _key: &str) -> bool {
        false
    }

    fn project_fields(&self, _object: &Object) -> Option<()> {
        Some(())
    }
}

impl<V: Validator> FieldList for Vec<Field<V>> {
    type Output = IndexMap<String, V::Output>;

    fn check_fields(
        &self,
        object: &Object,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        let mut passed = true;
        for field in self {
            passed &= field.check_in(object, ctx.as_deref_mut(), path);
        }
        passed
    }

    fn declares(&self, key: &str) -> bool {
        self.iter().any(|f| !f.is_skipped() && f.name == key)
    }

    fn project_fields(&self, object: &Object) -> Option<Self::Output> {
        self.iter()
            .map(|f| Some((f.name.clone(), f.project_in(object)?)))
            .collect()
    }
}

macro_rules! field_list_tuple {
    ($($param:ident $idx:tt),+) => {
        impl<$($param: Validator),+> FieldList for ($(Field<$param>,)+) {
            type Output = ($($param::Output,)+);

            fn check_fields(
                &self,
                object: &Object,
                mut ctx: Option<&mut ValidationContext>,
                path: &AccessPath,
            ) -> bool {
                let mut passed = true;
                $(passed &= self.$idx.check_in(object, ctx.as_deref_mut(), path);)+
                passed
            }

            fn declares(&self, key: &str) -> bool {
                false $(|| (!self.$idx.is_skipped() && self.$idx.name == key))+
            }

            fn project_fields(&self, object: &Object) -> Option<Self::Output> {
                Some(($(self.$idx.project_in(object)?,)+))
            }
        }
    };
}

field_list_tuple!(A 0);
field_list_tuple!(A 0, B 1);
field_list_tuple!(A 0, B 1, C 2);
field_list_tuple!(A 0, B 1, C 2, D 3);
field_list_tuple!(A 0, B 1, C 2, D 3, E 4);
field_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
field_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
field_list_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// A schema for validating objects with named fields.
///
/// Every declared field is checked, in declaration order, against the
/// input's value under that key (a missing key reads as `undefined`), and
/// the path of each failing field is recorded. The object itself records
/// nothing on top of its fields.
///
/// Exact objects (the default) additionally reject input carrying a key
/// that is not declared. That failure records no path. A field named
/// `__proto__` is never read or validated.
///
/// # Example
///
/// ```rust
/// use shapecheck::{field, Schema, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::object((
///     field("name", Schema::string()),
///     field("age", Schema::number()),
/// ));
///
/// assert!(schema.is_valid(&Value::from(json!({"name": "Alice", "age": 30}))));
///
/// // Unknown keys are rejected unless exactness is turned off
/// let input = Value::from(json!({"name": "Alice", "age": 30, "extra": true}));
/// assert!(!schema.is_valid(&input));
/// assert!(schema.exact(false).is_valid(&input));
/// ```
#[derive(Debug, Clone)]
pub struct ObjectSchema<F> {
    fields: F,
    exact: bool,
}

impl<F: FieldList> ObjectSchema<F> {
    /// Creates an exact object schema.
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            exact: true,
        }
    }

    /// Configures whether keys not declared as fields are rejected.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Returns true if undeclared keys are rejected.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns the declared fields.
    pub fn fields(&self) -> &F {
        &self.fields
    }

    fn has_undeclared_key(&self, object: &Object) -> bool {
        object.keys().any(|key| !self.fields.declares(key))
    }
}

impl<F: FieldList> Validator for ObjectSchema<F> {
    type Output = F::Output;

    fn check(
        &self,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        let Some(object) = input.as_object() else {
            return false;
        };
        if !self.fields.check_fields(object, ctx, path) {
            return false;
        }
        !(self.exact && self.has_undeclared_key(object))
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        self.fields.project_fields(input.as_object()?)
    }
}
