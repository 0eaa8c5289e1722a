//! Sequence validators.
//!
//! This module provides [`ArraySchema`] for homogeneous arrays and
//! [`TupleSchema`] for fixed-arity heterogeneous arrays. Both check every
//! element rather than stopping at the first failure, and record the index
//! path of each failing element.

use crate::path::AccessPath;
use crate::validation::{record, ValidationContext};
use crate::value::{Value, UNDEFINED};

use super::combinators::ValidatorList;
use super::traits::Validator;

/// Accepts arrays whose every element the item validator accepts.
///
/// # Example
///
/// ```rust
/// use shapecheck::{access, AccessPath, Schema, ValidationContext, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::array(Schema::number()));
/// let input = Value::from(json!([["0", 1, "2", 3]]));
///
/// let mut ctx = ValidationContext::new();
/// assert!(!schema.validate(&input, &mut ctx));
///
/// let first = AccessPath::root().push_index(0).push_index(0);
/// assert_eq!(ctx.errors()[0], first);
/// assert_eq!(access(&input, &first), Some(&Value::from("0")));
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<V> {
    item: V,
}

impl<V: Validator> ArraySchema<V> {
    pub fn new(item: V) -> Self {
        Self { item }
    }

    /// Returns the item validator.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<V: Validator> Validator for ArraySchema<V> {
    type Output = Vec<V::Output>;

    fn check(
        &self,
        input: &Value,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        let Some(items) = input.as_array() else {
            return false;
        };

        let mut failed = false;
        for (index, item) in items.iter().enumerate() {
            let item_path = path.push_index(index);
            if !self.item.check(item, ctx.as_deref_mut(), &item_path) {
                failed = true;
                record(ctx.as_deref_mut(), item_path);
            }
        }
        !failed
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        input
            .as_array()?
            .iter()
            .map(|item| self.item.project(item))
            .collect()
    }
}

/// Accepts arrays whose element at each index the validator at that index
/// accepts.
///
/// Indices are checked up to the longer of the declared arity and the
/// input length: a missing element reads as `undefined`, and a surplus
/// element has no validator and fails. Every failing index is recorded.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
/// use serde_json::json;
///
/// let schema = Schema::tuple((Schema::string(), Schema::number()));
///
/// assert!(schema.is_valid(&Value::from(json!(["", 1]))));
/// assert!(!schema.is_valid(&Value::from(json!([""]))));
/// assert!(!schema.is_valid(&Value::from(json!(["", 1, 2]))));
/// ```
#[derive(Debug, Clone)]
pub struct TupleSchema<L> {
    elements: L,
}

impl<L: ValidatorList> TupleSchema<L> {
    pub fn new(elements: L) -> Self {
        Self { elements }
    }

    /// Returns the element validators.
    pub fn elements(&self) -> &L {
        &self.elements
    }
}

impl<L: ValidatorList> Validator for TupleSchema<L> {
    type Output = L::Each;

    fn check(
        &self,
        input: &Value,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        let Some(items) = input.as_array() else {
            return false;
        };

        let mut failed = false;
        for index in 0..self.elements.len().max(items.len()) {
            let item = items.get(index).unwrap_or(&UNDEFINED);
            let item_path = path.push_index(index);
            let accepted = self
                .elements
                .check_at(index, item, ctx.as_deref_mut(), &item_path)
                .unwrap_or(false);
            if !accepted {
                failed = true;
                record(ctx.as_deref_mut(), item_path);
            }
        }
        !failed
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        let items = input.as_array()?;
        if items.len() > self.elements.len() {
            return None;
        }
        self.elements.project_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{field, Schema};
    use serde_json::json;

    fn paths(ctx: &ValidationContext) -> Vec<String> {
        ctx.errors().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_array_accepts_empty() {
        let schema = ArraySchema::new(Schema::string());
        assert!(schema.is_valid(&Value::from(json!([]))));
        assert!(ArraySchema::new(Schema::number()).is_valid(&Value::from(json!([]))));
    }

    #[test]
    fn test_array_rejects_non_array() {
        let schema = ArraySchema::new(Schema::string());
        assert!(!schema.is_valid(&Value::from(json!({}))));
        assert!(!schema.is_valid(&Value::Null));
        assert!(!schema.is_valid(&Value::from("abc")));
    }

    #[test]
    fn test_array_items() {
        let schema = ArraySchema::new(Schema::string());
        assert!(schema.is_valid(&Value::from(json!([""]))));
        assert!(!schema.is_valid(&Value::from(json!([1]))));
    }

    #[test]
    fn test_array_records_every_failing_index() {
        let schema = ArraySchema::new(Schema::number());
        let mut ctx = ValidationContext::new();

        assert!(!schema.validate(&Value::from(json!(["0", 1, "2", 3])), &mut ctx));
        assert_eq!(paths(&ctx), vec!["[0]", "[2]"]);
    }

    #[test]
    fn test_array_of_objects() {
        let schema = ArraySchema::new(Schema::object((field("a", Schema::number()),)));
        assert!(schema.is_valid(&Value::from(json!([{"a": 1}]))));
        assert!(!schema.is_valid(&Value::from(json!([{"a": ""}]))));
    }

    #[test]
    fn test_array_projection() {
        let schema = ArraySchema::new(Schema::u8());
        assert_eq!(
            schema.project(&Value::from(json!([1, 2, 3]))),
            Some(vec![1u8, 2, 3])
        );
        assert_eq!(schema.project(&Value::from(json!([1, 999]))), None);
    }

    #[test]
    fn test_tuple_arity() {
        let single = TupleSchema::new((Schema::string(),));
        assert!(single.is_valid(&Value::from(json!([""]))));
        assert!(!single.is_valid(&Value::Null));
        assert!(!single.is_valid(&Value::from(1)));
        assert!(!single.is_valid(&Value::from(json!([]))));
        assert!(!single.is_valid(&Value::from(json!({}))));
        assert!(!single.is_valid(&Value::from(json!([1]))));

        let pair = TupleSchema::new((Schema::string(), Schema::number()));
        assert!(pair.is_valid(&Value::from(json!(["", 1]))));
        assert!(!pair.is_valid(&Value::from(json!(["", ""]))));
        assert!(!pair.is_valid(&Value::from(json!([1, 1]))));
        assert!(!pair.is_valid(&Value::from(json!([null, null]))));
        assert!(!pair.is_valid(&Value::from(json!([]))));
        assert!(!pair.is_valid(&Value::from(json!([""]))));
        assert!(!pair.is_valid(&Value::from(json!(["", 1, 2]))));
    }

    #[test]
    fn test_tuple_records_surplus_indices() {
        let schema = TupleSchema::new((Schema::number(), Schema::number()));
        let mut ctx = ValidationContext::new();

        assert!(!schema.validate(&Value::from(json!(["", false, null])), &mut ctx));
        assert_eq!(paths(&ctx), vec!["[0]", "[1]", "[2]"]);
    }

    #[test]
    fn test_tuple_missing_trailing_element_reads_undefined() {
        let schema = TupleSchema::new((Schema::string(), Schema::undefined()));
        assert!(schema.is_valid(&Value::from(json!([""]))));

        let optional_tail = TupleSchema::new((Schema::string(), Schema::number().optional()));
        assert_eq!(
            optional_tail.project(&Value::from(json!(["a"]))),
            Some(("a".to_string(), None))
        );
    }

    #[test]
    fn test_empty_tuple() {
        let schema = TupleSchema::new(());
        assert!(schema.is_valid(&Value::from(json!([]))));
        assert!(!schema.is_valid(&Value::from(json!([1]))));
    }

    #[test]
    fn test_tuple_projection() {
        let schema = TupleSchema::new((Schema::string(), Schema::number()));
        assert_eq!(
            schema.project(&Value::from(json!(["x", 2]))),
            Some(("x".to_string(), 2.0))
        );
        assert_eq!(schema.project(&Value::from(json!(["x", 2, 3]))), None);
    }

    #[test]
    fn test_tuple_over_vec() {
        let schema = TupleSchema::new(vec![Schema::number(), Schema::number()]);
        assert_eq!(
            schema.project(&Value::from(json!([1, 2]))),
            Some(vec![1.0, 2.0])
        );
        assert!(!schema.is_valid(&Value::from(json!([1]))));
    }
}
