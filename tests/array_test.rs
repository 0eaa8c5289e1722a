//! Tests for array and tuple validation.

use serde_json::json;
use shapecheck::{access, field, AccessPath, Schema, ValidationContext, Validator, Value};

fn paths(ctx: &ValidationContext) -> Vec<String> {
    ctx.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn test_array_basics() {
    let schema = Schema::array(Schema::string());
    assert!(schema.is_valid(&Value::from(json!([]))));
    assert!(schema.is_valid(&Value::from(json!(["", "a"]))));
    assert!(!schema.is_valid(&Value::from(json!([1]))));
    assert!(!schema.is_valid(&Value::from(json!({}))));
    assert!(!schema.is_valid(&Value::from("[]")));
}

#[test]
fn test_nested_array_paths_resolve() {
    let schema = Schema::array(Schema::array(Schema::number()));
    let input = Value::from(json!([["0", 1, "2", 3]]));
    let mut ctx = ValidationContext::new();

    assert!(!schema.validate(&input, &mut ctx));
    assert_eq!(
        ctx.errors(),
        &[
            AccessPath::root().push_index(0).push_index(0),
            AccessPath::root().push_index(0).push_index(2),
            AccessPath::root().push_index(0),
        ]
    );
    assert_eq!(access(&input, &ctx.errors()[0]), Some(&Value::from("0")));
    assert_eq!(access(&input, &ctx.errors()[1]), Some(&Value::from("2")));
}

#[test]
fn test_array_of_objects_paths() {
    let schema = Schema::array(Schema::object((
        field("id", Schema::u16()),
        field("email", Schema::regexp("@").unwrap()),
    )));
    let mut ctx = ValidationContext::new();

    let input = Value::from(json!([
        {"id": 1, "email": "a@b"},
        {"id": -1, "email": "nope"},
        {"id": 3, "email": "c@d"}
    ]));
    assert!(!schema.validate(&input, &mut ctx));
    assert_eq!(paths(&ctx), vec!["[1].id", "[1].email", "[1]"]);
}

#[test]
fn test_tuple_exact_arity() {
    let schema = Schema::tuple((Schema::string(), Schema::number()));
    assert!(schema.is_valid(&Value::from(json!(["", 1]))));
    assert!(!schema.is_valid(&Value::from(json!(["", 1, 2]))));
    assert!(!schema.is_valid(&Value::from(json!([""]))));
    assert!(!schema.is_valid(&Value::from(json!([1, ""]))));
    assert!(!schema.is_valid(&Value::from(json!({"0": "", "1": 1}))));
}

#[test]
fn test_tuple_records_missing_and_surplus() {
    let schema = Schema::tuple((Schema::string(), Schema::number()));
    let mut ctx = ValidationContext::new();

    assert!(!schema.validate(&Value::from(json!([""])), &mut ctx));
    assert_eq!(paths(&ctx), vec!["[1]"]);

    ctx.clear();
    assert!(!schema.validate(&Value::from(json!([1, 1, 1, 1])), &mut ctx));
    assert_eq!(paths(&ctx), vec!["[0]", "[2]", "[3]"]);
}

#[test]
fn test_tuple_with_optional_tail() {
    let schema = Schema::tuple((Schema::string(), Schema::boolean().optional()));
    assert!(schema.is_valid(&Value::from(json!(["a"]))));
    assert!(schema.is_valid(&Value::from(json!(["a", true]))));
    assert!(!schema.is_valid(&Value::from(json!(["a", 1]))));
}

#[test]
fn test_tuple_parse() {
    let schema = Schema::tuple((Schema::string(), Schema::i8(), Schema::null()));
    let parsed = schema
        .parse(&Value::from(json!(["x", -3, null])))
        .into_result()
        .unwrap();
    assert_eq!(parsed, ("x".to_string(), -3i8, ()));
}

#[test]
fn test_tuple_nested_in_array() {
    let schema = Schema::array(Schema::tuple((Schema::number(), Schema::number())));
    let mut ctx = ValidationContext::new();

    assert!(!schema.validate(&Value::from(json!([[0, 0], [1, "1"], [2]])), &mut ctx));
    assert_eq!(paths(&ctx), vec!["[1][1]", "[1]", "[2][1]", "[2]"]);
}
