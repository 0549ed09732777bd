//! End-to-end expression evaluation tests
//!
//! Covers operator precedence, comparison chaining, the Nil-fallback policy
//! for mismatched operand kinds, variable lookup, and syntax errors.

use dm_core::Value;
use dm_expr::{evaluate, ExprError, MemoryVariables, Token, VariableStore};

fn setup_store() -> MemoryVariables {
    let store = MemoryVariables::new();
    store.set_value("hp", Value::Number(7.0));
    store.set_value("name", Value::from("alice"));
    store.set_value("alive", Value::Boolean(true));
    store
}

fn eval(text: &str) -> Value {
    evaluate(&MemoryVariables::new(), text).unwrap()
}

// ==================== arithmetic and precedence ====================

#[test]
fn test_literals() {
    assert_eq!(eval("42"), Value::Number(42.0));
    assert_eq!(eval("3.25"), Value::Number(3.25));
    assert_eq!(eval("true"), Value::Boolean(true));
    assert_eq!(eval("false"), Value::Boolean(false));
    assert_eq!(eval("\"hi\""), Value::from("hi"));
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(eval("(2 + 3) * 4"), Value::Number(20.0));
}

#[test]
fn test_modulus() {
    assert_eq!(eval("10 % 3"), Value::Number(1.0));
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(eval("24 / 4 / 2"), Value::Number(3.0));
}

#[test]
fn test_arithmetic_matches_native_floats() {
    // literals are unsigned; negative values only arise from subtraction
    let cases: [(f64, f64); 4] = [(1.5, 2.25), (3.5, 7.0), (0.1, 0.2), (1e9, 3.0)];
    for (a, b) in cases {
        assert_eq!(eval(&format!("{a} + {b}")), Value::Number(a + b));
        assert_eq!(eval(&format!("{a} - {b}")), Value::Number(a - b));
        assert_eq!(eval(&format!("{a} * {b}")), Value::Number(a * b));
        assert_eq!(eval(&format!("{a} / {b}")), Value::Number(a / b));
        assert_eq!(eval(&format!("{a} % {b}")), Value::Number(a % b));
    }
}

#[test]
fn test_division_by_zero_yields_infinity() {
    assert_eq!(eval("1 / 0"), Value::Number(f64::INFINITY));
    let nan = eval("0 / 0").as_number().unwrap();
    assert!(nan.is_nan());
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(eval("((1 + 2) * (3 + 4))"), Value::Number(21.0));
}

// ==================== comparisons ====================

#[test]
fn test_number_comparisons() {
    assert_eq!(eval("1 < 2"), Value::Boolean(true));
    assert_eq!(eval("2 <= 2"), Value::Boolean(true));
    assert_eq!(eval("3 > 4"), Value::Boolean(false));
    assert_eq!(eval("4 >= 5"), Value::Boolean(false));
    assert_eq!(eval("1 + 1 == 2"), Value::Boolean(true));
    assert_eq!(eval("1 != 1"), Value::Boolean(false));
}

#[test]
fn test_comparison_chain_folds_left_without_short_circuit() {
    // (1 == 1) is Boolean(true), then Boolean(true) == Boolean(true)
    assert_eq!(eval("1 == 1 == true"), Value::Boolean(true));
    // (1 == 2) is Boolean(false), then Boolean(false) == Boolean(true)
    assert_eq!(eval("1 == 2 == true"), Value::Boolean(false));
}

#[test]
fn test_string_and_boolean_equality() {
    assert_eq!(eval("\"a\" == \"a\""), Value::Boolean(true));
    assert_eq!(eval("\"a\" != \"b\""), Value::Boolean(true));
    assert_eq!(eval("true == false"), Value::Boolean(false));
}

// ==================== the Nil-fallback policy ====================

#[test]
fn test_string_concatenation_and_its_mismatch() {
    assert_eq!(eval("\"a\" + \"b\""), Value::from("ab"));
    assert_eq!(eval("\"a\" + 1"), Value::Nil);
}

#[test]
fn test_kind_mismatches_are_nil_not_errors() {
    assert_eq!(eval("true + 1"), Value::Nil);
    assert_eq!(eval("\"a\" - \"b\""), Value::Nil);
    assert_eq!(eval("true * false"), Value::Nil);
    assert_eq!(eval("1 == \"1\""), Value::Nil);
    assert_eq!(eval("true < false"), Value::Nil);
    assert_eq!(eval("\"a\" >= \"a\""), Value::Nil);
}

#[test]
fn test_nil_poisons_downstream_operations() {
    // the mismatch happens mid-expression, the Nil then fails to compare
    assert_eq!(eval("(\"a\" + 1) == \"a1\""), Value::Nil);
}

// ==================== variable lookup ====================

#[test]
fn test_identifier_resolves_through_store() {
    let store = setup_store();
    assert_eq!(evaluate(&store, "hp + 3").unwrap(), Value::Number(10.0));
    assert_eq!(
        evaluate(&store, "hp + 3 >= 10").unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(
        evaluate(&store, "name == \"alice\"").unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(evaluate(&store, "alive == true").unwrap(), Value::Boolean(true));
}

#[test]
fn test_unset_identifier_is_nil() {
    let store = setup_store();
    assert_eq!(evaluate(&store, "missing").unwrap(), Value::Nil);
    assert_eq!(evaluate(&store, "missing + 1").unwrap(), Value::Nil);
}

#[test]
fn test_store_evaluate_helpers() {
    let store = setup_store();
    assert_eq!(store.evaluate("hp * 2").unwrap(), Value::Number(14.0));

    store.set_value_from_expression("hp", "hp - 7").unwrap();
    assert_eq!(store.get_value("hp"), Value::Number(0.0));
}

// ==================== syntax errors ====================

#[test]
fn test_empty_input_is_a_syntax_error() {
    let err = evaluate(&MemoryVariables::new(), "").unwrap_err();
    assert!(matches!(
        err,
        ExprError::UnexpectedToken {
            found: Token::Eof,
            ..
        }
    ));
}

#[test]
fn test_trailing_garbage_is_a_syntax_error() {
    let err = evaluate(&MemoryVariables::new(), "1 2").unwrap_err();
    assert!(matches!(
        err,
        ExprError::UnexpectedToken {
            found: Token::Number(_),
            ..
        }
    ));
}

#[test]
fn test_mismatched_parentheses() {
    let store = MemoryVariables::new();
    assert!(matches!(
        evaluate(&store, "(1 + 2").unwrap_err(),
        ExprError::UnexpectedToken { .. }
    ));
    assert!(matches!(
        evaluate(&store, "1 + 2)").unwrap_err(),
        ExprError::UnexpectedToken { .. }
    ));
}

#[test]
fn test_dangling_operator() {
    let err = evaluate(&MemoryVariables::new(), "1 +").unwrap_err();
    assert!(matches!(err, ExprError::UnexpectedToken { .. }));
}

#[test]
fn test_unrecognized_character_surfaces() {
    let err = evaluate(&MemoryVariables::new(), "1 ? 2").unwrap_err();
    assert_eq!(
        err,
        ExprError::UnexpectedChar {
            ch: '?',
            position: 2
        }
    );
}

// ==================== literal round-trips ====================

#[test]
fn test_values_round_trip_through_their_literal_form() {
    let cases = [
        Value::Number(42.0),
        Value::Number(3.25),
        Value::Boolean(true),
        Value::Boolean(false),
        Value::from("hello"),
    ];
    for value in cases {
        let literal = match &value {
            Value::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        };
        assert_eq!(eval(&literal), value);
    }
}
