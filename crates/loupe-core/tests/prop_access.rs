//! Property-based tests for the accessor contract.
//!
//! Uses the `proptest` crate to generate random value trees and key
//! sequences, then checks the invariants the whole design rests on:
//!
//! - path accumulation: N indexing steps record exactly those N keys
//! - missing propagation: descent through a missing position stays missing
//! - strict/coercive agreement: whatever a strict getter accepts, the
//!   coercive getter accepts with the identical result
//! - purity: indexing never changes the parent and repeated calls agree
//! - locality: every getter error points at the accessor that raised it
//! - the serde_json bridge preserves structure for JSON-representable trees

use loupe_core::{AccessError, Accessor, Key, KeyPath, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating values, keys, and trees
// ============================================================================

/// Generate a map/list key: short lowercase names or small integers.
fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9_]{0,7}")
            .unwrap()
            .prop_map(Key::Str),
        (0i64..4).prop_map(Key::Int),
    ]
}

/// Generate a scalar, biased toward coercion boundaries: digit strings,
/// `"true"`/`"false"`, zeros and ones.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-10_000i64..10_000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        prop::string::string_regex("[ -~]{0,12}")
            .unwrap()
            .prop_map(Value::String),
        Just(Value::String("true".to_string())),
        Just(Value::String("false".to_string())),
        Just(Value::String("42".to_string())),
        Just(Value::String("-7".to_string())),
        Just(Value::String("0".to_string())),
        Just(Value::String("1".to_string())),
        Just(Value::Int(0)),
        Just(Value::Int(1)),
    ]
}

/// Generate a value tree with limited nesting (recursive).
fn arb_value_inner(depth: u32) -> impl Strategy<Value = Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..4)
                .prop_map(Value::List),
            2 => prop::collection::vec((arb_key(), arb_value_inner(depth - 1)), 0..4)
                .prop_map(Value::Map),
            // List-shaped maps: contiguous 0..n-1 integer keys.
            1 => prop::collection::vec(arb_scalar(), 0..4).prop_map(|items| {
                Value::Map(
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(i, value)| (Key::Int(i as i64), value))
                        .collect(),
                )
            }),
        ]
        .boxed()
    }
}

/// Top-level strategy: value trees up to 3 levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(3)
}

/// A JSON-representable tree: string-keyed maps with unique keys, finite
/// floats. Used for the serde_json bridge property.
fn arb_json_safe_value(depth: u32) -> impl Strategy<Value = Value> {
    let scalar = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-10_000i64..10_000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        prop::string::string_regex("[a-zA-Z0-9 ]{0,10}")
            .unwrap()
            .prop_map(Value::String),
    ];
    if depth == 0 {
        scalar.boxed()
    } else {
        prop_oneof![
            3 => scalar,
            1 => prop::collection::vec(arb_json_safe_value(depth - 1), 0..4)
                .prop_map(Value::List),
            1 => prop::collection::btree_map(
                prop::string::string_regex("[a-z]{1,6}").unwrap(),
                arb_json_safe_value(depth - 1),
                0..4,
            )
            .prop_map(|map| {
                Value::Map(
                    map.into_iter()
                        .map(|(key, value)| (Key::Str(key), value))
                        .collect(),
                )
            }),
        ]
        .boxed()
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// N indexing steps with keys k1..kN produce a path of exactly
    /// [k1, ..., kN], present or missing.
    #[test]
    fn descent_accumulates_exactly_the_indexed_keys(
        value in arb_value(),
        keys in prop::collection::vec(arb_key(), 1..6),
    ) {
        let root = Accessor::new(&value);
        prop_assert!(root.path().is_empty());

        let mut current = root.index(keys[0].clone());
        for key in &keys[1..] {
            current = current.index(key.clone());
        }
        prop_assert_eq!(current.path().keys(), keys.as_slice());
    }

    /// Descent through a missing position stays missing, keeps accumulating
    /// keys, and every getter reports MissingValue with that exact path.
    #[test]
    fn missing_stays_missing(keys in prop::collection::vec(arb_key(), 1..6)) {
        let value = Value::Null;
        let mut current = Accessor::new(&value).index(keys[0].clone());
        for key in &keys[1..] {
            prop_assert!(current.is_missing());
            current = current.index(key.clone());
        }

        prop_assert!(current.is_missing());
        prop_assert_eq!(current.path().keys(), keys.as_slice());
        prop_assert_eq!(current.find_as_int(), None);

        let err = current.get_int().unwrap_err();
        prop_assert_eq!(err, AccessError::MissingValue { path: KeyPath::from(keys) });
    }

    /// Whatever a strict getter accepts, the coercive getter accepts with
    /// the identical result.
    #[test]
    fn strict_success_implies_coercive_agreement(value in arb_value()) {
        let accessor = Accessor::new(&value);

        if let Some(i) = accessor.find_int() {
            prop_assert_eq!(accessor.find_as_int(), Some(i));
        }
        if let Some(b) = accessor.find_bool() {
            prop_assert_eq!(accessor.find_as_bool(), Some(b));
        }
        if let Some(s) = accessor.find_string() {
            let as_string = accessor.find_as_string();
            prop_assert_eq!(as_string.as_deref(), Some(s));
        }
        if let Some(ints) = accessor.find_list_of_int() {
            prop_assert_eq!(accessor.find_as_list_of_int(), Some(ints));
        }
        if let Some(strings) = accessor.find_list_of_string() {
            let owned: Vec<String> = strings.iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(accessor.find_as_list_of_string(), Some(owned));
        }
    }

    /// Indexing is a pure function of the accessor and the key: the parent
    /// is unchanged afterwards and repeated calls return equal results.
    #[test]
    fn indexing_is_pure(value in arb_value(), key in arb_key()) {
        let root = Accessor::new(&value);
        let snapshot = root.clone();

        let first = root.index(key.clone());
        let second = root.index(key);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(root, snapshot);
    }

    /// Every getter failure points at the accessor that raised it, never at
    /// the root; the find family never fails at all.
    #[test]
    fn errors_point_at_the_failing_access(value in arb_value(), key in arb_key()) {
        let child = Accessor::new(&value).index(key.clone());

        if let Err(err) = child.get_bool() {
            prop_assert_eq!(err.key_sequence(), std::slice::from_ref(&key));
        }
        if let Err(err) = child.get_as_list_of_string() {
            prop_assert_eq!(err.key_sequence(), std::slice::from_ref(&key));
        }

        let _ = child.find_bool();
        let _ = child.find_as_bool();
        let _ = child.find_as_list_of_string();
    }

    /// Coercion is deterministic: asking twice gives the same answer.
    #[test]
    fn coercion_is_deterministic(value in arb_value()) {
        let accessor = Accessor::new(&value);
        prop_assert_eq!(accessor.find_as_int(), accessor.find_as_int());
        prop_assert_eq!(accessor.find_as_bool(), accessor.find_as_bool());
        prop_assert_eq!(accessor.find_as_string(), accessor.find_as_string());
        prop_assert_eq!(accessor.find_as_list_of_int(), accessor.find_as_list_of_int());
    }

    /// JSON-representable trees survive the serde_json bridge unchanged:
    /// same structure, same Int/Float split, same member order.
    #[test]
    fn json_bridge_preserves_structure(value in arb_json_safe_value(3)) {
        let json = serde_json::Value::from(&value);
        let back = Value::from(json);
        prop_assert_eq!(back, value);
    }
}
