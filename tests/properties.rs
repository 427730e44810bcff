use jsondec::{
    array, at, boolean, lazy, map, null, nullable, number, one_of, string, DecodeError, Decoder,
    PathSegment,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e9..1.0e9f64).prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

fn assert_root_failure<T: std::fmt::Debug>(result: Result<T, DecodeError>) {
    let err = result.unwrap_err();
    assert_eq!("", err.location());
}

#[derive(Debug, PartialEq)]
enum Nested {
    Leaf(bool),
    List(Vec<Nested>),
}

fn nested() -> Decoder<Nested> {
    one_of(
        map(Nested::Leaf, boolean()),
        vec![map(Nested::List, array(lazy(nested)))],
    )
}

fn wrap(depth: usize, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, _| json!([inner]))
}

proptest! {
    #[test]
    fn string_is_identity(s in ".*") {
        prop_assert_eq!(s.clone(), string().decode_any(&json!(s)).unwrap());
    }

    #[test]
    fn number_is_identity(n in any::<i32>(), f in -1.0e12..1.0e12f64) {
        prop_assert_eq!(f64::from(n), number().decode_any(&json!(n)).unwrap());
        prop_assert_eq!(f, number().decode_any(&json!(f)).unwrap());
    }

    #[test]
    fn boolean_is_identity(b in any::<bool>()) {
        prop_assert_eq!(b, boolean().decode_any(&json!(b)).unwrap());
    }

    #[test]
    fn primitives_fail_at_root_on_other_kinds(value in json_value()) {
        if !value.is_string() {
            assert_root_failure(string().decode_any(&value));
        }
        if !value.is_number() {
            assert_root_failure(number().decode_any(&value));
        }
        if !value.is_boolean() {
            assert_root_failure(boolean().decode_any(&value));
        }
        if !value.is_null() {
            assert_root_failure(null().decode_any(&value));
        }
    }

    #[test]
    fn array_reports_first_bad_index(
        numbers in prop::collection::vec(any::<i32>(), 0..8),
        bad in 0usize..8,
    ) {
        let bad = bad.min(numbers.len());
        let mut items: Vec<Value> = numbers.iter().map(|n| json!(n)).collect();
        items.insert(bad, json!("x"));
        items.push(json!("y"));

        let err = array(number()).decode_any(&Value::Array(items)).unwrap_err();
        prop_assert_eq!(format!("[{}]", bad), err.location());
    }

    #[test]
    fn decoding_is_idempotent(value in json_value()) {
        let decoder = one_of(
            map(|n: f64| vec![Some(n)], number()),
            vec![array(nullable(number()))],
        );

        prop_assert_eq!(decoder.decode_any(&value), decoder.decode_any(&value));
    }

    #[test]
    fn map_applies_to_plain_result(n in any::<i32>()) {
        let plain = number().decode_any(&json!(n)).unwrap();
        let mapped = map(|x: f64| x * 3.0 - 1.0, number()).decode_any(&json!(n)).unwrap();
        prop_assert_eq!(plain * 3.0 - 1.0, mapped);
    }

    #[test]
    fn lazy_handles_any_finite_depth(depth in 0usize..40, b in any::<bool>()) {
        let expected = (0..depth).fold(Nested::Leaf(b), |inner, _| Nested::List(vec![inner]));
        prop_assert_eq!(expected, nested().decode_any(&wrap(depth, json!(b))).unwrap());
        prop_assert!(nested().decode_any(&wrap(depth, json!(1))).is_err());
    }

    #[test]
    fn at_finds_nested_leaf(keys in prop::collection::vec("[a-z]{1,3}", 0..5), s in "[a-z]*") {
        let input = keys
            .iter()
            .rev()
            .fold(json!([0, s.clone()]), |inner, key| {
                let mut fields = serde_json::Map::new();
                fields.insert(key.clone(), inner);
                Value::Object(fields)
            });

        let mut path: Vec<PathSegment> = keys.iter().cloned().map(PathSegment::Key).collect();
        path.push(PathSegment::Index(1));

        prop_assert_eq!(s, at(path, string()).decode_any(&input).unwrap());
    }
}
