use proptest::prelude::*;
use serde_json::{Map, Number, Value};

/// Strategy for logical cache keys
pub fn logical_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:_.-]{1,48}"
}

/// Strategy for key prefixes, including the empty prefix
pub fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,8}_?"
}

/// Strategy for arbitrary JSON documents
///
/// Floats are restricted to eighths, which survive a text round trip unchanged.
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1_000_000i32..1_000_000, 1u32..8).prop_map(|(whole, eighths)| {
            let f = f64::from(whole) + f64::from(eighths) / 8.0;
            Number::from_f64(f).map_or(Value::Null, Value::Number)
        }),
        "[^\u{0}]{0,24}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}
