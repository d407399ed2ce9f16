//! Recursive merge over JSON values

use serde_json::Value;

/// Deep merge two JSON values into a new value, leaving both inputs intact.
///
/// When both sides are objects the merge recurses per key and the result
/// holds the union of keys; on any other combination the right-hand value
/// wins wholesale.
pub fn deep_merge(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Object(lhs), Value::Object(rhs)) => {
            let mut merged = lhs.clone();
            for (key, rhs_value) in rhs {
                let value = match merged.get(key) {
                    Some(lhs_value) => deep_merge(lhs_value, rhs_value),
                    None => rhs_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        (_, rhs) => rhs.clone(),
    }
}
