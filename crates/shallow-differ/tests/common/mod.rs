use serde_json::Value;
use shallow_differ::Props;

/// Build props from a JSON literal; every array/object in it is a fresh reference
#[allow(dead_code)]
pub fn props(value: Value) -> Props {
    Props::from_json_value(value)
}
