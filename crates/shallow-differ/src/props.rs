//! Dynamically typed property bags.
//!
//! [`PropValue`] models the values a rendering layer hands around as
//! component props or state: scalars that compare by value, and lists and
//! objects that are shared by reference. Cloning a list or object shares the
//! reference; building the same content twice does not.
//!
//! ```
//! use shallow_differ::{shallow_differs, PropValue, Props};
//!
//! let items = PropValue::list(vec![1.0.into(), 2.0.into()]);
//!
//! let mut a = Props::new();
//! a.insert("items", items.clone());
//! let mut b = Props::new();
//! b.insert("items", items);
//! assert!(!shallow_differs(&a, &b));
//!
//! b.insert("items", PropValue::list(vec![1.0.into(), 2.0.into()]));
//! assert!(shallow_differs(&a, &b));
//! ```

use crate::errors::{DifferError, Result};
use crate::mapping::Mapping;
use crate::strict_eq::StrictEq;
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single property value.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Present key, no value. Serializes as `null`.
    Undefined,
    Null,
    Bool(bool),
    /// Whole numbers serialize without a fractional part.
    Number(#[serde(serialize_with = "serialize_number")] f64),
    /// Strings are primitives and compare by content.
    Str(Arc<str>),
    /// Shared list, compared by reference.
    List(Arc<Vec<PropValue>>),
    /// Shared nested bag, compared by reference.
    Object(Arc<Props>),
}

// Largest integer an f64 holds exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S: serde::Serializer>(
    n: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

impl PropValue {
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        PropValue::Str(s.into())
    }

    /// Wrap `items` in a new shared list.
    pub fn list(items: Vec<PropValue>) -> Self {
        PropValue::List(Arc::new(items))
    }

    /// Wrap `props` in a new shared object.
    pub fn object(props: Props) -> Self {
        PropValue::Object(Arc::new(props))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Undefined => "undefined",
            PropValue::Null => "null",
            PropValue::Bool(_) => "boolean",
            PropValue::Number(_) => "number",
            PropValue::Str(_) => "string",
            PropValue::List(_) => "list",
            PropValue::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PropValue::Undefined)
    }
}

impl StrictEq for PropValue {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Undefined, PropValue::Undefined) | (PropValue::Null, PropValue::Null) => {
                true
            }
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Str(a), PropValue::Str(b)) => a == b,
            (PropValue::List(a), PropValue::List(b)) => Arc::ptr_eq(a, b),
            (PropValue::Object(a), PropValue::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        PropValue::Bool(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Number(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        PropValue::Number(f64::from(v))
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Str(Arc::from(v))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Str(Arc::from(v))
    }
}

impl From<Props> for PropValue {
    fn from(v: Props) -> Self {
        PropValue::object(v)
    }
}

/// Every JSON array and object becomes a fresh shared reference.
impl From<Value> for PropValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(b),
            Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => PropValue::Str(Arc::from(s)),
            Value::Array(items) => {
                PropValue::list(items.into_iter().map(PropValue::from).collect())
            }
            Value::Object(map) => PropValue::object(
                map.into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// An owned property bag keyed by name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Object roots become entries; any other JSON root has no keys.
    pub fn from_json_value(value: Value) -> Self {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, PropValue::from(v)))
                .collect(),
            _ => Props::new(),
        }
    }

    /// Parse a JSON document into props.
    ///
    /// # Errors
    ///
    /// - `InvalidUtf8` if `bytes` is not UTF-8
    /// - `InvalidJson` if the text is not a JSON document
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        log_op_start!("props_from_json", byte_len = bytes.len());
        let start = std::time::Instant::now();

        let props = parse_json_slice(bytes).map_err(|e| {
            log_op_error!(
                "props_from_json",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "props_from_json",
            duration_ms = start.elapsed().as_millis() as u64,
            key_count = props.len()
        );

        Ok(props)
    }

    /// Whole numbers are written as integers (`1`, not `1.0`); non-finite
    /// numbers and `Undefined` are written as `null`.
    ///
    /// # Errors
    ///
    /// `Serialization` if the serializer rejects a value.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DifferError::Serialization {
            reason: e.to_string(),
        })
    }
}

fn parse_json_slice(bytes: &[u8]) -> Result<Props> {
    let text = std::str::from_utf8(bytes).map_err(|e| DifferError::InvalidUtf8 {
        reason: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(text).map_err(|e| DifferError::InvalidJson {
        reason: e.to_string(),
    })?;
    Ok(Props::from_json_value(value))
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Props::from_json_value)
    }
}

impl Mapping for Props {
    type Key = str;
    type Value = PropValue;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}
