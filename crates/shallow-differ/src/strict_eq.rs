//! Strict equality: the per-value test behind the shallow comparison.
//!
//! Primitives compare by value, exactly as their `PartialEq` does, so `NaN`
//! is never equal to itself and `0.0` equals `-0.0`. Shared composites
//! (`Arc<T>`, `Rc<T>`) compare by the address they point at; two separately
//! allocated values with identical contents are *not* strictly equal.
//!
//! There are deliberately no impls for owned collections such as `Vec<T>` or
//! `HashMap<K, V>`: an inline collection has no identity to compare, and a
//! structural impl would turn the shallow check into a deep one.
//!
//! Plain references (`&T`) have no impl either. Identity on `&T` would make
//! `&str` values compare by address, while strings are primitives and compare
//! by content. Borrowed composites are shared through `Arc`/`Rc` instead.

use std::rc::Rc;
use std::sync::Arc;

/// Equality without coercion or recursion.
pub trait StrictEq<Rhs: ?Sized = Self> {
    fn strict_eq(&self, other: &Rhs) -> bool;

    fn strict_ne(&self, other: &Rhs) -> bool {
        !self.strict_eq(other)
    }
}

macro_rules! strict_eq_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrictEq for $t {
                #[inline]
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

strict_eq_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl StrictEq<str> for String {
    #[inline]
    fn strict_eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl StrictEq<String> for str {
    #[inline]
    fn strict_eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl<T: ?Sized> StrictEq for Arc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> StrictEq for Rc<T> {
    #[inline]
    fn strict_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.strict_eq(b),
            _ => false,
        }
    }
}

/// JSON scalars compare by value; arrays and objects compare by the address of
/// the node, so only the very same node is equal to itself.
impl StrictEq for serde_json::Value {
    fn strict_eq(&self, other: &Self) -> bool {
        use serde_json::Value;

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => number_eq(a, b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
                std::ptr::eq(self, other)
            }
            _ => false,
        }
    }
}

// `1` and `1.0` are the same number even though serde_json stores them in
// different representations.
fn number_eq(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
