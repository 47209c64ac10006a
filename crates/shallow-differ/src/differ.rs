//! The shallow inequality check.
//!
//! Two scans, each stopping at the first difference:
//! 1. every key of `a` must be present in `b` (presence only, the stored
//!    value is not looked at);
//! 2. every key of `b` must be present in `a` with a strictly equal value.
//!
//! A value compared with its own storage slot is always equal, so a mapping
//! compared with itself never differs, even when it holds values such as
//! `NaN` that are not strictly equal to themselves.

use crate::mapping::Mapping;
use crate::strict_eq::StrictEq;
use shallow_core_types::schema::{SCAN_PRESENCE, SCAN_VALUES};

/// Returns `true` if `a` and `b` have different key sets, or if any shared
/// key maps to values that are not strictly equal.
///
/// Total over all inputs: no errors, no panics, no mutation.
pub fn shallow_differs<A, B>(a: &A, b: &B) -> bool
where
    A: Mapping + ?Sized,
    B: Mapping<Key = A::Key> + ?Sized,
    A::Value: StrictEq<B::Value>,
{
    if a.keys().any(|k| !b.contains_key(k)) {
        trace_difference(SCAN_PRESENCE);
        return true;
    }

    let value_changed = b.iter().any(|(k, bv)| match a.get(k) {
        Some(av) => !same_slot(av, bv) && av.strict_ne(bv),
        None => true,
    });
    if value_changed {
        trace_difference(SCAN_VALUES);
    }
    value_changed
}

/// Complement of [`shallow_differs`].
pub fn shallow_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Mapping + ?Sized,
    B: Mapping<Key = A::Key> + ?Sized,
    A::Value: StrictEq<B::Value>,
{
    !shallow_differs(a, b)
}

/// Both references point at the same stored value. Zero-sized values share
/// a dangling address, so they never count as the same slot.
pub(crate) fn same_slot<A, B>(a: &A, b: &B) -> bool {
    std::mem::size_of::<A>() != 0
        && std::ptr::eq(a as *const A as *const (), b as *const B as *const ())
}

fn trace_difference(scan: &'static str) {
    tracing::trace!(
        component = module_path!(),
        op = "shallow_differs",
        scan = scan,
        differs = true,
    );
}
