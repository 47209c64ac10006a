//! Shallow diff computation.

use crate::diff::model::ShallowDiff;
use crate::differ::same_slot;
use crate::mapping::Mapping;
use crate::strict_eq::StrictEq;
use crate::{log_op_end, log_op_start};

/// Compute which keys were added, removed or changed going from `a` to `b`.
///
/// Keys are cloned into the report via `ToOwned`, so `str`-keyed mappings
/// produce `ShallowDiff<String>`.
pub fn shallow_diff<A, B>(a: &A, b: &B) -> ShallowDiff<<A::Key as ToOwned>::Owned>
where
    A: Mapping + ?Sized,
    B: Mapping<Key = A::Key> + ?Sized,
    A::Key: ToOwned,
    <A::Key as ToOwned>::Owned: Ord,
    A::Value: StrictEq<B::Value>,
{
    log_op_start!("shallow_diff", a_len = a.len(), b_len = b.len());
    let start = std::time::Instant::now();

    let mut diff = ShallowDiff::empty();
    for (k, av) in a.iter() {
        match b.get(k) {
            None => diff.removed.push(k.to_owned()),
            Some(bv) if !same_slot(av, bv) && av.strict_ne(bv) => {
                diff.changed.push(k.to_owned())
            }
            Some(_) => {}
        }
    }
    diff.added = b
        .keys()
        .filter(|k| !a.contains_key(k))
        .map(ToOwned::to_owned)
        .collect();

    diff.added.sort();
    diff.removed.sort();
    diff.changed.sort();

    log_op_end!(
        "shallow_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        added_len = diff.added.len(),
        removed_len = diff.removed.len(),
        changed_len = diff.changed.len()
    );

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_added_removed_changed() {
        let a: HashMap<String, i32> = [("keep", 1), ("gone", 2), ("edit", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let b: HashMap<String, i32> = [("keep", 1), ("new", 4), ("edit", 5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let d = shallow_diff(&a, &b);
        assert_eq!(d.added, vec!["new".to_string()]);
        assert_eq!(d.removed, vec!["gone".to_string()]);
        assert_eq!(d.changed, vec!["edit".to_string()]);
    }

    #[test]
    fn test_keys_are_sorted() {
        let a: HashMap<i32, i32> = HashMap::new();
        let b: HashMap<i32, i32> = [(9, 0), (3, 0), (7, 0), (1, 0)].into_iter().collect();
        assert_eq!(shallow_diff(&a, &b).added, vec![1, 3, 7, 9]);
        assert_eq!(shallow_diff(&b, &a).removed, vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_self_diff_is_empty_even_with_nan() {
        let a: BTreeMap<i32, f64> = [(1, f64::NAN)].into_iter().collect();
        assert!(shallow_diff(&a, &a).is_empty());
        assert_eq!(shallow_diff(&a, &a.clone()).changed, vec![1]);
    }
}
