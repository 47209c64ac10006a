//! Structured diff reports over property bags.

mod common;

use common::props;
use serde_json::json;
use shallow_differ::{shallow_diff, shallow_differs, Mapping, PropValue, Props, ShallowDiff};

#[test]
fn identical_primitive_props_produce_empty_diff() {
    let d = shallow_diff(
        &props(json!({"x": 1, "y": "a"})),
        &props(json!({"x": 1, "y": "a"})),
    );
    assert!(d.is_empty());
    assert_eq!(d, ShallowDiff::empty());
}

#[test]
fn report_lists_each_category() {
    let a = props(json!({"title": "Inbox", "count": 3, "archived": false}));
    let b = props(json!({"title": "Inbox", "count": 4, "selected": 1}));

    let d = shallow_diff(&a, &b);
    assert_eq!(d.added, vec!["selected".to_string()]);
    assert_eq!(d.removed, vec!["archived".to_string()]);
    assert_eq!(d.changed, vec!["count".to_string()]);
    assert!(d.keys_changed());
    assert_eq!(d.len(), 3);
}

#[test]
fn fresh_list_is_reported_as_changed() {
    let d = shallow_diff(
        &props(json!({"items": [1, 2]})),
        &props(json!({"items": [1, 2]})),
    );
    assert_eq!(d.changed, vec!["items".to_string()]);
    assert!(!d.keys_changed());
}

#[test]
fn undefined_entry_counts_as_present_key() {
    let a = props(json!({}));
    let mut b = a.clone();
    b.insert("ghost", PropValue::Undefined);

    let d = shallow_diff(&a, &b);
    assert_eq!(d.added, vec!["ghost".to_string()]);
    assert!(shallow_differs(&a, &b));
}

#[test]
fn diff_agrees_with_differs() {
    let cases = [
        (json!({}), json!({})),
        (json!({"x": 1}), json!({"x": 1, "y": 2})),
        (json!({"x": 1, "y": 2}), json!({"x": 1, "y": 3})),
        (json!({"x": [1, 2]}), json!({"x": [1, 2]})),
        (json!({"x": 1, "y": "a"}), json!({"x": 1, "y": "a"})),
        (json!({"x": null}), json!({"x": null})),
    ];

    for (a, b) in cases {
        let (a, b) = (props(a), props(b));
        assert_eq!(
            shallow_diff(&a, &b).is_empty(),
            !shallow_differs(&a, &b),
            "diff/differs disagree for {:?} vs {:?}",
            a,
            b
        );
    }
}

#[test]
fn diff_serializes_to_json() {
    let d = shallow_diff(&props(json!({"a": 1})), &props(json!({"b": 1})));
    let value = serde_json::to_value(&d).unwrap();
    assert_eq!(
        value,
        json!({"added": ["b"], "removed": ["a"], "changed": []})
    );

    let back: ShallowDiff<String> = serde_json::from_value(value).unwrap();
    assert_eq!(back, d);
}

// ---------------------------------------------------------------------------
// Zero-sized mappings share one address
// ---------------------------------------------------------------------------

static LIMIT: u32 = 10;

struct EmptyConfig;
struct DefaultConfig;

impl Mapping for EmptyConfig {
    type Key = str;
    type Value = u32;

    fn len(&self) -> usize {
        0
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &u32)> + '_ {
        std::iter::empty()
    }

    fn get(&self, _key: &str) -> Option<&u32> {
        None
    }
}

impl Mapping for DefaultConfig {
    type Key = str;
    type Value = u32;

    fn len(&self) -> usize {
        1
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &u32)> + '_ {
        std::iter::once(("limit", &LIMIT))
    }

    fn get(&self, key: &str) -> Option<&u32> {
        (key == "limit").then_some(&LIMIT)
    }
}

#[test]
fn zero_sized_mappings_are_compared_by_entries() {
    let (empty, defaults) = (EmptyConfig, DefaultConfig);

    assert!(shallow_differs(&empty, &defaults));
    let d = shallow_diff(&empty, &defaults);
    assert_eq!(d.added, vec!["limit".to_string()]);
    assert!(d.removed.is_empty());

    let d = shallow_diff(&defaults, &empty);
    assert_eq!(d.removed, vec!["limit".to_string()]);
}

#[test]
fn self_diff_with_nan_is_empty() {
    let mut a = Props::new();
    a.insert("ratio", f64::NAN);
    assert!(!shallow_differs(&a, &a));
    assert!(shallow_diff(&a, &a).is_empty());
    assert_eq!(shallow_diff(&a, &a.clone()).changed, vec!["ratio".to_string()]);
}
