//! Shallow diff reports.
//!
//! Where [`shallow_differs`](crate::shallow_differs) answers yes or no,
//! [`shallow_diff`] says which keys were added, removed or changed.
//!
//! ## Guarantees
//!
//! - **Consistency**: `shallow_diff(a, b).is_empty() == !shallow_differs(a, b)`.
//! - **Determinism**: every key list is sorted, independent of container order.
//! - **Shallowness**: values are compared with [`StrictEq`](crate::StrictEq), never deeply.

pub mod engine;
pub mod model;

pub use engine::shallow_diff;
pub use model::ShallowDiff;
