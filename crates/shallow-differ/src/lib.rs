//! shallow-differ - Shallow inequality checks over key-value mappings
//!
//! The core question this crate answers is "did anything in this property bag
//! change?", cheaply: two mappings differ when their key sets differ or when a
//! shared key holds values that are not *strictly* equal. Strict equality is
//! value equality for primitives and identity equality for shared composites
//! (`Arc`, `Rc`), never a deep structural walk.
//!
//! This crate provides:
//! - [`StrictEq`]: the per-value comparison
//! - [`Mapping`]: a flat, own-keys-only view over `HashMap`, `BTreeMap`,
//!   `serde_json::Map`/`Value` and [`Props`]
//! - [`shallow_differs`] / [`shallow_equal`]: the comparison itself
//! - [`shallow_diff`]: a structured report of added, removed and changed keys
//! - [`Props`] / [`PropValue`]: a dynamically typed property bag with JSON ingestion
//!
//! ```
//! use shallow_differ::{shallow_differs, Props};
//!
//! let a: Props = [("x", 1.0), ("y", 2.0)].into_iter().collect();
//! let b: Props = [("x", 1.0), ("y", 3.0)].into_iter().collect();
//! assert!(shallow_differs(&a, &b));
//! assert!(!shallow_differs(&a, &a));
//! ```

pub mod diff;
pub mod differ;
pub mod errors;
pub mod logging_facility;
pub mod mapping;
pub mod props;
pub mod strict_eq;

// Re-export commonly used types
pub use diff::{shallow_diff, ShallowDiff};
pub use differ::{shallow_differs, shallow_equal};
pub use errors::{DifferError, ExError, ExErrorKind, Result};
pub use mapping::Mapping;
pub use props::{PropValue, Props};
pub use strict_eq::StrictEq;

// Paths used by the exported logging macros
#[doc(hidden)]
pub use shallow_core_types;
#[doc(hidden)]
pub use tracing;
