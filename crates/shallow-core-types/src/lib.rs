//! Core types shared across shallow-differ facilities
//!
//! - **Schema constants**: Canonical field keys and event names used by the
//!   logging macros and by tests asserting on captured events

pub mod schema;
