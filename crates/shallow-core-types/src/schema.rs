//! Canonical schema constants for structured logging
//!
//! These constants keep field names identical between the emitting macros
//! and anything that inspects captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison outcome
pub const FIELD_DIFFERS: &str = "differs";
pub const FIELD_SCAN: &str = "scan";

// Diff report sizes
pub const FIELD_ADDED_LEN: &str = "added_len";
pub const FIELD_REMOVED_LEN: &str = "removed_len";
pub const FIELD_CHANGED_LEN: &str = "changed_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Scan phases of the shallow comparison
pub const SCAN_PRESENCE: &str = "presence";
pub const SCAN_VALUES: &str = "values";
