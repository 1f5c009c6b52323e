//! Canonical schema constants for structured logging and events
//!
//! These constants keep log output consistent between the engine, the CLI
//! and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_KIND: &str = "kind";
pub const FIELD_DISCREPANCY_COUNT: &str = "discrepancy_count";
pub const FIELD_LABEL_A: &str = "label_a";
pub const FIELD_LABEL_B: &str = "label_b";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Operation names
pub const OP_COMPARE_OBJECTS: &str = "compare_objects";
pub const OP_PARSE_JSON: &str = "parse_json";
pub const OP_LOAD_CONFIG: &str = "load_config";
