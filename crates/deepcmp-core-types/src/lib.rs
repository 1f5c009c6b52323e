//! Core types shared across deepcmp crates
//!
//! This crate provides the canonical schema constants used by the
//! logging facility and by anything that inspects its output:
//!
//! - **Field keys**: `component`, `op`, `event`, `duration_ms`, ...
//! - **Comparison fields**: `path`, `kind`, `discrepancy_count`
//! - **Event names**: `start`, `end`, `end_error`

pub mod schema;
