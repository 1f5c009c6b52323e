//! deepcmp core - structural deep comparison of dynamic values
//!
//! This crate provides:
//! - A dynamic value model covering the host-language shapes that matter for
//!   comparison (absent, null, primitives, dates, regexes, sequences, mappings)
//! - A total, recursive comparison engine that reports every discrepancy with
//!   its path, kind and both observed values
//! - A tagged JSON boundary for loading values from files
//! - Error, logging and configuration facilities shared with the CLI
//!
//! # Example
//!
//! ```
//! use deepcmp_core::{compare_objects, ComparisonConfig, Value};
//!
//! let a = Value::object([("id", 1), ("size", 3)]);
//! let b = Value::object([("id", 1), ("size", 4)]);
//!
//! let found = compare_objects(&a, &b, "", &ComparisonConfig::new("objA", "objB"));
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].path, "size");
//! ```

pub mod classify;
pub mod compare;
pub mod config;
pub mod errors;
pub mod json;
pub mod keys;
pub mod logging_facility;
pub mod path;
pub mod sample;
pub mod value;

// Used by the exported logging macros
pub use deepcmp_core_types;

// Re-export commonly used types
pub use compare::{
    compare, compare_objects, render_human_summary, ComparisonConfig, Discrepancy,
    DiscrepancyKind,
};
pub use errors::{DeepCmpError, ExError, ExErrorKind, Result};
pub use value::{DateValue, Handle, Mapping, RegexValue, Value};
