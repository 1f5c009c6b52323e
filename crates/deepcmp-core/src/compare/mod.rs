//! Structural deep comparison.
//!
//! Walks two [`Value`](crate::Value) trees in lockstep and reports every
//! discrepancy with its path, kind and the two differing sub-values.
//!
//! ## Entry point
//!
//! ```
//! use deepcmp_core::compare::{compare_objects, render_human_summary, ComparisonConfig};
//! use deepcmp_core::Value;
//!
//! let config = ComparisonConfig::new("objA", "objB");
//! let found = compare_objects(&Value::array([1, 2, 3]), &Value::array([1, 9]), "", &config);
//! let summary = render_human_summary(&found, &config);
//! assert!(summary.contains("array-length-mismatch"));
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every call returns a (possibly empty) list; nothing fails.
//! - **Full enumeration**: siblings are compared independently; a mismatch
//!   never short-circuits the rest of the walk.
//! - **Determinism**: discrepancies come out in traversal order (mapping
//!   keys A-first then B-only, sequence indices ascending).
//! - **No shared state**: the configuration is read-only and may be shared
//!   across threads.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compare, compare_objects};
pub use human_summary::render_human_summary;
pub use model::{ComparisonConfig, Discrepancy, DiscrepancyKind};
