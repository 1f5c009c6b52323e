pub mod compare;
pub mod demo;
pub mod output;

/// How a command finished when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No discrepancies (or nothing to report)
    Equal,
    /// At least one discrepancy was reported
    Different,
}
