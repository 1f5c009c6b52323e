//! Property path construction.
//!
//! Index keys render as `base[i]`, string keys as `base.key` (or just `key`
//! at the root). Key names are not escaped: a key containing `.` or `[`
//! produces an ambiguous path.

/// Path recorded for discrepancies at the top of the compared structure
pub const ROOT_PATH: &str = "(root)";

/// One step into a nested value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKey<'a> {
    Index(usize),
    Key(&'a str),
}

impl From<usize> for PathKey<'_> {
    fn from(i: usize) -> Self {
        PathKey::Index(i)
    }
}

impl<'a> From<&'a str> for PathKey<'a> {
    fn from(k: &'a str) -> Self {
        PathKey::Key(k)
    }
}

/// Extend `base` by one step
pub fn build_path<'a>(base: &str, key: impl Into<PathKey<'a>>) -> String {
    match key.into() {
        PathKey::Index(i) => format!("{base}[{i}]"),
        PathKey::Key(k) if base.is_empty() => k.to_string(),
        PathKey::Key(k) => format!("{base}.{k}"),
    }
}

/// Path as recorded on a discrepancy: the empty path becomes [`ROOT_PATH`]
pub fn display_path(path: &str) -> &str {
    if path.is_empty() {
        ROOT_PATH
    } else {
        path
    }
}
