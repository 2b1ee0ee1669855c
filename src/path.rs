//! Dot-delimited path helpers.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Splits a path into segments. The empty path has no segments.
///
/// ```
/// assert_eq!(dotpath::path::split("A.first.Title"), ["A", "first", "Title"]);
/// assert!(dotpath::path::split("").is_empty());
/// ```
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).collect()
}

/// Appends `parts` to an already traversed prefix.
///
/// `"old.path"` + `["remaining", "path"]` gives `"old.path.remaining.path"`.
#[must_use]
pub fn join(previous: &str, parts: &[&str]) -> String {
    let mut segments = Vec::with_capacity(parts.len() + 1);
    if !previous.is_empty() {
        segments.push(previous);
    }
    segments.extend_from_slice(parts);
    segments.join(".")
}
