//! Path containment algebra.
//!
//! Paths are dot-separated segment strings (`a.b.c`). Every ancestor and
//! descendant question in this crate reduces to [`contains`], which compares
//! whole segments so that `ab` is never treated as an ancestor of `abc`.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Returns `true` if `path` equals `subpath` or is an ancestor of it.
///
/// An ancestor must be followed by [`SEPARATOR`] in `subpath`; a partial
/// segment prefix does not count. The empty path gets no special treatment,
/// so it contains `""` but never a path such as `a`.
///
/// # Examples
///
/// ```
/// use concise_tree::path::contains;
///
/// assert!(contains("a.b", "a.b"));
/// assert!(contains("a.b", "a.b.c"));
/// assert!(!contains("a.b", "a.bc"));
/// assert!(!contains("a.b.c", "a.b"));
/// assert!(!contains("", "a"));
/// ```
pub fn contains(path: &str, subpath: &str) -> bool {
    match subpath.strip_prefix(path) {
        Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
        None => false,
    }
}

/// Returns `true` if `path` contains any of `subpaths`.
pub fn contains_any<S: AsRef<str>>(path: &str, subpaths: &[S]) -> bool {
    subpaths.iter().any(|subpath| contains(path, subpath.as_ref()))
}
