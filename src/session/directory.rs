//! Log directory normalization.

/// Normalize a log directory: forward slashes only, with a trailing slash.
///
/// An empty directory means the working directory.
///
/// ```
/// use daylog::session::normalize_directory;
///
/// assert_eq!(normalize_directory("a\\b\\c"), "a/b/c/");
/// assert_eq!(normalize_directory("a/b/c/"), "a/b/c/");
/// ```
pub fn normalize_directory(dir: &str) -> String {
    if dir.is_empty() {
        return "./".to_string();
    }
    let mut out = dir.replace('\\', "/");
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
