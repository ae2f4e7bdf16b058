//! Forward-slash path handling.
//!
//! Device paths are always joined with forward slashes regardless of the host
//! platform; listing rows carry relative link targets that must be resolved
//! against the page's own absolute path.

/// Joins `rel` onto `base`.
///
/// An absolute `rel` wins outright, which makes joining an absolute path
/// against itself a no-op (no double slashes). Backslashes are normalized
/// away so the result is usable directly against the device's base URL.
pub fn join(base: &str, rel: &str) -> String {
    let rel = rel.replace('\\', "/");
    if rel.starts_with('/') {
        return rel;
    }
    let base = base.replace('\\', "/");
    format!("{}/{}", base.trim_end_matches('/'), rel)
}

/// Final segment of a forward-slash path.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}
