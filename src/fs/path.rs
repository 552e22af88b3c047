//! Path resolution
//!
//! All VFS paths are absolute, '/'-rooted and rendered with forward slashes
//! regardless of the host OS.

/// Normalize a path: resolve `.` and `..`, collapse repeated separators and
/// drop any trailing separator. Relative input is treated as rooted at `/`.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve `raw` against `cwd`. Absolute input ignores `cwd`.
pub fn resolve_path(raw: &str, cwd: &str) -> String {
    if raw.starts_with('/') {
        normalize_path(raw)
    } else if cwd.ends_with('/') {
        normalize_path(&format!("{}{}", cwd, raw))
    } else {
        normalize_path(&format!("{}/{}", cwd, raw))
    }
}

/// Prefix every descendant of `path` starts with.
pub fn child_prefix(path: &str) -> String {
    if path == "/" {
        "/".to_string()
    } else {
        format!("{}/", path)
    }
}
