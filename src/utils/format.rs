//! Formatting and path helpers for display values.
//!
//! Repository paths use `/` as separator, have no leading or trailing
//! slash, and the root folder is the empty string.

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for the details panel (e.g., "500 B", "1.5 KB").
///
/// Unknown and zero sizes both render as `-`.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None | Some(0) => "-".to_string(),
        Some(bytes) if bytes < KIB => format!("{} B", bytes),
        Some(bytes) if bytes < MIB => format!("{:.1} KB", bytes as f64 / KIB as f64),
        Some(bytes) => format!("{:.1} MB", bytes as f64 / MIB as f64),
    }
}

/// Join a folder path and an entry name.
pub fn join_path(folder: &str, name: &str) -> String {
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

/// Parent folder of a path (`"a/b/c"` -> `"a/b"`, `"a"` -> `""`).
pub fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

/// Last segment of a path (`"a/b/c.txt"` -> `"c.txt"`).
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercased extension of the last path segment, if any.
pub fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Strip leading/trailing slashes and collapse `"."` to the root.
pub fn normalize_folder(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed == "." {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// First `len` characters of a commit id.
pub fn short_commit(commit: &str, len: usize) -> &str {
    match commit.char_indices().nth(len) {
        Some((idx, _)) => &commit[..idx],
        None => commit,
    }
}
