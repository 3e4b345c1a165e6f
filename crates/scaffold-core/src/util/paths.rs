//! File status checks and slash-separated import path handling.

use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a single `stat` on a path.
///
/// Only a missing file is distinguished; callers that branch on existence
/// treat [`FileStatus::Inaccessible`] the same as [`FileStatus::Exists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The path exists.
    Exists,
    /// Nothing exists at the path.
    NotFound,
    /// The stat failed for another reason (permissions, a file used as a
    /// directory, ...).
    Inaccessible(io::ErrorKind),
}

impl FileStatus {
    /// Stat `path`, following symlinks.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(_) => FileStatus::Exists,
            Err(e) if e.kind() == io::ErrorKind::NotFound => FileStatus::NotFound,
            Err(e) => FileStatus::Inaccessible(e.kind()),
        }
    }

    /// True only for [`FileStatus::NotFound`].
    pub fn is_not_found(self) -> bool {
        self == FileStatus::NotFound
    }
}

/// Join slash-separated import path elements and clean the result.
///
/// Empty elements are ignored, repeated slashes collapse, and `.`/`..`
/// segments are resolved lexically. Returns an empty string when every
/// element is empty.
///
/// ```
/// use scaffold_core::util::paths::join_import_path;
///
/// assert_eq!(join_import_path(&["github.com/acme/proj", "api"]), "github.com/acme/proj/api");
/// assert_eq!(join_import_path(&["github.com/acme/proj/", "api"]), "github.com/acme/proj/api");
/// assert_eq!(join_import_path(&["", "api"]), "api");
/// ```
pub fn join_import_path(elems: &[&str]) -> String {
    let joined = elems
        .iter()
        .filter(|e| !e.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return joined;
    }
    clean_import_path(&joined)
}

/// Lexically clean a slash-separated path.
pub fn clean_import_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
