//! Error types for scaffold-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for scaffold-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a project file.
///
/// Package resolution never fails, so every variant here belongs to the
/// PROJECT file loader.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The project file could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The project file is not a valid YAML project document.
    #[error("Parse error in {}: {source}", .path.display())]
    Parse {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: yaml_serde::Error,
    },
}

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for the given path.
    pub fn parse(path: impl AsRef<Path>, source: yaml_serde::Error) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. } | Error::Parse { path, .. } => path,
        }
    }

    /// Returns whether the file simply did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
