//! Filesystem and import-path helpers.
//!
//! # Modules
//!
//! - [`paths`]: File status checks and Go-style import path joining

pub mod paths;
