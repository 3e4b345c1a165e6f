//! Scaffold Core — resource package resolution and PROJECT file loading.
//!
//! Two independent, stateless pieces used by project scaffolding:
//!
//! - [`resolver`]: decides whether a resource's API types live in the
//!   project or in `k8s.io/api`, and computes the package import path and
//!   fully-qualified group name.
//! - [`project`]: loads the PROJECT file describing a scaffolded project,
//!   defaulting the scaffolding version of older projects.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`groups`]: Well-known Kubernetes API groups
//! - [`resource`]: Resource descriptors
//! - [`util`]: File status and import path helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod groups;
pub mod project;
pub mod resolver;
pub mod resource;
pub mod util;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use project::{ProjectFile, VERSION_1, VERSION_2, load_project_file};
pub use resolver::{PackageResolver, ResourceInfo, resource_info};
pub use resource::Resource;
