//! Resource package resolution.
//!
//! Decides whether a resource's API types live in the project being
//! scaffolded or in `k8s.io/api`, and computes the import path of that
//! package together with the resource's fully-qualified group name.
//!
//! The decision hinges on one file: `api/<version>/<kind>_types.go` under the
//! project root. When it exists the resource is project-local. When it is
//! missing and the group is a well-known one (see [`crate::groups`]), the
//! resource belongs to `k8s.io/api/<group>`. Every other case falls back to
//! the project-local package.
//!
//! # Example
//!
//! ```no_run
//! use scaffold_core::{PackageResolver, Resource};
//!
//! let resolver = PackageResolver::new("github.com/acme/proj", "acme.com")
//!     .with_root("/src/proj");
//!
//! let info = resolver.resolve(&Resource::new("Deployment", "v1", "apps"));
//! println!("{} ({})", info.package(), info.group_domain());
//! ```

use std::path::{Path, PathBuf};

use crate::groups::core_group_domain;
use crate::resource::Resource;
use crate::util::paths::{FileStatus, join_import_path};

/// Directory, relative to the project root, holding API type definitions.
pub const API_DIR: &str = "api";

/// Import path prefix of the upstream Kubernetes API types.
pub const K8S_API_PACKAGE: &str = "k8s.io/api";

/// Where a resource's types live.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceInfo {
    package: String,
    group_domain: String,
}

impl ResourceInfo {
    /// Import path of the package declaring the resource's types.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fully-qualified group, e.g. `apps` or `networking.k8s.io`.
    pub fn group_domain(&self) -> &str {
        &self.group_domain
    }

    /// Split into `(package, group_domain)`.
    pub fn into_parts(self) -> (String, String) {
        (self.package, self.group_domain)
    }
}

impl From<ResourceInfo> for (String, String) {
    fn from(info: ResourceInfo) -> Self {
        info.into_parts()
    }
}

/// Resolves resources against one project.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    /// Import path of the project, e.g. "github.com/acme/proj"
    repo: String,
    /// Domain appended to project-local groups, e.g. "acme.com"
    domain: String,
    /// Directory the `api/` tree is looked up in; empty means the working directory
    root: PathBuf,
}

impl PackageResolver {
    /// Create a resolver for the project at `repo` using `domain` for its
    /// own groups. Type files are looked up relative to the working directory.
    pub fn new(repo: &str, domain: &str) -> Self {
        Self {
            repo: repo.to_string(),
            domain: domain.to_string(),
            root: PathBuf::new(),
        }
    }

    /// Look up type files under `root` instead of the working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Project import path.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Domain for project-local groups.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Directory type files are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that would declare `resource`'s types in this project.
    ///
    /// Leading separators in the version or kind are dropped, so the path
    /// always stays under `root/api`.
    pub fn types_path(&self, resource: &Resource) -> PathBuf {
        let file_name = resource.types_file_name();
        self.root
            .join(API_DIR)
            .join(strip_leading_separators(&resource.version))
            .join(strip_leading_separators(&file_name))
    }

    /// Resolve the package and fully-qualified group of `resource`.
    ///
    /// Never fails. Only a missing type file sends a well-known group to
    /// `k8s.io/api`; any other stat outcome, including permission errors,
    /// keeps the resource project-local.
    pub fn resolve(&self, resource: &Resource) -> ResourceInfo {
        let types_path = self.types_path(resource);
        log::trace!("Checking for local types at {}", types_path.display());

        match FileStatus::of(&types_path) {
            FileStatus::NotFound => {
                if let Some(domain) = core_group_domain(&resource.group) {
                    let info = upstream_info(&resource.group, domain);
                    log::debug!(
                        "Resolved {}/{} {} to upstream package {}",
                        resource.group,
                        resource.version,
                        resource.kind,
                        info.package
                    );
                    return info;
                }
            }
            FileStatus::Inaccessible(kind) => {
                log::debug!(
                    "Could not stat {} ({kind:?}); treating as project-local",
                    types_path.display()
                );
            }
            FileStatus::Exists => {}
        }

        let info = ResourceInfo {
            package: join_import_path(&[&self.repo, API_DIR]),
            group_domain: format!("{}.{}", resource.group, self.domain),
        };
        log::debug!(
            "Resolved {}/{} {} to project package {}",
            resource.group,
            resource.version,
            resource.kind,
            info.package
        );
        info
    }
}

fn strip_leading_separators(component: &str) -> &str {
    component.trim_start_matches(std::path::is_separator)
}

fn upstream_info(group: &str, domain: &str) -> ResourceInfo {
    let group_domain = if domain.is_empty() {
        group.to_string()
    } else {
        format!("{group}.{domain}")
    };
    ResourceInfo {
        package: join_import_path(&[K8S_API_PACKAGE, group]),
        group_domain,
    }
}

/// Resolve `resource` for the project at `repo`, looking for its type file
/// relative to the current working directory.
///
/// Shorthand for `PackageResolver::new(repo, domain).resolve(resource)`.
pub fn resource_info(resource: &Resource, repo: &str, domain: &str) -> ResourceInfo {
    PackageResolver::new(repo, domain).resolve(resource)
}
