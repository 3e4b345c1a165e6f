//! Resource descriptors.

use serde::{Deserialize, Serialize};

/// Suffix of the Go file that declares a resource's API types.
pub const TYPES_FILE_SUFFIX: &str = "_types.go";

/// A resource kind within an API group and version, e.g. `apps/v1 Deployment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    /// Type name, e.g. "Pod"
    pub kind: String,
    /// API version, e.g. "v1"
    pub version: String,
    /// API group, e.g. "apps"
    pub group: String,
}

impl Resource {
    /// Create a new resource descriptor.
    pub fn new(
        kind: impl Into<String>,
        version: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            version: version.into(),
            group: group.into(),
        }
    }

    /// File name holding this resource's types: lowercased kind plus `_types.go`.
    ///
    /// ```
    /// use scaffold_core::Resource;
    ///
    /// let pod = Resource::new("Pod", "v1", "core");
    /// assert_eq!(pod.types_file_name(), "pod_types.go");
    /// ```
    pub fn types_file_name(&self) -> String {
        format!("{}{}", self.kind.to_lowercase(), TYPES_FILE_SUFFIX)
    }
}
