//! Well-known Kubernetes API groups.
//!
//! Resources in these groups ship with `k8s.io/api` rather than with the
//! project being scaffolded. Each entry maps a group to the domain suffix of
//! its fully-qualified name; an empty suffix means the group is used bare
//! (e.g. `apps`, `batch`).
//!
//! Any group not listed here is treated as project-local.

/// Group → domain suffix for every well-known API group.
static CORE_GROUPS: &[(&str, &str)] = &[
    ("apps", ""),
    ("admission", "k8s.io"),
    ("admissionregistration", "k8s.io"),
    ("auditregistration", "k8s.io"),
    ("apiextensions", "k8s.io"),
    ("authentication", "k8s.io"),
    ("authorization", "k8s.io"),
    ("autoscaling", ""),
    ("batch", ""),
    ("certificates", "k8s.io"),
    ("coordination", "k8s.io"),
    ("core", ""),
    ("events", "k8s.io"),
    ("extensions", ""),
    ("imagepolicy", "k8s.io"),
    ("networking", "k8s.io"),
    ("node", "k8s.io"),
    ("metrics", "k8s.io"),
    ("policy", ""),
    ("rbac.authorization", "k8s.io"),
    ("scheduling", "k8s.io"),
    ("setting", "k8s.io"),
    ("storage", "k8s.io"),
];

/// Domain suffix of a well-known group, or `None` for project-local groups.
///
/// ```
/// use scaffold_core::groups::core_group_domain;
///
/// assert_eq!(core_group_domain("apps"), Some(""));
/// assert_eq!(core_group_domain("networking"), Some("k8s.io"));
/// assert_eq!(core_group_domain("widgets"), None);
/// ```
pub fn core_group_domain(group: &str) -> Option<&'static str> {
    CORE_GROUPS
        .iter()
        .find(|(name, _)| *name == group)
        .map(|(_, domain)| *domain)
}

/// Whether `group` is one of the well-known API groups.
pub fn is_core_group(group: &str) -> bool {
    core_group_domain(group).is_some()
}

/// All well-known groups with their domain suffixes.
pub fn core_groups() -> impl Iterator<Item = (&'static str, &'static str)> {
    CORE_GROUPS.iter().copied()
}
