//! Property-based tests for package resolution and PROJECT loading.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::groups::{core_group_domain, core_groups};
    use crate::{PackageResolver, ProjectFile, Resource, VERSION_1};
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn core_group() -> impl Strategy<Value = &'static str> {
        let groups: Vec<&'static str> = core_groups().map(|(name, _)| name).collect();
        proptest::sample::select(groups)
    }

    fn local_group() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,12}".prop_filter("not a core group", |g| core_group_domain(g).is_none())
    }

    proptest! {
        #[test]
        fn test_core_group_without_local_types(
            group in core_group(),
            kind in "[A-Z][A-Za-z]{0,12}",
            version in "v[1-9](alpha[1-9]|beta[1-9])?",
        ) {
            let dir = TempDir::new().unwrap();
            let resolver = PackageResolver::new("github.com/acme/proj", "acme.com")
                .with_root(dir.path());
            let info = resolver.resolve(&Resource::new(kind, version, group));

            let domain = core_group_domain(group).unwrap();
            let expected = if domain.is_empty() {
                group.to_string()
            } else {
                format!("{group}.{domain}")
            };
            prop_assert_eq!(info.package(), format!("k8s.io/api/{group}"));
            prop_assert_eq!(info.group_domain(), expected);
        }

        #[test]
        fn test_local_group_is_project_local(
            group in local_group(),
            domain in "[a-z]{1,8}\\.(com|io|org)",
            with_types in any::<bool>(),
        ) {
            let dir = TempDir::new().unwrap();
            if with_types {
                let api = dir.path().join("api").join("v1");
                fs::create_dir_all(&api).unwrap();
                fs::write(api.join("widget_types.go"), "").unwrap();
            }
            let resolver = PackageResolver::new("github.com/acme/proj", &domain)
                .with_root(dir.path());
            let info = resolver.resolve(&Resource::new("Widget", "v1", group.clone()));

            prop_assert_eq!(info.package(), "github.com/acme/proj/api");
            prop_assert_eq!(info.group_domain(), format!("{group}.{domain}"));
        }

        #[test]
        fn test_local_types_win_over_core_groups(group in core_group()) {
            let dir = TempDir::new().unwrap();
            let api = dir.path().join("api").join("v1");
            fs::create_dir_all(&api).unwrap();
            fs::write(api.join("thing_types.go"), "").unwrap();

            let resolver = PackageResolver::new("example.org/x", "x.org").with_root(dir.path());
            let info = resolver.resolve(&Resource::new("Thing", "v1", group));
            prop_assert_eq!(info.package(), "example.org/x/api");
            prop_assert_eq!(info.group_domain(), format!("{group}.x.org"));
        }

        #[test]
        fn test_explicit_version_is_kept(version in "[1-9][0-9]{0,3}") {
            let project = ProjectFile::from_yaml_str(&format!("version: \"{version}\"\n")).unwrap();
            prop_assert_eq!(project.version, version);
        }

        #[test]
        fn test_missing_version_is_backfilled(domain in "[a-z]{1,10}\\.com") {
            let project = ProjectFile::from_yaml_str(&format!("domain: {domain}\n")).unwrap();
            prop_assert_eq!(project.version, VERSION_1);
            prop_assert_eq!(project.domain, Some(domain));
        }
    }
}
