//! PROJECT file loading.
//!
//! A scaffolded project records how it was generated in a small YAML document
//! at its root:
//!
//! ```yaml
//! version: "2"
//! domain: acme.com
//! repo: github.com/acme/proj
//! ```
//!
//! Projects generated before the file carried a `version` are read as
//! [`VERSION_1`].

use std::fs;
use std::path::Path;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use yaml_serde::{Mapping, Value};

use crate::error::{Error, Result};
use crate::resolver::PackageResolver;

/// Scaffolding version of projects whose PROJECT file has no `version`.
pub const VERSION_1: &str = "1";

/// Second-generation scaffolding layout.
pub const VERSION_2: &str = "2";

/// Contents of a PROJECT file.
///
/// Deserialization is lenient: `version`, `domain` and `repo` take any scalar
/// as its text, and every other top-level entry lands in `extra` whatever the
/// type of its key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectFile {
    /// Scaffolding version the project was generated with
    pub version: String,

    /// Domain appended to the project's API groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Import path of the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Every other top-level entry, kept verbatim
    #[serde(flatten)]
    pub extra: Mapping,
}

impl<'de> Deserialize<'de> for ProjectFile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(ProjectFile::default()),
            Value::Mapping(mapping) => ProjectFile::from_mapping(mapping),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a PROJECT mapping",
            )),
        }
    }
}

impl ProjectFile {
    /// Read and parse the PROJECT file at `path`.
    ///
    /// See [`load_project_file`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_project_file(path)
    }

    /// Parse PROJECT file contents, backfilling a missing version.
    ///
    /// ```
    /// use scaffold_core::{ProjectFile, VERSION_1};
    ///
    /// let project = ProjectFile::from_yaml_str("domain: acme.com\n").unwrap();
    /// assert_eq!(project.version, VERSION_1);
    /// assert_eq!(project.domain.as_deref(), Some("acme.com"));
    /// ```
    pub fn from_yaml_str(contents: &str) -> std::result::Result<Self, yaml_serde::Error> {
        Self::from_yaml_slice(contents.as_bytes())
    }

    /// Parse raw PROJECT file bytes, backfilling a missing version.
    ///
    /// Bytes that are not valid UTF-8 are a parse error.
    pub fn from_yaml_slice(contents: &[u8]) -> std::result::Result<Self, yaml_serde::Error> {
        // An empty document is an empty mapping, not an error.
        let mut project = if contents.iter().all(u8::is_ascii_whitespace) {
            ProjectFile::default()
        } else {
            yaml_serde::from_slice(contents)?
        };
        if project.version.is_empty() {
            log::debug!("PROJECT file has no version, assuming {VERSION_1}");
            project.version = VERSION_1.to_string();
        }
        Ok(project)
    }

    /// Whether the project uses the original, unversioned layout.
    pub fn is_legacy(&self) -> bool {
        self.version == VERSION_1
    }

    /// A resolver for this project's `repo` and `domain`.
    ///
    /// Missing values are treated as empty strings.
    pub fn package_resolver(&self) -> PackageResolver {
        PackageResolver::new(
            self.repo.as_deref().unwrap_or_default(),
            self.domain.as_deref().unwrap_or_default(),
        )
    }

    fn from_mapping<E: de::Error>(mut mapping: Mapping) -> std::result::Result<Self, E> {
        let version = take_scalar(&mut mapping, "version")?.unwrap_or_default();
        let domain = take_scalar(&mut mapping, "domain")?;
        let repo = take_scalar(&mut mapping, "repo")?;
        Ok(ProjectFile {
            version,
            domain,
            repo,
            extra: mapping,
        })
    }
}

/// Remove `key` and render its scalar value as text; null reads as absent.
fn take_scalar<E: de::Error>(
    mapping: &mut Mapping,
    key: &str,
) -> std::result::Result<Option<String>, E> {
    match mapping.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(E::invalid_type(
            unexpected(&other),
            &format!("a scalar `{key}`").as_str(),
        )),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Sequence(_) => Unexpected::Seq,
        Value::Mapping(_) => Unexpected::Map,
        Value::Tagged(_) => Unexpected::Other("tagged value"),
    }
}

/// Read the PROJECT file at `path` and backfill a missing version with
/// [`VERSION_1`].
///
/// Fails with [`Error::Io`] if the file cannot be read and [`Error::Parse`]
/// if its contents are not a YAML mapping of the expected shape, including
/// contents that are not valid UTF-8. Nothing is retried and no partially
/// parsed descriptor is ever returned.
pub fn load_project_file(path: impl AsRef<Path>) -> Result<ProjectFile> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|e| Error::io(path, e))?;
    ProjectFile::from_yaml_slice(&contents).map_err(|e| Error::parse(path, e))
}
