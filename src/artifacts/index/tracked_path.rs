use crate::areas::repository::METADATA_DIR;
use crate::errors::RepositoryError;
use std::path::{Component, Path};

/// A file path relative to the work tree, as stored in the index
///
/// Paths are normalized to `/`-separated components with `.` segments removed.
/// They never escape the work tree and never point into the metadata directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackedPath(String);

impl TrackedPath {
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let invalid = |reason: &str| RepositoryError::InvalidPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.contains(['\n', '\r']) {
            return Err(invalid("line breaks are not allowed").into());
        }

        let mut components = Vec::new();
        for component in Path::new(raw).components() {
            match component {
                Component::Normal(part) => {
                    components.push(
                        part.to_str()
                            .ok_or_else(|| invalid("path is not valid UTF-8"))?,
                    );
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(invalid("'..' is not allowed").into()),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("path must be relative").into());
                }
            }
        }

        match components.first() {
            None => Err(invalid("path is empty").into()),
            Some(&first) if first == METADATA_DIR => {
                Err(invalid("path points into the repository metadata").into())
            }
            Some(_) => Ok(Self(components.join("/"))),
        }
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<str> for TrackedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
