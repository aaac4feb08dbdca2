use super::GraphError;
use super::repository::ProjectRepository;
use crate::descriptor::paths;
use std::path::{Path, PathBuf};

/// What the root file of a graph is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Solution,
    Project,
}

/// A named graph: the seed file plus everything discovered from it
#[derive(Debug, Clone)]
pub struct RootGraph {
    pub name: String,
    pub root_file: PathBuf,
    pub kind: RootKind,
    /// Requested recursion depth. Recorded only; discovery always runs to a
    /// fixed point.
    pub search_depth: Option<usize>,
    pub repository: ProjectRepository,
}

impl RootGraph {
    /// Empty graph over an already validated root file
    pub fn new(root_file: impl Into<PathBuf>, kind: RootKind, search_depth: Option<usize>) -> Self {
        let root_file = paths::normalize(root_file.into());
        let name = paths::file_name_of(&root_file.to_string_lossy()).to_string();
        Self {
            name,
            root_file,
            kind,
            search_depth,
            repository: ProjectRepository::new(),
        }
    }

    /// Validate the seed file before any discovery happens
    pub fn open(path: &Path, search_depth: Option<usize>) -> Result<Self, GraphError> {
        if !path.is_file() {
            return Err(GraphError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let kind = match paths::extension_of(path).as_deref() {
            Some("sln") => RootKind::Solution,
            Some("csproj") | Some("vcxproj") => RootKind::Project,
            _ => {
                return Err(GraphError::UnsupportedRootType {
                    path: path.to_path_buf(),
                });
            }
        };

        let root_file = std::path::absolute(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(root_file, kind, search_depth))
    }
}

#[cfg(test)]
mod tests {
    include!("root.test.rs");
}
