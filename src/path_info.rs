use std::{io, path::Path};

use log::*;

use crate::{Invocation, PermalinkError, Query};

/// The result of `FileSystem::stat()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathStat {
    pub exists: bool,
    pub is_directory: bool,
}

pub trait FileSystem {
    fn stat(&self, path: &str) -> io::Result<PathStat>;
}

/// `FileSystem` on top of `std::fs`.
#[derive(Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &str) -> io::Result<PathStat> {
        match std::fs::metadata(Path::new(path)) {
            Ok(metadata) => Ok(PathStat {
                exists: true,
                is_directory: metadata.is_dir(),
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(PathStat::default()),
            Err(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInfo {
    pub candidate_path: String,
    pub is_directory: bool,
    /// Any directory inside the repository; not necessarily its root.
    pub repo_query_dir: String,
}

impl PathInfo {
    pub fn classify(fs: &dyn FileSystem, invocation: &Invocation) -> Result<Self, PermalinkError> {
        let path = invocation.path.as_str();
        let stat = fs
            .stat(path)
            .map_err(|error| PermalinkError::system_call(Query::Stat, path, error.into()))?;
        trace!("classify: {path:?} {stat:?}");
        if !stat.exists {
            return Err(PermalinkError::NotFound(path.to_string()));
        }
        if stat.is_directory && invocation.has_line_spec() {
            return Err(PermalinkError::InvalidArgument(path.to_string()));
        }
        let repo_query_dir = if stat.is_directory {
            path.to_string()
        } else {
            Self::parent_dir(path).to_string()
        };
        Ok(Self {
            candidate_path: path.to_string(),
            is_directory: stat.is_directory,
            repo_query_dir,
        })
    }

    /// The `path` up to and including its last separator,
    /// or `"."` if it has none.
    /// ```
    /// use kokodoko::PathInfo;
    /// assert_eq!(PathInfo::parent_dir("./cmd/tool/main.go"), "./cmd/tool/");
    /// assert_eq!(PathInfo::parent_dir("main.go"), ".");
    /// ```
    pub fn parent_dir(path: &str) -> &str {
        match path.rfind(std::path::is_separator) {
            Some(index) => &path[..=index],
            None => ".",
        }
    }
}
