use std::fmt;

/// The repository or filesystem query that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    Stat,
    RemoteUrl,
    CommitHash,
    RepoRoot,
    AbsolutePath,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Query::Stat => "file status",
            Query::RemoteUrl => "remote URL",
            Query::CommitHash => "commit hash",
            Query::RepoRoot => "repository root directory",
            Query::AbsolutePath => "absolute path",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum PermalinkError {
    #[error("argument error: {0}")]
    Argument(String),
    #[error("no such file or directory '{0}'")]
    NotFound(String),
    #[error("'{0}' is a directory, so line numbers don't make sense")]
    InvalidArgument(String),
    #[error("unable to get {query} for '{path}'")]
    SystemCall {
        query: Query,
        path: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("repository root '{repo_root}' is not a parent of '{absolute_path}'")]
    PathResolution {
        repo_root: String,
        absolute_path: String,
    },
    #[error("'{0}' is not a GitHub remote")]
    UnsupportedRemote(String),
}

impl PermalinkError {
    pub(crate) fn system_call(query: Query, path: &str, source: anyhow::Error) -> Self {
        Self::SystemCall {
            query,
            path: path.to_string(),
            source,
        }
    }
}
