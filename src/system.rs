/// Data-fetching methods that require system calls.
///
/// The outputs may be raw command output;
/// e.g., with trailing newlines or in the SSH form of a remote URL.
/// `build_permalink()` normalizes them.
pub trait System {
    /// The remote URL of the repository containing `repo_query_dir`.
    fn remote_url(&self, repo_query_dir: &str) -> anyhow::Result<String>;

    /// The `HEAD` commit of the repository containing `repo_query_dir`.
    fn commit_hash(&self, repo_query_dir: &str) -> anyhow::Result<String>;

    /// The root directory of the worktree containing `repo_query_dir`.
    fn repo_root(&self, repo_query_dir: &str) -> anyhow::Result<String>;

    /// The absolute form of a possibly relative `path`.
    fn absolute_path(&self, path: &str) -> anyhow::Result<String>;
}

/// The repository information needed to build a permalink.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    pub remote_url: String,
    pub commit_hash: String,
    pub repo_root: String,
    pub absolute_path: String,
}
