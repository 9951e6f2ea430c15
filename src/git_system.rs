use std::path::Path;

use log::*;

use crate::{GitTools, System};

/// `System` backed by `git2`.
/// Each query opens the repository containing the given directory.
#[derive(Debug)]
pub struct GitSystem {
    remote_name: String,
}

impl GitSystem {
    pub fn new(remote_name: &str) -> Self {
        Self {
            remote_name: remote_name.to_string(),
        }
    }

    fn open(repo_query_dir: &str) -> anyhow::Result<GitTools> {
        GitTools::from_dir_path(Path::new(repo_query_dir))
    }
}

impl System for GitSystem {
    fn remote_url(&self, repo_query_dir: &str) -> anyhow::Result<String> {
        Self::open(repo_query_dir)?.remote_url(&self.remote_name)
    }

    fn commit_hash(&self, repo_query_dir: &str) -> anyhow::Result<String> {
        let commit_id = Self::open(repo_query_dir)?.head_commit_id()?;
        debug!("commit_hash: {commit_id}");
        Ok(commit_id.to_string())
    }

    fn repo_root(&self, repo_query_dir: &str) -> anyhow::Result<String> {
        GitTools::to_path_string(Self::open(repo_query_dir)?.workdir_path())
    }

    /// The parent directory is canonicalized, so that it has the same form as
    /// `repo_root()`. The last component is kept as is, even if it's a symlink.
    fn absolute_path(&self, path: &str) -> anyhow::Result<String> {
        let path = Path::new(path);
        let absolute_path = match (path.parent(), path.file_name()) {
            (Some(parent), Some(file_name)) => {
                let parent = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
                parent.canonicalize()?.join(file_name)
            }
            _ => path.canonicalize()?,
        };
        GitTools::to_path_string(&absolute_path)
    }
}
