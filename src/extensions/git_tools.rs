use std::path::{Path, PathBuf};

use anyhow::*;
use log::*;

pub struct GitTools {
    repository: git2::Repository,
    workdir_path: PathBuf,
}

impl GitTools {
    /// Construct from the `Path` to a directory in the repository.
    /// The `path` can be a path to a subdirectory inside the working directory
    /// of the repository.
    /// See <https://libgit2.org/docs/reference/main/repository/git_repository_open_ext.html>.
    pub fn from_dir_path(path: &Path) -> anyhow::Result<Self> {
        debug!("open_ext: {path:?}");
        let repository = git2::Repository::open_ext(
            path,
            git2::RepositoryOpenFlags::empty(),
            &[] as &[&std::ffi::OsStr],
        )?;
        Self::from_repository(repository)
    }

    fn from_repository(repository: git2::Repository) -> anyhow::Result<Self> {
        let Some(workdir_path) = repository.workdir() else {
            bail!("{:?} is a bare repository", repository.path());
        };
        let workdir_path = workdir_path.canonicalize()?;
        Ok(Self {
            repository,
            workdir_path,
        })
    }

    /// Get the canonicalized root directory of the worktree.
    pub fn workdir_path(&self) -> &Path {
        &self.workdir_path
    }

    /// Get the URL of the remote `name`, as it's written in the config.
    pub fn remote_url(&self, name: &str) -> anyhow::Result<String> {
        let remote = self
            .repository
            .find_remote(name)
            .with_context(|| format!("no remote named '{name}'"))?;
        let url = remote
            .url()
            .ok_or_else(|| anyhow!("the URL of the remote '{name}' is not valid UTF-8"))?;
        trace!("remote_url: {name}={url}");
        Ok(url.to_string())
    }

    pub fn head_commit_id(&self) -> anyhow::Result<git2::Oid> {
        let head = self.repository.head()?;
        let commit = head.peel_to_commit()?;
        Ok(commit.id())
    }

    pub fn to_path_string(path: &Path) -> anyhow::Result<String> {
        path.to_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("{path:?} is not valid UTF-8"))
    }
}
