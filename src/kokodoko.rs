use crate::*;

/// Computes the permalink for the command line arguments.
/// # Examples
/// ```no_run
/// use kokodoko::{Config, GitSystem, Kokodoko, OsFileSystem};
///
/// let config = Config::default();
/// let kokodoko = Kokodoko::new(
///     Box::new(GitSystem::new(&config.remote_name)),
///     Box::new(OsFileSystem),
///     config,
/// );
/// let url = kokodoko.run(&["src/main.rs", "3-5"])?;
/// println!("{url}");
/// # Ok::<(), kokodoko::PermalinkError>(())
/// ```
pub struct Kokodoko {
    system: Box<dyn System>,
    fs: Box<dyn FileSystem>,
    observer: Box<dyn Observer>,
    config: Config,
}

impl Kokodoko {
    pub fn new(system: Box<dyn System>, fs: Box<dyn FileSystem>, config: Config) -> Self {
        Self {
            system,
            fs,
            observer: Box::new(NoopObserver),
            config,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the whole pipeline and return the permalink.
    /// The first argument is the path to a file or a directory,
    /// and the optional second argument is a line number,
    /// or a line range in the form of `"12-51"`.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String, PermalinkError> {
        self.run_steps(args)
            .inspect_err(|error| self.observer.failed(error))
    }

    fn run_steps<S: AsRef<str>>(&self, args: &[S]) -> Result<String, PermalinkError> {
        let observer = &self.observer;
        let invocation = Invocation::from_args(args)?;
        observer.metadatum("candidate", "path", &invocation.path);
        observer.metadatum("candidate", "line spec", &invocation.line_spec);

        let info = PathInfo::classify(self.fs.as_ref(), &invocation)?;
        observer.metadatum("candidate", "is directory", &info.is_directory);
        observer.metadatum("candidate", "repo query dir", &info.repo_query_dir);

        let metadata = self.query_metadata(&info)?;
        let url = build_permalink(&metadata, &invocation.line_spec, self.config.remote_policy)?;
        observer.metadatum("candidate", "url", &url);
        Ok(url)
    }

    /// Query the `System` in order, stopping at the first failure.
    pub fn query_metadata(&self, info: &PathInfo) -> Result<RepoMetadata, PermalinkError> {
        let dir = info.repo_query_dir.as_str();
        let remote_url = self.query(Query::RemoteUrl, dir, |system, dir| system.remote_url(dir))?;
        let commit_hash =
            self.query(Query::CommitHash, dir, |system, dir| system.commit_hash(dir))?;
        let repo_root = self.query(Query::RepoRoot, dir, |system, dir| system.repo_root(dir))?;
        let absolute_path = self.query(Query::AbsolutePath, &info.candidate_path, |system, path| {
            system.absolute_path(path)
        })?;
        Ok(RepoMetadata {
            remote_url,
            commit_hash,
            repo_root,
            absolute_path,
        })
    }

    fn query(
        &self,
        query: Query,
        path: &str,
        f: impl FnOnce(&dyn System, &str) -> anyhow::Result<String>,
    ) -> Result<String, PermalinkError> {
        let value = f(self.system.as_ref(), path)
            .map_err(|error| PermalinkError::system_call(query, path, error))?;
        self.observer
            .metadatum("system calls", &query.to_string(), &value);
        Ok(value)
    }
}
