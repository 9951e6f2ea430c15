/// What to do with a remote URL that doesn't look like a GitHub remote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RemotePolicy {
    /// Fail with `PermalinkError::UnsupportedRemote`.
    #[default]
    Strict,
    /// Use the remote URL as is, after trimming.
    Permissive,
}

/// Options that alter the behavior of `Kokodoko`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The name of the remote to link to.
    pub remote_name: String,
    pub remote_policy: RemotePolicy,
}

impl Config {
    pub const DEFAULT_REMOTE_NAME: &'static str = "origin";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_name: Self::DEFAULT_REMOTE_NAME.to_string(),
            remote_policy: RemotePolicy::default(),
        }
    }
}
