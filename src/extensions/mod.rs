mod git_tools;
pub(crate) use git_tools::*;
