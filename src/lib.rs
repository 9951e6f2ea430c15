mod cli;
pub use cli::*;

mod config;
pub use config::*;

mod extensions;
pub(crate) use extensions::*;

mod git_system;
pub use git_system::*;

mod invocation;
pub use invocation::*;

mod kokodoko;
pub use kokodoko::*;

mod link_builder;
pub use link_builder::*;

mod observer;
pub use observer::*;

mod path_info;
pub use path_info::*;

mod permalink_error;
pub use permalink_error::*;

mod system;
pub use system::*;
