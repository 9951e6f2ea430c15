use std::io::{IsTerminal, stdout};

use anyhow::Context;
use clap::Parser;
use crossterm::{clipboard::CopyToClipboard, execute};
use log::debug;

use crate::*;

#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
/// The `kokodoko` command line interface.
/// # Examples
/// ```no_run
/// use kokodoko::Cli;
///
/// fn main() -> anyhow::Result<()> {
///   let cli = Cli::new(&["src/main.rs", "12-30"]);
///   cli.run()
/// }
/// ```
pub struct Cli {
    /// The path to a file or a directory,
    /// optionally followed by a line number (`12`) or a line range (`12-30`).
    #[arg(value_name = "PATH [LINES]")]
    args: Vec<String>,

    /// The name of the remote to link to.
    #[arg(long, value_name = "NAME", default_value = Config::DEFAULT_REMOTE_NAME)]
    remote: String,

    /// Use remotes that aren't on GitHub as they are.
    #[arg(long)]
    allow_any_remote: bool,

    /// Print the link without copying it to the clipboard.
    #[arg(short, long)]
    print_only: bool,
}

impl Cli {
    pub fn new_from_args() -> Self {
        Self::parse()
    }

    pub fn new<S: AsRef<str>>(args: &[S]) -> Self {
        Self {
            args: args.iter().map(|arg| arg.as_ref().to_string()).collect(),
            remote: Config::DEFAULT_REMOTE_NAME.to_string(),
            ..Default::default()
        }
    }

    pub fn config(&self) -> Config {
        Config {
            remote_name: self.remote.clone(),
            remote_policy: if self.allow_any_remote {
                RemotePolicy::Permissive
            } else {
                RemotePolicy::Strict
            },
        }
    }

    /// The clipboard is written by an escape sequence to stdout,
    /// so it's skipped when stdout is redirected.
    fn copies_to_clipboard(&self, is_terminal: bool) -> bool {
        if !is_terminal && !self.print_only {
            debug!("stdout is not a terminal, print only");
        }
        is_terminal && !self.print_only
    }

    /// Run the `kokodoko` command line interface.
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config();
        debug!("run: {self:?}");
        let kokodoko = Kokodoko::new(
            Box::new(GitSystem::new(&config.remote_name)),
            Box::new(OsFileSystem),
            config,
        )
        .with_observer(Box::new(LogObserver));
        let url = kokodoko.run(&self.args)?;

        if !self.copies_to_clipboard(stdout().is_terminal()) {
            println!("{url}");
            return Ok(());
        }
        execute!(stdout(), CopyToClipboard::to_clipboard_from(url.clone()))
            .with_context(|| format!("unable to copy url '{url}' to clipboard"))?;
        println!("Copied '{url}' to the clipboard!");
        Ok(())
    }
}
