use clap::{
    ArgGroup, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::Shell;

use crate::utils;

const COMMANDS: &str = "\
Examples:
  nin INBOX_ITEM              Adds INBOX_ITEM to your Nirvana inbox
  nin INBOX_ITEM // NOTE      Adds an inbox item with a note
  nin --refresh               Submits all inbox items that were added offline
  nin --status                Shows queued items and the submission count";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  after_help = COMMANDS,
  styles = styles(),
)]
#[command(group(
    ArgGroup::new("action")
        .args(["install", "uninstall", "reset", "refresh", "login", "status", "completions", "item"])
        .multiple(false)
))]
pub struct Cli {
    /// Set up configuration, check your login and add 'nin' to your shell
    #[clap(long)]
    pub install: bool,

    /// Remove all stored data and the shell command
    #[clap(long)]
    pub uninstall: bool,

    /// Remove the submission data file
    #[clap(long)]
    pub reset: bool,

    /// Submit all inbox items that were added offline
    #[clap(long)]
    pub refresh: bool,

    /// Validate or renew the Nirvana session token
    #[clap(long)]
    pub login: bool,

    /// Show queued offline items and the submission count
    #[clap(long)]
    pub status: bool,

    /// Print shell completions
    #[clap(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Task text, optionally followed by `//` and a note
    #[clap(value_name = "INBOX_ITEM", num_args = 1.., trailing_var_arg = true)]
    pub item: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    Reset,
    Refresh,
    Login,
    Status,
    Completions(Shell),
    Submit { task: String, note: String },
    /// No item text was given.
    Usage,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.install {
            return Action::Install;
        }
        if self.uninstall {
            return Action::Uninstall;
        }
        if self.reset {
            return Action::Reset;
        }
        if self.refresh {
            return Action::Refresh;
        }
        if self.login {
            return Action::Login;
        }
        if self.status {
            return Action::Status;
        }
        if let Some(shell) = self.completions {
            return Action::Completions(shell);
        }

        let (task, note) = utils::split_item(&self.item);
        if task.trim().is_empty() {
            return Action::Usage;
        }
        Action::Submit { task, note }
    }
}
