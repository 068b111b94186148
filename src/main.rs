use clap::{CommandFactory, Parser};
use clap_complete::generate;

use nin::{
    cli::{self, Action, Cli},
    config::{self, StatePaths},
    error,
};

#[tokio::main]
async fn main() {
    let paths = StatePaths::from_env();
    if let Err(e) = config::load_env(&paths).await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.action() {
        Action::Install => cli::install(&paths).await,
        Action::Uninstall => cli::uninstall(&paths).await,
        Action::Reset => cli::reset(&paths).await,
        Action::Refresh => cli::refresh(&paths).await,
        Action::Login => cli::login(&paths).await,
        Action::Status => cli::status(&paths).await,
        Action::Completions(shell) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout())
        }
        Action::Submit { task, note } => cli::submit(&paths, &task, &note).await,
        Action::Usage => {
            eprintln!("usage: nin INBOX_ITEM");
            eprintln!("Use 'nin --help' for a list of commands.");
            std::process::exit(1);
        }
    }
}
