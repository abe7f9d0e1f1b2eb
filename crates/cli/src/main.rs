mod cli;
mod logging;

use clap::Parser;
use classattr_core::api::Op;
use tracing::error;

use crate::cli::{Cli, Commands, edit_command, tokens_command};

fn main() {
    let args = Cli::parse();

    if let Err(e) = logging::init(args.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the command should exit with status 1
fn run(args: Cli) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    match args.cmd {
        Commands::Has { class, text, opts } => edit_command(Op::Has, class, text, &opts),
        Commands::Add { class, text, opts } => edit_command(Op::Add, class, text, &opts),
        Commands::Remove { class, text, opts } => edit_command(Op::Remove, class, text, &opts),
        Commands::Toggle { class, text, opts } => edit_command(Op::Toggle, class, text, &opts),
        Commands::Tokens { text } => {
            tokens_command(text)?;
            Ok(true)
        }
    }
}
