use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use classattr_core::api::{self, Edit, Op};
use classattr_core::{ClassName, EditMode, EditorConfig};
use tracing::debug;

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Subcommand)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Check whether TEXT contains CLASS (exit status 1 when absent)
    Has {
        /// Class name
        class: String,
        /// Attribute text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        opts: EditOpts,
    },

    /// Add CLASS to TEXT unless already present
    Add {
        /// Class name
        class: String,
        /// Attribute text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        opts: EditOpts,
    },

    /// Remove the first occurrence of CLASS from TEXT
    Remove {
        /// Class name
        class: String,
        /// Attribute text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        opts: EditOpts,
    },

    /// Remove CLASS when present, add it otherwise
    Toggle {
        /// Class name
        class: String,
        /// Attribute text (read from stdin when omitted)
        text: Option<String>,
        #[command(flatten)]
        opts: EditOpts,
    },

    /// Print the tokens of TEXT, one per line
    Tokens {
        /// Attribute text (read from stdin when omitted)
        text: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct EditOpts {
    /// Edit mode: normalize or preserve (overrides the config file)
    #[clap(short, long)]
    pub mode: Option<EditMode>,
    /// Config file (defaults to ./classattr.json when present)
    #[clap(short, long)]
    pub config: Option<PathBuf>,
}

/// classattr command
#[derive(Parser)]
#[command(about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
    /// Also write debug logs to this file
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl EditOpts {
    fn resolve_mode(&self) -> CliResult<EditMode> {
        if let Some(mode) = self.mode {
            return Ok(mode);
        }
        let config = EditorConfig::discover(self.config.as_deref())?;
        Ok(config.mode)
    }
}

/// Run an edit operation and print the result.
///
/// Returns `false` only for `has` when the class is absent.
pub fn edit_command(
    op: Op,
    class: String,
    text: Option<String>,
    opts: &EditOpts,
) -> CliResult<bool> {
    let class = ClassName::parse(class)?;
    let mode = opts.resolve_mode()?;
    let text = resolve_text(text)?;
    debug!("{} {:?} on {:?} ({})", op, class.as_str(), text, mode);

    let edit = api::edit(&text, class.as_str(), op, mode);
    println!("{}", render(op, &edit));

    Ok(succeeded(op, &edit))
}

/// Line printed for an edit: `true`/`false` for `has`, the new text otherwise
pub fn render(op: Op, edit: &Edit) -> String {
    match op {
        Op::Has => edit.present.to_string(),
        _ => edit.text.clone(),
    }
}

/// `has` fails when the class is absent; every other op succeeds
pub fn succeeded(op: Op, edit: &Edit) -> bool {
    op != Op::Has || edit.present
}

pub fn tokens_command(text: Option<String>) -> CliResult<()> {
    let text = resolve_text(text)?;
    for token in api::tokens(&text) {
        println!("{token}");
    }
    Ok(())
}

fn resolve_text(text: Option<String>) -> CliResult<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(strip_line_ending(&input).to_string())
        }
    }
}

fn strip_line_ending(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
