mod check;
mod completions;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use typewriter_schema::Config;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typewriter_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load `--config` if given, otherwise `typewriter.toml` from the working
/// directory, otherwise the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::open(path).unwrap_or_exit(),
        None => Config::discover(".").unwrap_or_exit().unwrap_or_default(),
    }
}

#[derive(Parser)]
#[command(name = "typewriter")]
#[command(version)]
#[command(about = "Generate TypeScript resolver declarations from GraphQL schemas")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate `.types.ts` declarations next to each schema
    Generate(GenerateCommand),

    /// Load schemas and report lints without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Schema inputs shared by the commands.
#[derive(clap::Args)]
pub(crate) struct InputArgs {
    /// Schema files or glob patterns; `-` reads SDL from stdin
    /// (defaults to all `**/*.graphqls` files)
    pub inputs: Vec<String>,

    /// Path to typewriter.toml (defaults to ./typewriter.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob patterns to skip during discovery (defaults to `node_modules/**`)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

impl InputArgs {
    /// Exclude patterns from the command line, falling back to the config.
    pub fn exclude_patterns<'a>(&'a self, config: &'a Config) -> &'a [String] {
        if self.exclude.is_empty() {
            &config.generate.exclude
        } else {
            &self.exclude
        }
    }
}
