//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::ScaffoldCommand;
use crate::error::CliError;

/// Kangaroo plugin scaffolder
///
/// Prompts for a plugin base name on standard input and generates the
/// implementation file, header, and qmake project skeleton for a new
/// Kangaroo plugin in the current directory.
#[derive(Debug, Parser)]
#[command(
    name = "genplugin",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands. Scaffolding is the default action when no
/// subcommand is given.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsCommand),
}

/// Shell completions generation
#[derive(Debug, Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext { quiet: self.quiet };

        match self.command {
            Some(Command::Completions(cmd)) => cmd.execute(&ctx),
            None => ScaffoldCommand.execute(&ctx),
        }
    }
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, _ctx: &CommandContext) -> Result<(), CliError> {
        use clap::CommandFactory;
        use clap_complete::generate;
        use std::io;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, name, &mut io::stdout());
        Ok(())
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub quiet: bool,
}
