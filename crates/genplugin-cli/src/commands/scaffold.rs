//! Scaffold command implementation: the default action of `genplugin`.

use tracing::debug;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::prompts::{self, Input, PromptError};
use crate::scaffold::{ScaffoldError, Scaffolder};

/// Prompt for a plugin base name and generate its skeleton in the working
/// directory.
pub struct ScaffoldCommand;

impl ScaffoldCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        if !prompts::is_interactive() {
            debug!("standard input is not a terminal; reading the name from piped input");
        }

        let raw_name = match Input::new("Enter name of plugin").ask() {
            Ok(name) => name,
            Err(PromptError::Cancelled) => {
                return Err(CliError::user_with_hint(
                    "no plugin name provided",
                    "the plugin name is read as one line from standard input",
                ));
            }
            Err(PromptError::Io(e)) => return Err(e.into()),
        };

        match Scaffolder::new().quiet(ctx.quiet).generate(&raw_name) {
            Ok(generated) => {
                debug!(
                    directory = %generated.directory.display(),
                    files = generated.files.len(),
                    "plugin skeleton generated"
                );
                Ok(())
            }
            // Both input rejections are clean early exits, matching the
            // historical tool: a diagnostic on stdout and a zero status.
            Err(ScaffoldError::DirectoryExists(_)) => {
                println!("Error: plugin directory already exists. Exiting.");
                Ok(())
            }
            Err(ScaffoldError::InvalidName(_)) => {
                println!("Error: plugin name is invalid. Exiting.");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
