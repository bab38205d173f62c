//! Single-line text input.

use std::io::{self, BufRead, Write};

use console::style;

use crate::prompts::{PromptError, PromptResult};

/// A single-line text prompt read from standard input.
pub struct Input {
    message: String,
}

impl Input {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Show the prompt and read one line.
    ///
    /// Only the trailing line terminator is stripped; any other whitespace
    /// is handed back untouched for the caller to judge. End of input before
    /// a line is read maps to `Cancelled`.
    pub fn ask(&self) -> PromptResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", style(&self.message).bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
