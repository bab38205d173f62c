//! CLI error handling and exit-code mapping.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::scaffold::ScaffoldError;

/// CLI error type with context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    User {
        message: String,
        hint: Option<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::Io { .. } => 3,
            Self::User { .. } => 1,
            Self::Other(_) => 1,
        }
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::User { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Create a user error (user did something wrong)
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            hint: None,
        }
    }

    /// Create a user error with hint
    pub fn user_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<ScaffoldError> for CliError {
    fn from(err: ScaffoldError) -> Self {
        match err {
            ScaffoldError::CreateDir { path, source } => Self::Io {
                message: format!("failed to create directory {}", path.display()),
                source,
                path: Some(path),
            },
            ScaffoldError::WriteFile { path, source } => Self::Io {
                message: format!("failed to write {}", path.display()),
                source,
                path: Some(path),
            },
            // DirectoryExists and InvalidName are intercepted by the
            // scaffold command before conversion
            other => Self::User {
                message: other.to_string(),
                hint: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::user("bad").code(), 1);

        let io_err: CliError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(io_err.code(), 3);
    }

    #[test]
    fn test_scaffold_io_errors_carry_path() {
        let err = ScaffoldError::CreateDir {
            path: PathBuf::from("Foo"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        match CliError::from(err) {
            CliError::Io { path, message, .. } => {
                assert_eq!(path, Some(PathBuf::from("Foo")));
                assert!(message.contains("Foo"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_hint_only_on_user_errors() {
        let err = CliError::user_with_hint("no name", "pipe a name on stdin");
        assert_eq!(err.hint(), Some("pipe a name on stdin"));

        let io_err: CliError = io::Error::other("boom").into();
        assert_eq!(io_err.hint(), None);
    }
}
