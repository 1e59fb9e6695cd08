//! # Error Types
//!
//! Every failure of the config emitter is terminal: there is no retry and no
//! partial output to clean up. The variants carry enough context (flag name,
//! policy path, output path) for the CLI to print a useful message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from validating inputs and emitting a release-drafter config.
#[derive(Error, Debug)]
pub enum EmitError {
    /// A required input was not supplied or was empty.
    #[error("missing required argument: {flag} must be provided and non-empty")]
    MissingArgument {
        /// The command-line flag the value comes from.
        flag: &'static str,
    },

    /// The policy has no directory under `policies/`.
    #[error("policy '{policy}' not found: {} is not a directory", .path.display())]
    PolicyNotFound {
        /// The requested policy name.
        policy: String,
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// The output file could not be created or written.
    #[error("failed to write config to {}: {source}", .path.display())]
    WriteFailure {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Discriminant of [`EmitError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingArgument,
    PolicyNotFound,
    WriteFailure,
}

impl EmitError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. } => ErrorKind::MissingArgument,
            Self::PolicyNotFound { .. } => ErrorKind::PolicyNotFound,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArgument => "MissingArgument",
            Self::PolicyNotFound => "PolicyNotFound",
            Self::WriteFailure => "WriteFailure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
