//! Error handling.

use std::error::Error as StdError;
use std::io;
use std::process::ExitStatus;

use displaydoc::Display;

pub type VinixResult<T> = Result<T, VinixError>;

/// An error.
#[derive(Debug, Display)]
pub enum VinixError {
    /// Failed to spawn "{command}": {error}
    CommandSpawn { command: String, error: io::Error },

    /// "{command}" failed with {status}: {stderr}
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// "{command}" produced non-UTF-8 output
    CommandOutputInvalid { command: String },

    /// I/O error: {error}.
    IoError { error: io::Error },
}

impl VinixError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CommandSpawn { .. } => "CommandSpawn",
            Self::CommandFailed { .. } => "CommandFailed",
            Self::CommandOutputInvalid { .. } => "CommandOutputInvalid",
            Self::IoError { .. } => "IoError",
        }
    }
}

impl StdError for VinixError {}

impl From<io::Error> for VinixError {
    fn from(error: io::Error) -> Self {
        Self::IoError { error }
    }
}
