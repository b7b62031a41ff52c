//! External command capability.
//!
//! Every external collaborator (the closure query tool, the graph
//! layout tool, the treemap plotter) is reached through
//! [`CommandRunner`]. The indirection keeps the tools swappable and
//! lets tests substitute fakes for all of them.

use std::ffi::{OsStr, OsString};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{VinixError, VinixResult};

/// A single invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
    stdin: Option<Vec<u8>>,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Sets the data to feed to the program's standard input.
    pub fn stdin(mut self, data: Vec<u8>) -> Self {
        self.stdin = Some(data);
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn stdin_data(&self) -> Option<&[u8]> {
        self.stdin.as_deref()
    }

    /// Returns the program name for error reporting.
    pub fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Runs external commands, capturing their standard output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs a command to completion and returns its standard output.
    ///
    /// The call blocks until the command exits. A non-zero exit
    /// status is an error carrying the captured standard error.
    async fn run(&self, invocation: Invocation) -> VinixResult<Vec<u8>>;
}

/// Runs commands on the host system.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: Invocation) -> VinixResult<Vec<u8>> {
        let command_name = invocation.display_name();

        log::debug!(
            "running {:?} with {:?}",
            invocation.program(),
            invocation.arguments()
        );

        let mut command = Command::new(invocation.program());
        command
            .args(invocation.arguments())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        command.stdin(if invocation.stdin_data().is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

        let mut child = command.spawn().map_err(|error| VinixError::CommandSpawn {
            command: command_name.clone(),
            error,
        })?;

        if let Some(data) = invocation.stdin_data() {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(data).await?;
                stdin.shutdown().await?;
            }
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(VinixError::CommandFailed {
                command: command_name,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output.stdout)
    }
}
