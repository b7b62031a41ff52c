//! Nix store operations.
//!
//! Closure membership is delegated to the `nix-store` command line
//! tool; nothing here understands the store's own metadata. Store
//! path base names are parsed leniently: a name that does not follow
//! the `<hash>-<name>[-<version>]` convention degrades to an opaque
//! identifier instead of failing.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::{CommandRunner, Invocation, SystemRunner};
use crate::error::{VinixError, VinixResult};

#[cfg(test)]
pub mod tests;

/// Length of the hash in a store path.
pub const STORE_PATH_HASH_LEN: usize = 32;

/// The default closure-query program.
pub const DEFAULT_STORE_PROGRAM: &str = "nix-store";

/// A path in a Nix store.
///
/// This may name a directory or a single file, and may or may not
/// actually exist. Any path is accepted here: base names that do not
/// carry a hash prefix simply parse as opaque identifiers.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct StorePath {
    /// Full path of the store member.
    ///
    /// For example, `/nix/store/ia70ss13m22znbl8khrf2hq72qmh5drr-ruby-2.7.5`.
    path: PathBuf,
}

/// Parsed form of a store path base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    /// A `<hash>-<name>[-<version>]` base name.
    ///
    /// The hash is the fixed-length content-address prefix. The
    /// version is everything after the delimiter that follows the
    /// name, and is absent when the remainder is a single token.
    Package {
        hash: String,
        name: String,
        version: Option<String>,
    },

    /// Anything else.
    Opaque(String),
}

impl StorePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Returns the base name of the store path.
    ///
    /// Non-UTF-8 names are lossily converted; they can only ever
    /// parse as opaque identifiers.
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Splits the base name into hash, name and version.
    pub fn parse(&self) -> ParsedName {
        ParsedName::from_base_name(&self.base_name())
    }

    /// Returns the human-readable label of the store path.
    ///
    /// This is the base name with the hash prefix removed, or the
    /// base name itself when there is no hash prefix. Used for
    /// treemap rows and default output file names.
    pub fn label(&self) -> String {
        self.parse().label()
    }
}

impl ParsedName {
    fn from_base_name(base_name: &str) -> Self {
        if let Some((hash, rest)) = base_name.split_once('-') {
            if hash.len() == STORE_PATH_HASH_LEN {
                let (name, version) = match rest.split_once('-') {
                    Some((name, version)) => (name.to_owned(), Some(version.to_owned())),
                    None => (rest.to_owned(), None),
                };

                return Self::Package {
                    hash: hash.to_owned(),
                    name,
                    version,
                };
            }
        }

        Self::Opaque(base_name.to_owned())
    }

    /// Returns the label of the parsed name.
    pub fn label(&self) -> String {
        match self {
            Self::Package {
                name,
                version: Some(version),
                ..
            } => format!("{}-{}", name, version),
            Self::Package { name, .. } => name.clone(),
            Self::Opaque(other) => other.clone(),
        }
    }
}

/// High-level interface to the closure query tool.
pub struct NixStore {
    /// Runs the query commands.
    runner: Arc<dyn CommandRunner>,

    /// The closure-query program.
    program: OsString,
}

impl NixStore {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_STORE_PROGRAM)
    }

    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self::with_runner(program, Arc::new(SystemRunner))
    }

    pub fn with_runner(program: impl AsRef<OsStr>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            program: program.as_ref().to_owned(),
        }
    }

    /// Returns the closure of a store path, including the path itself.
    ///
    /// This is `nix-store --query --requisites`. Members come back in
    /// the query tool's output order, one per line; blank lines are
    /// skipped. Failure of the query tool is fatal.
    pub async fn compute_fs_closure(&self, root: &StorePath) -> VinixResult<Vec<StorePath>> {
        let output = self
            .runner
            .run(
                Invocation::new(&self.program)
                    .arg("--query")
                    .arg("--requisites")
                    .arg(root.as_path()),
            )
            .await?;

        let stdout =
            std::str::from_utf8(&output).map_err(|_| VinixError::CommandOutputInvalid {
                command: self.program.to_string_lossy().into_owned(),
            })?;

        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(StorePath::new)
            .collect())
    }

    /// Returns the Graphviz description of a store path's dependency
    /// graph, as produced by `nix-store --query --graph`.
    pub async fn graph_description(&self, root: &StorePath) -> VinixResult<Vec<u8>> {
        self.runner
            .run(
                Invocation::new(&self.program)
                    .arg("--query")
                    .arg("--graph")
                    .arg(root.as_path()),
            )
            .await
    }
}

impl Default for NixStore {
    fn default() -> Self {
        Self::new()
    }
}
