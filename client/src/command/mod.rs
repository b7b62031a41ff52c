use std::path::PathBuf;

use vinix::nix_store::StorePath;

pub mod csv;
pub mod graph;
pub mod printsize;
pub mod treemap;

/// Default output file name for a root store path.
///
/// The name is the root's label plus the mode's extension, so
/// `vinix csv /nix/store/<hash>-bar-2.0` writes `bar-2.0.csv`.
fn default_output(root: &StorePath, extension: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", root.label(), extension))
}
