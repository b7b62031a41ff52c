//! On-disk size measurement.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::VinixResult;

/// Returns the total size in bytes of all regular files under `path`.
///
/// Symbolic links are neither followed nor counted, so content shared
/// between store paths through links stays attributed to its owner.
/// The result is a plain sum and does not depend on traversal order.
/// A path naming a single regular file yields that file's size.
pub fn directory_size(path: impl AsRef<Path>) -> VinixResult<u64> {
    let mut total = 0;

    for entry in WalkDir::new(path) {
        let entry = entry.map_err(io::Error::from)?;

        if entry.file_type().is_file() {
            total += entry.metadata().map_err(io::Error::from)?.len();
        }
    }

    Ok(total)
}
