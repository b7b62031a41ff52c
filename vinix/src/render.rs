//! External rendering drivers.
//!
//! Image generation is delegated to external programs: Graphviz `dot`
//! for dependency graphs and a treemap plotting script for disk
//! usage. Both are driven through the command capability so they can
//! be swapped out or faked.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::command::{CommandRunner, Invocation};
use crate::error::VinixResult;

/// The default graph rendering program.
pub const DEFAULT_GRAPH_RENDERER: &str = "dot";

/// The default treemap plotting program.
///
/// It reads `<size> <label>` lines on standard input and writes the
/// image to the path given as its only argument.
pub const DEFAULT_TREEMAP_PLOTTER: &str = "print_treemap.R";

/// A single treemap row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreemapRow {
    pub size: u64,
    pub label: String,
}

/// Renders a Graphviz graph description to a raster image.
///
/// The description is spooled to a named temporary file for the
/// renderer to read. The spool file is removed again when this
/// returns, whether rendering succeeded or not.
pub async fn render_graph(
    runner: &dyn CommandRunner,
    program: &str,
    description: &[u8],
    output: &Path,
) -> VinixResult<()> {
    let mut spool = NamedTempFile::new()?;
    spool.write_all(description)?;
    spool.flush()?;

    runner
        .run(
            Invocation::new(program)
                .arg("-Tpng")
                .arg("-o")
                .arg(output)
                .arg(spool.path()),
        )
        .await?;

    Ok(())
}

/// Pipes treemap rows into the plotting program's standard input.
pub async fn plot_treemap(
    runner: &dyn CommandRunner,
    program: &str,
    rows: &[TreemapRow],
    output: &Path,
) -> VinixResult<()> {
    let mut input = String::new();
    for row in rows {
        input.push_str(&format!("{} {}\n", row.size, row.label));
    }

    runner
        .run(Invocation::new(program).arg(output).stdin(input.into_bytes()))
        .await?;

    Ok(())
}
