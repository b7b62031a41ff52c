use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Opts;
use crate::config::Config;
use vinix::command::SystemRunner;
use vinix::nix_store::{NixStore, StorePath};
use vinix::render::{self, TreemapRow};
use vinix::size::directory_size;

/// Draw a treemap of the closure's disk usage.
#[derive(Debug, Parser)]
pub struct Treemap {
    /// The store path to visualize.
    store_path: PathBuf,

    /// Name of the output file.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

pub async fn run(opts: Opts) -> Result<()> {
    let sub = opts.command.as_treemap().unwrap();
    let config = Config::load()?;

    let store = NixStore::with_program(&config.tools.nix_store);
    let root = StorePath::new(&sub.store_path);
    let closure = store.compute_fs_closure(&root).await?;

    let output = sub
        .output
        .clone()
        .unwrap_or_else(|| super::default_output(&root, "png"));

    let mut rows = Vec::new();
    for path in &closure {
        let size = directory_size(path.as_path())?;
        if size == 0 {
            eprintln!("path {} is of size 0, skipping...", path.as_path().display());
            continue;
        }

        rows.push(TreemapRow {
            size,
            label: path.label(),
        });
    }

    render::plot_treemap(
        &SystemRunner,
        &config.tools.treemap_plotter,
        &rows,
        &output,
    )
    .await?;

    Ok(())
}
