use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Opts;
use crate::config::Config;
use vinix::command::SystemRunner;
use vinix::nix_store::{NixStore, StorePath};
use vinix::render;

/// Draw the dependency graph of a store path.
#[derive(Debug, Parser)]
pub struct Graph {
    /// The store path to visualize.
    store_path: PathBuf,

    /// Name of the output file.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

pub async fn run(opts: Opts) -> Result<()> {
    let sub = opts.command.as_graph().unwrap();
    let config = Config::load()?;

    let store = NixStore::with_program(&config.tools.nix_store);
    let root = StorePath::new(&sub.store_path);

    let output = sub
        .output
        .clone()
        .unwrap_or_else(|| super::default_output(&root, "png"));

    let description = store.graph_description(&root).await?;
    render::render_graph(&SystemRunner, &config.tools.dot, &description, &output).await?;

    Ok(())
}
