use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Opts;
use crate::config::Config;
use vinix::nix_store::{NixStore, StorePath};
use vinix::size::directory_size;

/// Print the total size of a store path's closure.
///
/// Unlike the visualization modes, zero-size members count toward
/// the total.
#[derive(Debug, Parser)]
pub struct Printsize {
    /// The store path to measure.
    store_path: PathBuf,
}

pub async fn run(opts: Opts) -> Result<()> {
    let sub = opts.command.as_printsize().unwrap();
    let config = Config::load()?;

    let store = NixStore::with_program(&config.tools.nix_store);
    let root = StorePath::new(&sub.store_path);
    let closure = store.compute_fs_closure(&root).await?;

    let mut total = 0;
    for path in &closure {
        total += directory_size(path.as_path())?;
    }

    println!("Total derivation size: {} (bytes)", total);

    Ok(())
}
