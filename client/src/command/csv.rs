use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use csv::Writer;

use crate::cli::Opts;
use crate::config::Config;
use vinix::nix_store::{NixStore, ParsedName, StorePath};
use vinix::size::directory_size;

/// Write a CSV report of the closure's disk usage.
///
/// One row per closure member with nonzero size; zero-size members
/// are dropped.
#[derive(Debug, Parser)]
pub struct Csv {
    /// The store path to report on.
    store_path: PathBuf,

    /// Name of the output file.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,
}

pub async fn run(opts: Opts) -> Result<()> {
    let sub = opts.command.as_csv().unwrap();
    let config = Config::load()?;

    let store = NixStore::with_program(&config.tools.nix_store);
    let root = StorePath::new(&sub.store_path);
    let closure = store.compute_fs_closure(&root).await?;

    let output = sub
        .output
        .clone()
        .unwrap_or_else(|| super::default_output(&root, "csv"));

    let mut records = Vec::new();
    for path in &closure {
        let size = directory_size(path.as_path())?;
        if size == 0 {
            continue;
        }

        records.push((size, path.parse()));
    }

    write_report(&records, File::create(&output)?)?;

    Ok(())
}

/// Writes the `size,hash,name,version` report.
///
/// Unparseable members put their opaque identifier in the hash
/// column; a missing version is an empty field.
fn write_report<W: Write>(records: &[(u64, ParsedName)], writer: W) -> Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["size", "hash", "name", "version"])?;

    for (size, parsed) in records {
        let (hash, name, version) = match parsed {
            ParsedName::Package {
                hash,
                name,
                version,
            } => (hash.as_str(), name.as_str(), version.as_deref().unwrap_or("")),
            ParsedName::Opaque(other) => (other.as_str(), "", ""),
        };

        out.write_record([size.to_string().as_str(), hash, name, version])?;
    }

    out.flush()?;

    Ok(())
}
