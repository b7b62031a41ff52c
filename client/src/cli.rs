//! Global CLI Setup.

use std::env;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use enum_as_inner::EnumAsInner;

use crate::command::csv::{self, Csv};
use crate::command::graph::{self, Graph};
use crate::command::printsize::{self, Printsize};
use crate::command::treemap::{self, Treemap};

/// Vinix closure disk usage visualizer.
#[derive(Debug, Parser)]
#[clap(version)]
#[clap(propagate_version = true)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, EnumAsInner)]
pub enum Command {
    Treemap(Treemap),
    Graph(Graph),
    Printsize(Printsize),
    Csv(Csv),
}

/// Generate shell autocompletion files.
#[derive(Debug, Parser)]
pub struct GenCompletions {
    /// The shell to generate autocompletion files for.
    shell: Shell,
}

pub async fn run() -> Result<()> {
    // https://github.com/clap-rs/clap/issues/1335
    if let Some("gen-completions") = env::args().nth(1).as_deref() {
        return gen_completions(env::args().nth(2)).await;
    }

    let opts = Opts::parse();

    match opts.command {
        Command::Treemap(_) => treemap::run(opts).await,
        Command::Graph(_) => graph::run(opts).await,
        Command::Printsize(_) => printsize::run(opts).await,
        Command::Csv(_) => csv::run(opts).await,
    }
}

async fn gen_completions(shell: Option<String>) -> Result<()> {
    let shell: Shell = shell
        .ok_or_else(|| anyhow!("Must specify a shell."))?
        .parse()
        .unwrap();

    clap_complete::generate(shell, &mut Opts::command(), "vinix", &mut std::io::stdout());

    Ok(())
}
