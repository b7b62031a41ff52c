//! Client configurations.
//!
//! Configuration files are stored under `$XDG_CONFIG_HOME/vinix/config.toml`.
//! Everything in them is optional: the file only exists to point
//! vinix at differently-named external tools.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use xdg::BaseDirectories;

use vinix::nix_store::DEFAULT_STORE_PROGRAM;
use vinix::render::{DEFAULT_GRAPH_RENDERER, DEFAULT_TREEMAP_PLOTTER};

/// Application prefix in XDG base directories.
///
/// This will be concatenated into `$XDG_CONFIG_HOME/vinix`.
const XDG_PREFIX: &str = "vinix";

/// Client configurations.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// External tool overrides.
    #[serde(default)]
    pub tools: Tools,
}

/// The external programs vinix drives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tools {
    /// The closure query command.
    #[serde(rename = "nix-store")]
    pub nix_store: String,

    /// The graph rendering command.
    pub dot: String,

    /// The treemap plotting command.
    #[serde(rename = "treemap-plotter")]
    pub treemap_plotter: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            nix_store: DEFAULT_STORE_PROGRAM.to_string(),
            dot: DEFAULT_GRAPH_RENDERER.to_string(),
            treemap_plotter: DEFAULT_TREEMAP_PLOTTER.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from the system.
    pub fn load() -> Result<Self> {
        let path = get_config_path()
            .map_err(|e| {
                tracing::warn!("Could not get config path: {}", e);
                e
            })
            .ok();

        Self::load_from_path(path.as_ref())
    }

    fn load_from_path(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            if path.exists() {
                let contents = fs::read(path)?;
                let s = std::str::from_utf8(&contents)?;
                let config = toml::from_str(s)?;
                tracing::debug!("Loaded configuration from {:?}", path);
                return Ok(config);
            }
        }

        Ok(Config::default())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
    let config_path = xdg_dirs.place_config_file("config.toml")?;

    Ok(config_path)
}
