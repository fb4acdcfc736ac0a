//! Config resolution
//!
//! The engine config is read from `engine.json` in the user's configuration
//! directory (e.g. `~/.config/console-chess/engine.json` on Linux), falling
//! back to a local `engine.json` when no such directory exists. Command line
//! flags are layered on top of whatever the file provides.
//!
//! A missing or broken file at the default location is not an error: the
//! defaults are used and a warning is logged. A file named explicitly with
//! `--config` must exist and parse, unless `--save-config` is about to
//! create it.

use crate::cli::Cli;
use anyhow::{Context, Result};
use chess_engine::EngineConfig;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;

const CONFIG_FILENAME: &str = "engine.json";

/// Path of the config file in the user's configuration directory
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "console-chess") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// The config file the command line points at
pub fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(default_config_path)
}

/// Load the config for this run and apply command line overrides
///
/// Saves the result back to the config path when `--save-config` is given.
pub fn resolve(cli: &Cli) -> Result<EngineConfig> {
    let path = config_path(cli);
    let mut config = match &cli.config {
        Some(explicit) if explicit.exists() || !cli.save_config => EngineConfig::load(explicit)
            .with_context(|| format!("Failed to load config {}", explicit.display()))?,
        _ => EngineConfig::load_or_default(&path),
    };
    apply_overrides(&mut config, cli);

    if cli.save_config {
        config
            .save(&path)
            .with_context(|| format!("Failed to save config {}", path.display()))?;
    }
    info!("[SETTINGS] Effective config: {:?}", config);
    Ok(config)
}

/// Copy the flags that were actually given into `config`
pub fn apply_overrides(config: &mut EngineConfig, cli: &Cli) {
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(max_plies) = cli.max_plies {
        config.search.max_plies = Some(max_plies);
    }
}
