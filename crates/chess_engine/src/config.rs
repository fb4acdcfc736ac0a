//! Engine configuration
//!
//! Search and evaluation knobs, serialized as JSON. Every field has a default,
//! so a config file only needs the values it changes:
//!
//! ```json
//! { "search": { "depth": 4, "parallel": false } }
//! ```
//!
//! # Error Handling
//!
//! [`EngineConfig::load`] reports unreadable, malformed or out-of-range files
//! as errors.
//! [`EngineConfig::load_or_default`] logs the problem and falls back to the
//! defaults instead, which is what a front end wants on startup.

use crate::constants::{DEFAULT_DEPTH, MAX_DEPTH, MOBILITY_WEIGHT};
use crate::error::{ChessEngineError, ChessEngineResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// How a side with no legal move but not in check is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalematePolicy {
    /// Same sentinel as checkmate: the stuck side has lost
    #[default]
    AsCheckmate,
    /// Zero for both sides
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalSettings {
    /// Centipawns per legal move
    pub mobility_weight: i32,
    pub stalemate: StalematePolicy,
}

impl Default for EvalSettings {
    fn default() -> Self {
        Self {
            mobility_weight: MOBILITY_WEIGHT,
            stalemate: StalematePolicy::AsCheckmate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Look-ahead in plies (one side's move each), `1..=MAX_DEPTH`
    pub depth: u32,
    /// Captures and checking moves cost half a ply
    pub extensions: bool,
    /// Alpha-beta cutoffs; off gives plain minimax with the same result
    pub pruning: bool,
    /// Score root moves on separate threads (needs the `parallel` feature)
    pub parallel: bool,
    /// Stop the game after this many plies
    pub max_plies: Option<u32>,
}

impl SearchConfig {
    /// Reject settings the search cannot run with
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::ConfigValue`] when `depth` is zero or above [`MAX_DEPTH`].
    pub fn validate(&self) -> ChessEngineResult<()> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ChessEngineError::ConfigValue {
                field: "search.depth",
                reason: format!("{} is outside 1..={MAX_DEPTH}", self.depth),
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            extensions: true,
            pruning: true,
            parallel: true,
            max_plies: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub eval: EvalSettings,
}

impl EngineConfig {
    /// Read a config from a JSON file
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::ConfigIo`] when the file cannot be read,
    /// [`ChessEngineError::ConfigParse`] when it is not valid config JSON,
    /// [`ChessEngineError::ConfigValue`] when a value is out of range.
    pub fn load(path: &Path) -> ChessEngineResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ChessEngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.search.validate()?;
        Ok(config)
    }

    /// Read a config, falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[CONFIG] No config file at {:?}. Using defaults.", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("[CONFIG] Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("[CONFIG] {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON, creating parent directories
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::ConfigIo`] when the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> ChessEngineResult<()> {
        let io_error = |source: std::io::Error| ChessEngineError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(io_error)?;
        info!("[CONFIG] Saved config to {:?}", path);
        Ok(())
    }
}
