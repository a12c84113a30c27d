//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! depth = 3
//! algorithm = "negamax"
//! ordering = "none"
//!
//! [eval]
//! variant = "positional"
//! check_bonus = 100000
//! mate_bonus = 1000000
//! check_convention = "favor_attacker"
//! ```
//!
//! Every field is optional and falls back to the value shown.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: u8 = 8;

/// Upper bound for the check/checkmate bonuses, well inside the search window.
pub const MAX_BONUS: i32 = 100_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which tree search drives the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Negamax with alpha-beta pruning
    #[default]
    Negamax,
    /// Explicit maximizing/minimizing alpha-beta
    Minimax,
}

/// Where the move orderer's scores come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingHeuristic {
    /// All scores zero: moves are searched in generation order
    #[default]
    None,
    /// Captures (most valuable victim first) and promotions ahead of quiet moves
    Captures,
}

/// Which terms the static evaluator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalVariant {
    /// Material only, king counted at 900
    Material,
    /// Material without the king, plus knight/bishop/rook/queen tables
    #[default]
    Positional,
    /// Material without the king, plus tables for every piece kind
    FullTables,
}

/// Who the check/checkmate bonus favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckConvention {
    /// Good for the side giving check
    #[default]
    FavorAttacker,
    /// Good for the side in check. Reproduces an old sign error; do not use for play.
    FavorDefender,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    pub variant: EvalVariant,
    /// Bonus when the side to move is in check but not mated
    pub check_bonus: i32,
    /// Bonus when the side to move is checkmated
    pub mate_bonus: i32,
    pub check_convention: CheckConvention,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            variant: EvalVariant::Positional,
            check_bonus: 100_000,
            mate_bonus: 1_000_000,
            check_convention: CheckConvention::FavorAttacker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    pub algorithm: Algorithm,
    pub ordering: OrderingHeuristic,
    pub eval: EvalConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            algorithm: Algorithm::Negamax,
            ordering: OrderingHeuristic::None,
            eval: EvalConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "depth must be in 1..={MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        let eval = &self.eval;
        if eval.check_bonus <= 0 {
            return Err(ConfigError::Invalid(format!(
                "check_bonus must be positive, got {}",
                eval.check_bonus
            )));
        }
        if eval.mate_bonus <= eval.check_bonus {
            return Err(ConfigError::Invalid(format!(
                "mate_bonus ({}) must exceed check_bonus ({})",
                eval.mate_bonus, eval.check_bonus
            )));
        }
        if eval.mate_bonus > MAX_BONUS {
            return Err(ConfigError::Invalid(format!(
                "mate_bonus must be at most {MAX_BONUS}, got {}",
                eval.mate_bonus
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
