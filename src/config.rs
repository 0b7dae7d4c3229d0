use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Switches for the checks that sit on the boundary between the engine and
/// whatever drives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Reject moves of pieces that do not belong to the side to move.
    pub enforce_turn_owner: bool,
    /// While a capture chain is pending, only the chain piece may move.
    pub lock_chain_piece: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        RulesConfig {
            enforce_turn_owner: true,
            lock_chain_piece: true,
        }
    }

    /// Leaves turn ownership and chain continuation entirely to the caller.
    pub fn permissive() -> Self {
        RulesConfig {
            enforce_turn_owner: false,
            lock_chain_piece: false,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
