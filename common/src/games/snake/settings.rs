use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::level::ScoringFormula;
use super::types::{GrowthRule, Mode};

pub const MIN_BOARD_SIZE: u32 = 4;
pub const MAX_BOARD_SIZE: u32 = 100;

/// Persisted game configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeGameConfig {
    pub size: u32,
    pub mode: Mode,
    #[serde(default)]
    pub scoring_formula: ScoringFormula,
    #[serde(default)]
    pub growth_rule: GrowthRule,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SnakeGameConfig {
    fn default() -> Self {
        Self {
            size: 15,
            mode: Mode::Normal,
            scoring_formula: ScoringFormula::Linear,
            growth_rule: GrowthRule::Digest,
            seed: None,
        }
    }
}

impl Validate for SnakeGameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.size < MIN_BOARD_SIZE {
            return Err(format!("size must be at least {}", MIN_BOARD_SIZE));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(format!("size must not exceed {}", MAX_BOARD_SIZE));
        }
        Ok(())
    }
}

/// Settings one session is created from.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub size: i32,
    pub mode: Mode,
    pub scoring_formula: ScoringFormula,
    pub growth_rule: GrowthRule,
    pub seed: Option<u64>,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&SnakeGameConfig::default())
    }
}

impl From<&SnakeGameConfig> for SnakeSessionSettings {
    fn from(config: &SnakeGameConfig) -> Self {
        Self {
            size: config.size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE) as i32,
            mode: config.mode,
            scoring_formula: config.scoring_formula,
            growth_rule: config.growth_rule,
            seed: config.seed,
        }
    }
}
