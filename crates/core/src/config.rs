use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for pity thresholds, search bounds and rarity labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GachaConfig {
    pub legendary_hard_pity: u32,
    pub rare_soft_pity: u32,
    pub max_search_attempts: u32,
    pub history_cap: usize,
    /// Chance that a mastered type draws from its dual-type items only.
    pub mastery_dual_bias: f64,
    /// An empty pool on the first type roll ends the draw as a search
    /// failure instead of rerolling.
    pub first_miss_is_search_failure: bool,
    pub common_rarity: String,
    pub rare_rarity: String,
    pub legendary_rarity: String,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            legendary_hard_pity: 90,
            rare_soft_pity: 10,
            max_search_attempts: 50,
            history_cap: 50,
            mastery_dual_bias: 0.8,
            first_miss_is_search_failure: true,
            common_rarity: "comun".to_string(),
            rare_rarity: "raro".to_string(),
            legendary_rarity: "legendario".to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("mastery_dual_bias must be within [0, 1], got {0}")]
    DualBiasOutOfRange(f64),
    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),
}

impl GachaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.mastery_dual_bias) {
            return Err(ConfigError::DualBiasOutOfRange(self.mastery_dual_bias));
        }
        if self.legendary_hard_pity == 0 {
            return Err(ConfigError::ZeroValue("legendary_hard_pity"));
        }
        if self.rare_soft_pity == 0 {
            return Err(ConfigError::ZeroValue("rare_soft_pity"));
        }
        if self.max_search_attempts == 0 {
            return Err(ConfigError::ZeroValue("max_search_attempts"));
        }
        if self.history_cap == 0 {
            return Err(ConfigError::ZeroValue("history_cap"));
        }
        Ok(())
    }
}
