use crate::{GachaConfig, PlayerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PityOverride {
    /// Legendary forced by the hard threshold.
    Hard,
    /// Lowest tier upgraded to rare by the soft threshold.
    Soft,
}

impl PlayerState {
    /// Count one more draw on both counters.
    pub fn advance_pity(&mut self) {
        self.legendary_pity = self.legendary_pity.saturating_add(1);
        self.rare_pity = self.rare_pity.saturating_add(1);
    }

    /// Apply the pity overrides to a rolled rarity. Hard pity is checked
    /// first and short-circuits the soft check.
    pub fn resolve_rarity(
        &self,
        rolled: &str,
        config: &GachaConfig,
    ) -> (String, Option<PityOverride>) {
        if self.legendary_pity >= config.legendary_hard_pity {
            return (config.legendary_rarity.clone(), Some(PityOverride::Hard));
        }
        if self.rare_pity >= config.rare_soft_pity && rolled == config.common_rarity {
            return (config.rare_rarity.clone(), Some(PityOverride::Soft));
        }
        (rolled.to_string(), None)
    }

    /// Reset counters after an item of `rarity` was obtained.
    pub fn record_rarity(&mut self, rarity: &str, config: &GachaConfig) {
        if rarity == config.legendary_rarity {
            self.legendary_pity = 0;
            self.rare_pity = 0;
        } else if rarity == config.rare_rarity {
            self.rare_pity = 0;
        }
    }

    pub fn reset_rare_pity(&mut self) {
        self.rare_pity = 0;
    }
}
