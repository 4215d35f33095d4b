use super::GachaEngine;
use crate::{filter_candidates, select_weighted, PlayerState, PullResult};

impl GachaEngine {
    /// One draw at a forced rarity, outside the pity system.
    ///
    /// Rolls a single active type and filters it the same way a normal draw
    /// does, with no reroll on an empty pool. The state is only read: pity,
    /// collection and history stay as they are. The duplicate flag reports
    /// whether the item is already collected.
    pub fn guaranteed_pull(&mut self, state: &PlayerState, rarity: &str) -> PullResult {
        let (type_names, type_weights) = self.catalog.active_type_table(state.active_types());
        let Some(&target) = select_weighted(&type_names, &type_weights, &mut self.rng) else {
            return PullResult::no_active_types();
        };
        let candidates = filter_candidates(
            &self.catalog.items,
            target,
            rarity,
            state.is_mastered(target),
            self.config.mastery_dual_bias,
            &mut self.rng,
        );
        match self.rng.pick_index(candidates.len()) {
            Some(index) => {
                let item = candidates[index];
                PullResult::item(item, state.collected.contains(&item.name))
            }
            None => PullResult::no_match(target, rarity),
        }
    }
}
