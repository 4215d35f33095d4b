use super::GachaEngine;
use crate::{filter_candidates, select_weighted, PlayerState, PullResult};
use tracing::{debug, warn};

impl GachaEngine {
    /// Resolve a single draw against `state`, mutating its counters and
    /// collection.
    pub fn resolve_pull(&mut self, state: &mut PlayerState) -> PullResult {
        let config = &self.config;
        let catalog = &self.catalog;
        let rng = &mut self.rng;

        state.advance_pity();
        let (labels, weights) = catalog.rarity_table();
        let rolled = select_weighted(&labels, &weights, rng)
            .copied()
            .unwrap_or(config.common_rarity.as_str());
        let (rarity, applied) = state.resolve_rarity(rolled, config);
        if let Some(applied) = applied {
            debug!(?applied, rolled, %rarity, "pity override");
        }

        let (type_names, type_weights) = catalog.active_type_table(state.active_types());
        if type_names.is_empty() {
            return PullResult::no_active_types();
        }

        let mut last_type = None;
        for attempt in 1..=config.max_search_attempts {
            let Some(&target) = select_weighted(&type_names, &type_weights, rng) else {
                break;
            };
            let candidates = filter_candidates(
                &catalog.items,
                target,
                &rarity,
                state.is_mastered(target),
                config.mastery_dual_bias,
                rng,
            );
            if let Some(index) = rng.pick_index(candidates.len()) {
                let item = candidates[index];
                let duplicate = !state.collected.insert(item.name.clone());
                state.record_rarity(&rarity, config);
                return PullResult::item(item, duplicate);
            }
            if attempt == 1 && config.first_miss_is_search_failure {
                state.reset_rare_pity();
                debug!(type_name = target, %rarity, "search failure on first roll");
                return PullResult::search_failure(target, &rarity);
            }
            last_type = Some(target);
        }

        warn!(
            attempts = config.max_search_attempts,
            %rarity,
            "no candidate found for any rolled type"
        );
        PullResult::search_exhausted(last_type, &rarity, config.max_search_attempts)
    }
}
