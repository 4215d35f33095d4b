use crate::{Catalog, GachaConfig, PityStatus, PlayerState, PullResult, RngState};
use tracing::debug;

mod guaranteed;
mod resolve;

/// Outcome of a batch: the state to persist and this batch's results in
/// draw order.
#[derive(Debug, Clone)]
pub struct PullBatch {
    pub state: PlayerState,
    pub results: Vec<PullResult>,
}

/// Draw resolver over one catalog and one random source.
///
/// The player state is passed in and handed back; the engine never keeps
/// it. Draws within a batch run strictly in order since each one reads the
/// counters left by the previous.
#[derive(Debug)]
pub struct GachaEngine {
    pub config: GachaConfig,
    pub catalog: Catalog,
    pub rng: RngState,
}

impl GachaEngine {
    pub fn new(config: GachaConfig, catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(config, catalog, RngState::from_seed(seed))
    }

    pub fn with_rng(config: GachaConfig, catalog: Catalog, rng: RngState) -> Self {
        Self {
            config,
            catalog,
            rng,
        }
    }

    pub fn new_player(&self) -> PlayerState {
        PlayerState::new(&self.catalog)
    }

    /// Resolve `count` draws and fold them into the history. A count of zero
    /// returns the state unchanged with no results.
    pub fn pull(&mut self, mut state: PlayerState, count: u32) -> PullBatch {
        if count == 0 {
            return PullBatch {
                state,
                results: Vec::new(),
            };
        }
        let mut results = Vec::with_capacity((count as usize).min(self.config.history_cap));
        for _ in 0..count {
            let result = self.resolve_pull(&mut state);
            results.push(result);
        }
        state.record_history(&results, self.config.history_cap);
        debug!(
            count,
            legendary_pity = state.legendary_pity,
            rare_pity = state.rare_pity,
            history = state.history.len(),
            "batch resolved"
        );
        PullBatch { state, results }
    }

    pub fn status(&self, state: &PlayerState) -> PityStatus {
        PityStatus::capture(state, &self.catalog, &self.config)
    }
}
