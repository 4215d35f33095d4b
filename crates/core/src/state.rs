use crate::{Catalog, GachaConfig, PullResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Persistent player progress. Missing fields in a stored document fall
/// back to empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(rename = "pity_legendario_contador", default)]
    pub legendary_pity: u32,
    #[serde(rename = "pity_raro_contador", default)]
    pub rare_pity: u32,
    #[serde(rename = "tipos_activos", default)]
    pub(crate) active_types: BTreeSet<String>,
    #[serde(rename = "tipos_con_maestria", default)]
    pub(crate) mastered_types: BTreeSet<String>,
    #[serde(rename = "resultados_previos", default)]
    pub history: Vec<PullResult>,
    #[serde(rename = "coleccion_nombres", default)]
    pub collected: BTreeSet<String>,
}

impl PlayerState {
    /// Fresh state with every catalog type active.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_types: catalog.type_names().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn active_types(&self) -> &BTreeSet<String> {
        &self.active_types
    }

    pub fn mastered_types(&self) -> &BTreeSet<String> {
        &self.mastered_types
    }

    pub fn is_active(&self, type_name: &str) -> bool {
        self.active_types.contains(type_name)
    }

    pub fn is_mastered(&self, type_name: &str) -> bool {
        self.mastered_types.contains(type_name)
    }

    pub(crate) fn active_types_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.active_types
    }

    pub(crate) fn mastered_types_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.mastered_types
    }

    /// Repair a loaded snapshot: drop types the catalog does not know,
    /// keep mastery within the active set and cap the history.
    pub fn normalize(&mut self, catalog: &Catalog, config: &GachaConfig) {
        self.active_types.retain(|name| catalog.has_type(name));
        let active = &self.active_types;
        self.mastered_types.retain(|name| active.contains(name));
        self.history.truncate(config.history_cap);
    }

    /// Prepend a batch (in draw order) and keep the newest `cap` entries.
    pub fn record_history(&mut self, batch: &[PullResult], cap: usize) {
        let mut history = Vec::with_capacity(batch.len() + self.history.len());
        history.extend_from_slice(batch);
        history.append(&mut self.history);
        history.truncate(cap);
        self.history = history;
    }

    /// Distinct catalog items collected, out of the catalog size.
    pub fn collection_progress(&self, catalog: &Catalog) -> (usize, usize) {
        let owned = catalog
            .items
            .iter()
            .filter(|item| self.collected.contains(&item.name))
            .count();
        (owned, catalog.items.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStatus {
    pub name: String,
    pub active: bool,
    pub mastered: bool,
}

/// Read-only snapshot for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PityStatus {
    pub legendary: u32,
    pub legendary_threshold: u32,
    pub rare: u32,
    pub rare_threshold: u32,
    pub types: Vec<TypeStatus>,
    pub collected: usize,
    pub catalog_size: usize,
}

impl PityStatus {
    pub fn capture(state: &PlayerState, catalog: &Catalog, config: &GachaConfig) -> Self {
        let (collected, catalog_size) = state.collection_progress(catalog);
        Self {
            legendary: state.legendary_pity,
            legendary_threshold: config.legendary_hard_pity,
            rare: state.rare_pity,
            rare_threshold: config.rare_soft_pity,
            types: catalog
                .type_names()
                .map(|name| TypeStatus {
                    name: name.to_string(),
                    active: state.is_active(name),
                    mastered: state.is_mastered(name),
                })
                .collect(),
            collected,
            catalog_size,
        }
    }
}
