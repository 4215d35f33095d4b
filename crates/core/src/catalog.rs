use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub base_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityWeight {
    pub rarity: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub types: Vec<String>,
    pub rarity: String,
}

impl ItemDef {
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|name| name == type_name)
    }

    pub fn is_dual_type(&self) -> bool {
        self.types.len() > 1
    }
}

/// Static item catalog. Loaded once and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub types: Vec<TypeDef>,
    /// Rarity labels in document order; the key set is the rarity enum.
    pub rarity_weights: Vec<RarityWeight>,
    pub items: Vec<ItemDef>,
}

impl Catalog {
    pub fn type_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.types.iter().map(|def| def.name.as_str())
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.name == name)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.type_def(name).is_some()
    }

    pub fn has_rarity(&self, rarity: &str) -> bool {
        self.rarity_weights.iter().any(|entry| entry.rarity == rarity)
    }

    pub fn item(&self, name: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Parallel rarity labels and weights for a rarity roll.
    pub fn rarity_table(&self) -> (Vec<&str>, Vec<f64>) {
        self.rarity_weights
            .iter()
            .map(|entry| (entry.rarity.as_str(), entry.weight))
            .unzip()
    }

    /// Parallel names and base weights of the catalog types present in
    /// `active`, in catalog order.
    pub fn active_type_table(&self, active: &BTreeSet<String>) -> (Vec<&str>, Vec<f64>) {
        self.types
            .iter()
            .filter(|def| active.contains(&def.name))
            .map(|def| (def.name.as_str(), def.base_weight))
            .unzip()
    }
}
