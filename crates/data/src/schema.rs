use anyhow::{anyhow, Context};
use gachapull_core::{Catalog, ItemDef, RarityWeight, TypeDef};
use serde::{Deserialize, Serialize};

pub use gachapull_core::{GachaConfig, PlayerState, PullResult};

/// Catalog document as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub tipos_base: Vec<TypeEntry>,
    /// Rarity label to weight, kept in document order.
    pub probabilidades_base: serde_json::Map<String, serde_json::Value>,
    pub pokemons: Vec<ItemEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEntry {
    pub nombre: String,
    pub probabilidad_base: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    pub nombre: String,
    pub tipos: Vec<String>,
    pub rareza: String,
}

impl CatalogFile {
    pub fn into_catalog(self) -> anyhow::Result<Catalog> {
        let rarity_weights = self
            .probabilidades_base
            .into_iter()
            .map(|(rarity, value)| {
                let weight = value
                    .as_f64()
                    .ok_or_else(|| anyhow!("weight for rarity {rarity} is not a number"))?;
                Ok(RarityWeight { rarity, weight })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .context("probabilidades_base")?;
        Ok(Catalog {
            types: self
                .tipos_base
                .into_iter()
                .map(|entry| TypeDef {
                    name: entry.nombre,
                    base_weight: entry.probabilidad_base,
                })
                .collect(),
            rarity_weights,
            items: self
                .pokemons
                .into_iter()
                .map(|entry| ItemDef {
                    name: entry.nombre,
                    types: entry.tipos,
                    rarity: entry.rareza,
                })
                .collect(),
        })
    }
}
