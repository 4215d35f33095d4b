use crate::schema::CatalogFile;
use anyhow::{bail, Context};
use gachapull_core::{Catalog, GachaConfig};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    let catalog = file
        .into_catalog()
        .with_context(|| format!("convert {}", path.display()))?;
    validate_catalog(&catalog).with_context(|| format!("validate {}", path.display()))?;
    info!(
        path = %path.display(),
        types = catalog.types.len(),
        items = catalog.items.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(raw).context("parse catalog")?;
    let catalog = file.into_catalog()?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> anyhow::Result<()> {
    if catalog.types.is_empty() {
        bail!("catalog has no types");
    }
    let mut type_names = HashSet::new();
    for def in &catalog.types {
        if !type_names.insert(def.name.as_str()) {
            bail!("duplicate type {}", def.name);
        }
        if !positive(def.base_weight) {
            bail!("type {} has invalid weight {}", def.name, def.base_weight);
        }
    }
    if catalog.rarity_weights.is_empty() {
        bail!("catalog has no rarities");
    }
    for entry in &catalog.rarity_weights {
        if !positive(entry.weight) {
            bail!("rarity {} has invalid weight {}", entry.rarity, entry.weight);
        }
    }
    let mut item_names = HashSet::new();
    for item in &catalog.items {
        if !item_names.insert(item.name.as_str()) {
            bail!("duplicate item {}", item.name);
        }
        if item.types.is_empty() {
            bail!("item {} has no types", item.name);
        }
        if let Some(unknown) = item.types.iter().find(|name| !type_names.contains(name.as_str())) {
            bail!("item {} has unknown type {}", item.name, unknown);
        }
        if !catalog.has_rarity(&item.rarity) {
            bail!("item {} has unknown rarity {}", item.name, item.rarity);
        }
    }
    Ok(())
}

/// Pity rarity labels from `config` that the catalog does not define. Each
/// one is logged; the pity rule tied to it simply never fires.
pub fn check_config_labels(catalog: &Catalog, config: &GachaConfig) -> Vec<String> {
    let mut missing = Vec::new();
    for label in [
        &config.common_rarity,
        &config.rare_rarity,
        &config.legendary_rarity,
    ] {
        if !catalog.has_rarity(label) {
            warn!(rarity = %label, "configured rarity missing from catalog");
            missing.push(label.clone());
        }
    }
    missing
}

/// Load tunables from `path`; a missing file means defaults.
pub fn load_gacha_config(path: &Path) -> anyhow::Result<GachaConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(GachaConfig::default());
    }
    let config: GachaConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

pub(crate) fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn positive(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}
