use crate::load::load_json;
use anyhow::Context;
use gachapull_core::{Catalog, GachaConfig, PlayerState};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub fn default_state_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("GACHAPULL_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".gachapull_state.json"))
}

/// Load the saved player state, or a fresh one when no save exists.
///
/// Fields missing from older saves are filled with empty defaults and the
/// result is normalized against `catalog`.
pub fn load_player_state(
    path: &Path,
    catalog: &Catalog,
    config: &GachaConfig,
) -> anyhow::Result<PlayerState> {
    if !path.exists() {
        info!(path = %path.display(), "no save found, starting fresh");
        return Ok(PlayerState::new(catalog));
    }
    let mut state: PlayerState = load_json(path)?;
    state.normalize(catalog, config);
    Ok(state)
}

/// Like [`load_player_state`], but any failure yields a fresh state.
pub fn load_player_state_or_default(
    path: &Path,
    catalog: &Catalog,
    config: &GachaConfig,
) -> PlayerState {
    match load_player_state(path, catalog, config) {
        Ok(state) => state,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "load failed, using defaults"
            );
            PlayerState::new(catalog)
        }
    }
}

pub fn save_player_state(path: &Path, state: &PlayerState) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(state).context("serialize player state")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))
}
